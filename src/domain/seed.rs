use url::Url;

/// Url the browser should open for a seed read from the input table.
///
/// Absolute urls are used untouched. Anything else is treated as a path on the
/// directory site when a base url is configured, and passed through otherwise.
pub fn target_url(seed: &str, base_url: Option<&Url>) -> String {
    if Url::parse(seed).is_ok() {
        return seed.to_string();
    }

    match base_url.and_then(|base| base.join(seed).ok()) {
        Some(url) => url.to_string(),
        None => seed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::target_url;

    #[test]
    fn absolute_url_is_kept() {
        let base = Url::parse("https://www.enfsolar.com/").unwrap();
        let seed = "https://www.enfsolar.com/acme-solar";

        assert_eq!(target_url(seed, Some(&base)), seed);
        assert_eq!(target_url(seed, None), seed);
    }

    #[test]
    fn fragment_is_joined_onto_base() {
        let base = Url::parse("https://www.enfsolar.com/").unwrap();

        assert_eq!(
            target_url("/directory/installer/1234", Some(&base)),
            "https://www.enfsolar.com/directory/installer/1234"
        );
        assert_eq!(
            target_url("acme-solar", Some(&base)),
            "https://www.enfsolar.com/acme-solar"
        );
    }

    #[test]
    fn fragment_without_base_is_passed_through() {
        assert_eq!(target_url("acme-solar", None), "acme-solar");
    }
}
