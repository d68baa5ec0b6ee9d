use psl::Type;
use url::{Host, Url};

/// Registrable domain of a website, e.g. `example.co.uk` for
/// `https://sub.example.co.uk/path`.
///
/// Only the ICANN section of the public suffix list counts, so company sites
/// hosted on platforms like `acme.blogspot.com` map to the platform's domain.
/// Hosts under an unknown TLD have no registrable domain. Websites listed
/// without a scheme (`www.example.com`) are read as http urls.
pub fn extract_domain(website: &str) -> Option<String> {
    let website = website.trim();
    if website.is_empty() {
        return None;
    }

    let parsed_url = match Url::parse(website) {
        Ok(url) if url.has_host() => url,
        _ => Url::parse(&format!("http://{}", website)).ok()?,
    };

    match parsed_url.host() {
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.').to_lowercase();
            registrable_domain(&host).map(|domain| domain.to_string())
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) | None => None,
    }
}

/// The longest ICANN suffix of `host` plus the label in front of it.
fn registrable_domain(host: &str) -> Option<&str> {
    let mut label_start = 0;

    for (dot, _) in host.match_indices('.') {
        let suffix_start = dot + 1;
        if is_icann_suffix(&host[suffix_start..]) {
            return Some(&host[label_start..]);
        }
        label_start = suffix_start;
    }

    None
}

fn is_icann_suffix(candidate: &str) -> bool {
    match psl::suffix(candidate.as_bytes()) {
        Some(suffix) => {
            suffix.as_bytes() == candidate.as_bytes()
                && suffix.is_known()
                && matches!(suffix.typ(), Some(Type::Icann))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::extract_domain;

    #[test]
    fn extract_domain_multi_label_suffix() {
        assert_eq!(
            extract_domain("https://orders.solar.example.co.uk/page"),
            Some("example.co.uk".to_string())
        );
    }

    #[test]
    fn extract_domain_strips_subdomains() {
        assert_eq!(
            extract_domain("http://www.acmesolar.com/contact?lang=en"),
            Some("acmesolar.com".to_string())
        );
    }

    #[test]
    fn extract_domain_without_scheme() {
        assert_eq!(
            extract_domain("www.sunpower.de"),
            Some("sunpower.de".to_string())
        );
    }

    #[test]
    fn extract_domain_lowercases_host() {
        assert_eq!(
            extract_domain("HTTPS://WWW.SolarCo.COM.AU/"),
            Some("solarco.com.au".to_string())
        );
    }

    #[test]
    fn extract_domain_hosted_sites_use_platform_domain() {
        assert_eq!(
            extract_domain("https://acme.blogspot.com/"),
            Some("blogspot.com".to_string())
        );
        assert_eq!(
            extract_domain("https://acme.wixsite.com/solar"),
            Some("wixsite.com".to_string())
        );
        assert_eq!(
            extract_domain("https://acme.github.io/"),
            Some("github.io".to_string())
        );
    }

    #[test]
    fn extract_domain_unknown_tld() {
        assert_eq!(extract_domain("http://acme.local/"), None);
        assert_eq!(extract_domain("intranet.acme.corp"), None);
    }

    #[test]
    fn extract_domain_invalid() {
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("   "), None);
        assert_eq!(extract_domain("http://192.168.0.1/admin"), None);
        assert_eq!(extract_domain("com"), None);
    }
}
