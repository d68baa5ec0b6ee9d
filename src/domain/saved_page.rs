pub const PAGE_EXTENSION: &str = "html";

/// File name a rendered page is stored under, derived from its title.
///
/// Spaces become underscores. Path separators are replaced the same way so the
/// page always lands directly inside the storage directory.
pub fn page_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    match stem.is_empty() {
        true => format!("untitled.{}", PAGE_EXTENSION),
        false => format!("{}.{}", stem, PAGE_EXTENSION),
    }
}
