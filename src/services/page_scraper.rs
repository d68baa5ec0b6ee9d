use std::path::PathBuf;

use url::Url;

use crate::{dal::page_store::PageStore, domain::seed::target_url};

use super::BrowserSession;

/// Visits every seed in order and saves each rendered page. Failures stay with
/// their seed; the number of pages saved is returned.
pub async fn scrape_pages<S: BrowserSession>(
    session: &S,
    seeds: &[String],
    base_url: Option<&Url>,
    store: &PageStore,
) -> usize {
    let total = seeds.len();
    let mut saved = 0;

    for (i, seed) in seeds.iter().enumerate() {
        let url = target_url(seed, base_url);
        log::info!("Scraping {} / {}: {}", i + 1, total, url);

        match make_request(session, &url, store).await {
            Ok(path) => {
                log::debug!("Saved {} to {:?}", url, path);
                saved += 1;
            }
            Err(e) => log::error!("Skipping {}, page was not saved: {:?}", url, e),
        }
    }

    log::info!("Saved {} of {} pages to {:?}", saved, total, store.dir());
    saved
}

/// Loads one page, reveals the email when it is hidden behind a click, and
/// writes whatever the browser rendered to the store.
pub async fn make_request<S: BrowserSession>(
    session: &S,
    url: &str,
    store: &PageStore,
) -> anyhow::Result<PathBuf> {
    if let Err(e) = session.goto(url).await {
        log::debug!("Navigation to {} failed: {:?}", url, e);
    }

    match session.reveal_email().await {
        Ok(true) => log::debug!("Revealed email on {}", url),
        Ok(false) => {}
        Err(e) => log::debug!("No email to reveal on {}: {:?}", url, e),
    }

    let title = session.title().await?;
    let html = session.page_source().await?;

    Ok(store.save_page(&title, &html).await?)
}
