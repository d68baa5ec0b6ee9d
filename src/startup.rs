use std::path::Path;

use anyhow::Context;

use crate::{
    configuration::Settings,
    dal::{page_store::PageStore, report_file, seed_file},
    services::{extract_pages, scrape_pages, Droid, ProfileExtractor},
};

/// Scrape phase: saves the rendered page of every seed in `csv_file`.
pub async fn run_scrape(settings: &Settings, csv_file: &Path) -> anyhow::Result<usize> {
    let seeds = seed_file::read_seeds(csv_file)?;

    let store = PageStore::new(&settings.storage.pages_dir);
    store.ensure_dir().await?;

    let droid = Droid::new(&settings.scraper)
        .await
        .context("Failed to open browser session")?;

    let saved = scrape_pages(
        &droid,
        &seeds,
        settings.scraper.base_url.as_ref(),
        &store,
    )
    .await;

    droid.quit().await;

    Ok(saved)
}

/// Extract phase: turns every saved page into a record and writes the report.
pub async fn run_extract(settings: &Settings) -> anyhow::Result<usize> {
    let store = PageStore::new(&settings.storage.pages_dir);
    let extractor = ProfileExtractor::new();

    let records = extract_pages(&store, &extractor)
        .await
        .context("Failed to extract saved pages")?;

    let written = report_file::write_report(&settings.storage.report_path, &records)
        .context("Failed to write report")?;

    Ok(written)
}
