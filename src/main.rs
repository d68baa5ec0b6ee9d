use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use enf_scraper::{
    configuration::get_configuration,
    startup::{run_extract, run_scrape},
};

#[derive(Parser)]
#[command(name = "enf-scraper")]
#[command(about = "enfsolar.com company directory scraper")]
struct Cli {
    /// Run the scraper
    #[arg(long, requires = "csv_file")]
    scrape: bool,

    /// Run the extractor
    #[arg(long)]
    extract: bool,

    /// File path for .csv list of company page urls
    #[arg(long)]
    csv_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let configuration = get_configuration().context("Failed to read configuration.")?;

    if cli.scrape {
        let csv_file = cli
            .csv_file
            .as_deref()
            .context("--scrape needs a --csv-file to read urls from")?;
        let saved = run_scrape(&configuration, csv_file).await?;
        log::info!("Scrape finished, {} pages saved", saved);
    }

    if cli.extract {
        let written = run_extract(&configuration).await?;
        log::info!("Extract finished, {} records written", written);
    }

    if !cli.scrape && !cli.extract {
        log::warn!("Nothing to do, pass --scrape and/or --extract");
    }

    Ok(())
}
