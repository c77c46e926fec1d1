use anyhow::Context;
use env_logger::Env;
use global500::{
    configuration::get_configuration,
    services::{save_companies_csv, scrape_all_years, RankingClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;
    configuration
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let client = RankingClient::new(&configuration.scraper)?;

    let summary = scrape_all_years(&client, &configuration.scraper).await;
    log::info!(
        "Collected {} companies from {} of {} years",
        summary.records.len(),
        summary.years_appended(),
        summary.outcomes.len()
    );

    save_companies_csv(&summary.records, &configuration.output.file_path())
}
