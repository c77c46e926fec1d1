use std::time::Duration;

use rand::Rng;

use crate::{
    configuration::ScraperSettings,
    domain::CompanyRecord,
    services::{extract_companies, extract_next_data, PageSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearOutcome {
    Appended(usize),
    Empty,
    MapFailed,
    ExtractFailed,
    FetchFailed,
}

#[derive(Debug, Default)]
pub struct ScrapeSummary {
    pub records: Vec<CompanyRecord>,
    pub outcomes: Vec<(u16, YearOutcome)>,
}

impl ScrapeSummary {
    pub fn years_appended(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, YearOutcome::Appended(_)))
            .count()
    }
}

pub async fn scrape_year<S: PageSource>(
    source: &S,
    year: u16,
    records: &mut Vec<CompanyRecord>,
) -> YearOutcome {
    log::info!("Processing data for the year {}", year);

    let Ok(html_content) = source.fetch_page(year).await else {
        log::warn!(
            "Skipping the year {} due to data retrieval failure.",
            year
        );
        return YearOutcome::FetchFailed;
    };

    log::info!("Extracting data for the year {}...", year);
    let Ok(document) = extract_next_data(&html_content) else {
        log::warn!("Failed to extract JSON data for the year {}", year);
        return YearOutcome::ExtractFailed;
    };
    log::info!("Successfully extracted JSON data for the year {}", year);

    match extract_companies(&document, year) {
        Ok(companies) if companies.is_empty() => {
            log::warn!("Found no companies for the year {}", year);
            YearOutcome::Empty
        }
        Ok(companies) => {
            let count = companies.len();
            records.extend(companies);
            log::info!(
                "Successfully extracted {} companies for the year {}",
                count,
                year
            );
            YearOutcome::Appended(count)
        }
        Err(_) => {
            log::warn!("Failed to extract company data for the year {}", year);
            YearOutcome::MapFailed
        }
    }
}

fn random_delay(min_secs: f64, max_secs: f64) -> Duration {
    if max_secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(rand::thread_rng().gen_range(min_secs..=max_secs))
}

/// Walks the configured years in ascending order, one request at a time.
pub async fn scrape_all_years<S: PageSource>(
    source: &S,
    settings: &ScraperSettings,
) -> ScrapeSummary {
    let mut summary = ScrapeSummary::default();
    let mut years = settings.years().peekable();

    while let Some(year) = years.next() {
        let outcome = scrape_year(source, year, &mut summary.records).await;
        summary.outcomes.push((year, outcome));

        if years.peek().is_some() {
            let wait_time = random_delay(settings.min_delay_secs, settings.max_delay_secs);
            if !wait_time.is_zero() {
                log::info!(
                    "Waiting for {:.2} seconds before the next request...",
                    wait_time.as_secs_f64()
                );
                tokio::time::sleep(wait_time).await;
            }
        }
    }

    summary
}
