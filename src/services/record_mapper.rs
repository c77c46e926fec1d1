use serde_json::Value;

use crate::{domain::CompanyRecord, error::ScrapeError};

const ITEMS_PATH: [&str; 4] = ["props", "pageProps", "franchiseList", "items"];

fn navigate<'a>(document: &'a Value, path: &[&str]) -> Result<&'a Value, ScrapeError> {
    path.iter().try_fold(document, |node, key| {
        node.get(key)
            .ok_or_else(|| ScrapeError::MissingKey(key.to_string()))
    })
}

fn field(map: &Value, key: &str) -> Value {
    map.get(key).cloned().unwrap_or(Value::Null)
}

pub fn map_company(company: &Value, year: u16) -> Result<CompanyRecord, ScrapeError> {
    let data = company
        .get("data")
        .ok_or_else(|| ScrapeError::MissingKey("data".to_string()))?;

    Ok(CompanyRecord {
        year,
        name: field(company, "name"),
        rank: field(company, "rank"),
        order: field(company, "order"),
        revenues: field(data, "Revenues ($M)"),
        revenue_percent_change: field(data, "Revenue Percent Change"),
        profits: field(data, "Profits ($M)"),
        profits_percent_change: field(data, "Profits Percent Change"),
        assets: field(data, "Assets ($M)"),
        headquarters_city: field(data, "Headquarters City"),
        headquarters_state: field(data, "Headquarters State"),
        change_in_rank: field(data, "Change in Rank"),
        gained_in_rank: field(data, "Gained in Rank"),
        dropped_in_rank: field(data, "Dropped in Rank"),
        years_on_list: field(data, "Years on Global 500 List"),
        newcomer: field(data, "Newcomer to the Global 500"),
        profitable: field(data, "Profitable"),
        female_ceo: field(data, "Female CEO"),
        growth_in_jobs: field(data, "Growth in Jobs"),
        sector: field(data, "Sector"),
        fastest_growing: field(data, "Fastest Growing Companies"),
        change_the_world: field(data, "Change the World"),
        most_admired: field(data, "World's Most Admired Companies"),
        fortune_500: field(data, "Fortune 500"),
        best_companies: field(data, "Best Companies"),
        non_us: field(data, "Non-U.S. Companies"),
        employees: field(data, "Employees"),
        industry: field(data, "Industry"),
        country: field(data, "Country / Territory"),
        slug: field(company, "slug"),
    })
}

/// Maps every company listed in the page payload. Any missing key drops the whole year.
pub fn extract_companies(document: &Value, year: u16) -> Result<Vec<CompanyRecord>, ScrapeError> {
    let result: Result<Vec<CompanyRecord>, ScrapeError> =
        navigate(document, &ITEMS_PATH).and_then(|items| {
            items
                .as_array()
                .ok_or_else(|| ScrapeError::MissingKey("items".to_string()))?
                .iter()
                .map(|company| map_company(company, year))
                .collect()
        });

    if let Err(ref e) = result {
        log::error!("Error: {} (year {})", e, year);
    }

    result
}
