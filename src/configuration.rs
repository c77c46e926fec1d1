use std::path::PathBuf;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_BASE_URL: &str = "https://fortune.com/ranking/global500";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36 Edg/129.0.0.0";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    pub base_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub first_year: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub last_year: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub min_delay_secs: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_delay_secs: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub directory: String,
    pub file_name: String,
}

impl ScraperSettings {
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        self.first_year..=self.last_year
    }
}

impl OutputSettings {
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.file_name)
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let scraper = &self.scraper;
        if scraper.first_year > scraper.last_year {
            return Err(format!(
                "first_year ({}) is after last_year ({})",
                scraper.first_year, scraper.last_year
            ));
        }
        if scraper.min_delay_secs < 0.0 || scraper.max_delay_secs < 0.0 {
            return Err("Delay bounds can't be negative".to_string());
        }
        if scraper.min_delay_secs > scraper.max_delay_secs {
            return Err(format!(
                "min_delay_secs ({}) is greater than max_delay_secs ({})",
                scraper.min_delay_secs, scraper.max_delay_secs
            ));
        }
        if self.output.file_name.is_empty() {
            return Err("Output file name is empty".to_string());
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .set_default("scraper.base_url", DEFAULT_BASE_URL)?
        .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
        .set_default("scraper.first_year", 1995)?
        .set_default("scraper.last_year", 2024)?
        .set_default("scraper.min_delay_secs", 3.0)?
        .set_default("scraper.max_delay_secs", 10.0)?
        .set_default("output.directory", "data")?
        .set_default("output.file_name", "fortune_500_global_1995_2024.csv")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        // E.g. `APP_SCRAPER__FIRST_YEAR=2020` would set `Settings.scraper.first_year`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
