use thiserror::Error;

/// Recoverable failures. Each one drops the affected year and the run moves on.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScrapeError {
    #[error("Failed to retrieve data for the year {year}, Status code: {status}")]
    HttpStatus { year: u16, status: u16 },
    #[error("An error occurred while requesting the year {year}: {message}")]
    Network { year: u16, message: String },
    #[error("Couldn't find the '__NEXT_DATA__' script tag.")]
    MissingScriptTag,
    #[error("Failed to parse JSON data: {0}")]
    MalformedJson(String),
    #[error("Missing key in JSON data - '{0}'")]
    MissingKey(String),
}
