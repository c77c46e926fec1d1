pub mod dataset_writer;
pub mod next_data_extractor;
pub mod page_fetcher;
pub mod record_mapper;
pub mod year_scraper;

pub use dataset_writer::*;
pub use next_data_extractor::*;
pub use page_fetcher::*;
pub use record_mapper::*;
pub use year_scraper::*;
