pub mod company_record;

pub use company_record::*;
