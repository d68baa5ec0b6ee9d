pub mod droid;
pub mod page_scraper;
pub mod profile_extractor;

pub use droid::*;
pub use page_scraper::*;
pub use profile_extractor::*;
