pub mod page_store;
pub mod report_file;
pub mod seed_file;
