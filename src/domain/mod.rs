pub mod contact_record;
pub mod saved_page;
pub mod seed;
pub mod website;
