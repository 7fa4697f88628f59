pub mod listing;
pub mod validation;
