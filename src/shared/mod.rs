pub mod api;
pub mod query;
pub mod validation;
