pub mod entries;
pub mod topics;
