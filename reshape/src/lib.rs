// Reshape library root: turns the two wide CSV inputs (monthly costs and
// monthly revenue per business line) into the long-form combined dataset the
// dashboard serves.

pub mod config;
pub mod data;
pub mod error;

pub use crate::data::reshape::load_combined_dataset;
pub use crate::error::ReshapeError;
