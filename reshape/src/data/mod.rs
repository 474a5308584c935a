pub mod currency;
pub mod reshape;
pub mod wide_table;
