use shared::models::Month;
use thiserror::Error;

/// Everything that can go wrong while loading and reshaping the two inputs.
/// All of these are fatal at startup: the dashboard needs the complete
/// dataset to render at all, so there is no partial-load path.
#[derive(Error, Debug)]
pub enum ReshapeError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV read error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("schema error: {0}")]
    Schema(String),

    #[error("value '{value}' for {line_of_business}/{month} is not numeric after cleaning")]
    Parse {
        value: String,
        line_of_business: String,
        month: Month,
    },

    #[error("month column '{label}' is not one of the twelve standard abbreviations")]
    UnknownMonth { label: String },
}
