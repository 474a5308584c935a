use crate::error::ReshapeError;
use csv::ReaderBuilder;
use shared::models::Month;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Raw schema: column 0 is the business line, columns 1-2 are non-month
/// metadata, columns 3..=14 are the twelve month columns.
pub const MONTH_COLUMN_START: usize = 3;
pub const MONTH_COLUMN_COUNT: usize = 12;
const MIN_COLUMNS: usize = MONTH_COLUMN_START + MONTH_COLUMN_COUNT;

/// One wide input row: a business line plus its twelve raw month cells,
/// aligned with `WideTable::months`. Cells stay unparsed here; the melt step
/// applies the per-source value parser.
#[derive(Debug, Clone)]
pub struct WideRow {
    pub line_of_business: String,
    pub month_values: Vec<String>,
}

/// One wide CSV input, schema-validated: month headers are resolved to
/// `Month` values up front so every later step works with the fixed twelve.
#[derive(Debug, Clone)]
pub struct WideTable {
    pub months: [Month; MONTH_COLUMN_COUNT],
    pub rows: Vec<WideRow>,
}

impl WideTable {
    pub fn from_csv_path(path: &Path) -> Result<WideTable, ReshapeError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReshapeError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ReshapeError::from(e)
            }
        })?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        if headers.len() < MIN_COLUMNS {
            return Err(ReshapeError::Schema(format!(
                "'{}' has {} columns, expected at least {} (business line plus twelve month columns)",
                path.display(),
                headers.len(),
                MIN_COLUMNS
            )));
        }

        let mut months = [Month::Jan; MONTH_COLUMN_COUNT];
        for (offset, slot) in months.iter_mut().enumerate() {
            let label = &headers[MONTH_COLUMN_START + offset];
            *slot = Month::from_label(label).ok_or_else(|| ReshapeError::UnknownMonth {
                label: label.to_string(),
            })?;
        }

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result?;
            // CSV line number for error messages, accounting for the header.
            let line = idx + 2;
            if record.len() < MIN_COLUMNS {
                return Err(ReshapeError::Schema(format!(
                    "row {} of '{}' has {} columns, expected at least {}",
                    line,
                    path.display(),
                    record.len(),
                    MIN_COLUMNS
                )));
            }
            let line_of_business = record.get(0).unwrap_or("").trim().to_string();
            if line_of_business.is_empty() {
                return Err(ReshapeError::Schema(format!(
                    "row {} of '{}' has an empty business line",
                    line,
                    path.display()
                )));
            }
            let month_values = (0..MONTH_COLUMN_COUNT)
                .map(|offset| record[MONTH_COLUMN_START + offset].to_string())
                .collect();
            rows.push(WideRow {
                line_of_business,
                month_values,
            });
        }

        Ok(WideTable { months, rows })
    }
}
