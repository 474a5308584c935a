// Wide-to-long pipeline: melt each input into (business line, month, value)
// triples, sum duplicates, attach the chronological sort key, and concatenate
// the Costs block with the Revenue block.
use crate::data::currency;
use crate::data::wide_table::WideTable;
use crate::error::ReshapeError;
use shared::models::{CombinedDataset, LongRecord, Month, Source};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Melts one wide table into long-form records, summing duplicate
/// (business line, month) cells and sorting ascending by
/// (line_of_business, month_order). The BTreeMap key gives both in one pass.
pub fn melt_and_aggregate(
    table: &WideTable,
    source: Source,
    parse: fn(&str) -> anyhow::Result<f64>,
) -> Result<Vec<LongRecord>, ReshapeError> {
    let mut totals: BTreeMap<(String, u8), f64> = BTreeMap::new();

    for row in &table.rows {
        for (month, raw) in table.months.iter().zip(&row.month_values) {
            let amount = parse(raw).map_err(|_| ReshapeError::Parse {
                value: raw.clone(),
                line_of_business: row.line_of_business.clone(),
                month: *month,
            })?;
            *totals
                .entry((row.line_of_business.clone(), month.order()))
                .or_insert(0.0) += amount;
        }
    }

    Ok(totals
        .into_iter()
        .map(|((line_of_business, month_order), amount)| LongRecord {
            line_of_business,
            month: Month::ALL[usize::from(month_order) - 1],
            amount,
            month_order,
            source,
        })
        .collect())
}

/// Loads both inputs and builds the combined dataset the dashboard serves.
/// Any failure here aborts startup; there is no partial-load path.
pub fn load_combined_dataset(
    costs_path: &Path,
    revenue_path: &Path,
) -> Result<CombinedDataset, ReshapeError> {
    let costs_table = WideTable::from_csv_path(costs_path)?;
    let costs = melt_and_aggregate(&costs_table, Source::Costs, currency::parse_plain)?;
    info!(
        path = %costs_path.display(),
        input_rows = costs_table.rows.len(),
        records = costs.len(),
        "loaded costs input"
    );

    let revenue_table = WideTable::from_csv_path(revenue_path)?;
    let revenue = melt_and_aggregate(&revenue_table, Source::Revenue, currency::parse_amount)?;
    info!(
        path = %revenue_path.display(),
        input_rows = revenue_table.rows.len(),
        records = revenue.len(),
        "loaded revenue input"
    );

    let mut records = costs;
    records.extend(revenue);
    Ok(CombinedDataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::wide_table::WideRow;

    fn wide_table(rows: Vec<(&str, [&str; 12])>) -> WideTable {
        WideTable {
            months: Month::ALL,
            rows: rows
                .into_iter()
                .map(|(line, values)| WideRow {
                    line_of_business: line.to_string(),
                    month_values: values.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    const ONE_TO_TWELVE: [&str; 12] = [
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
    ];

    #[test]
    fn test_melt_produces_one_record_per_month() {
        let table = wide_table(vec![("Retail", ONE_TO_TWELVE)]);
        let records = melt_and_aggregate(&table, Source::Costs, currency::parse_plain).unwrap();

        assert_eq!(records.len(), 12);
        let orders: Vec<u8> = records.iter().map(|r| r.month_order).collect();
        assert_eq!(orders, (1..=12).collect::<Vec<u8>>());
        assert_eq!(records[0].month, Month::Jan);
        assert_eq!(records[0].amount, 1.0);
        assert_eq!(records[11].month, Month::Dec);
        assert_eq!(records[11].amount, 12.0);
        assert!(records.iter().all(|r| r.source == Source::Costs));
        assert!(records.iter().all(|r| r.month_order == r.month.order()));
    }

    #[test]
    fn test_duplicate_business_lines_are_summed() {
        let table = wide_table(vec![("Retail", ONE_TO_TWELVE), ("Retail", ONE_TO_TWELVE)]);
        let records = melt_and_aggregate(&table, Source::Costs, currency::parse_plain).unwrap();

        assert_eq!(records.len(), 12);
        assert_eq!(records[0].amount, 2.0);
        assert_eq!(records[11].amount, 24.0);
    }

    #[test]
    fn test_output_sorted_by_line_then_month() {
        let table = wide_table(vec![
            ("Wholesale", ONE_TO_TWELVE),
            ("Retail", ONE_TO_TWELVE),
        ]);
        let records = melt_and_aggregate(&table, Source::Costs, currency::parse_plain).unwrap();

        assert_eq!(records.len(), 24);
        let keys: Vec<(String, u8)> = records
            .iter()
            .map(|r| (r.line_of_business.clone(), r.month_order))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(records[0].line_of_business, "Retail");
    }

    #[test]
    fn test_malformed_cell_is_a_parse_error() {
        let mut values = ONE_TO_TWELVE;
        values[3] = "$--";
        let table = wide_table(vec![("Retail", values)]);
        let result = melt_and_aggregate(&table, Source::Revenue, currency::parse_amount);

        match result {
            Err(ReshapeError::Parse {
                value,
                line_of_business,
                month,
            }) => {
                assert_eq!(value, "$--");
                assert_eq!(line_of_business, "Retail");
                assert_eq!(month, Month::Apr);
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_cells_are_cleaned_for_revenue() {
        let mut values = ONE_TO_TWELVE;
        values[0] = "$1,234.00";
        let table = wide_table(vec![("Retail", values)]);
        let records = melt_and_aggregate(&table, Source::Revenue, currency::parse_amount).unwrap();
        assert_eq!(records[0].amount, 1234.0);
    }
}
