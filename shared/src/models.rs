use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month, identified by its three-letter abbreviation in the CSV
/// headers. The numeric order (Jan=1 .. Dec=12) is the chronological sort key
/// attached to every reshaped record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Chronological position, Jan=1 .. Dec=12.
    pub fn order(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Resolves a CSV header label to a month. Only the twelve standard
    /// three-letter abbreviations are accepted.
    pub fn from_label(label: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.label() == label)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which input file a record originated from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    Costs,
    Revenue,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::Costs => "Costs",
            Source::Revenue => "Revenue",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One long-form row: a business line's summed amount for one month of one
/// source. `month_order` always equals `month.order()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LongRecord {
    pub line_of_business: String,
    pub month: Month,
    pub amount: f64,
    pub month_order: u8,
    pub source: Source,
}

/// The reshaped dataset the dashboard serves: the Costs block followed by the
/// Revenue block, each sorted ascending by (line_of_business, month_order).
/// Built once at startup and never mutated; the UI only takes filtered views.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CombinedDataset {
    pub records: Vec<LongRecord>,
}

impl CombinedDataset {
    pub fn new(records: Vec<LongRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique source labels in first-encounter order.
    pub fn sources(&self) -> Vec<Source> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.source) {
                seen.push(record.source);
            }
        }
        seen
    }

    /// Unique business lines in first-encounter order, across both sources.
    pub fn business_lines(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in &self.records {
            if !seen.iter().any(|l| *l == record.line_of_business) {
                seen.push(record.line_of_business.clone());
            }
        }
        seen
    }

    /// Unique business lines present under one source, first-encounter order.
    pub fn business_lines_for(&self, source: Source) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for record in self.records.iter().filter(|r| r.source == source) {
            if !seen.iter().any(|l| *l == record.line_of_business) {
                seen.push(record.line_of_business.clone());
            }
        }
        seen
    }

    /// Read-only view filtered to one source, further restricted to the given
    /// business lines when `lines` is non-empty.
    pub fn rows_for(&self, source: Source, lines: &[String]) -> Vec<&LongRecord> {
        self.records
            .iter()
            .filter(|r| r.source == source)
            .filter(|r| lines.is_empty() || lines.iter().any(|l| *l == r.line_of_business))
            .collect()
    }
}
