// View state for the dashboard, kept apart from the components so the two
// update rules are plain functions of (control values, shared dataset) and
// can be tested without any UI.
use shared::models::{CombinedDataset, LongRecord, Source};

/// Current control values: the selected source and the checked business
/// lines. An empty `lines` means no business-line filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub source: Source,
    pub lines: Vec<String>,
}

/// Chart update rule: the records the bar chart shows for the current
/// selection. A line checked under a previous source that is absent under
/// the current one simply matches nothing.
pub fn visible_rows<'a>(
    dataset: &'a CombinedDataset,
    selection: &Selection,
) -> Vec<&'a LongRecord> {
    dataset.rows_for(selection.source, &selection.lines)
}

/// Options update rule: the business lines offered by the filter control,
/// recomputed whenever the source changes.
pub fn line_options(dataset: &CombinedDataset, source: Source) -> Vec<String> {
    dataset.business_lines_for(source)
}

/// Checkbox toggle: adds the line when absent, removes it when present.
pub fn toggle_line(lines: &mut Vec<String>, line: &str) {
    if let Some(pos) = lines.iter().position(|l| l == line) {
        lines.remove(pos);
    } else {
        lines.push(line.to_string());
    }
}
