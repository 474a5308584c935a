// Grouped-bar geometry, computed apart from the component so the scaling and
// placement rules are testable without rendering.
use shared::models::{LongRecord, Month};
use shared::utils::format_amount;

pub const CHART_WIDTH: f64 = 960.0;
pub const CHART_HEIGHT: f64 = 420.0;
pub const MARGIN_LEFT: f64 = 80.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;

// Fraction of each month slot occupied by its group of bars.
const GROUP_FILL: f64 = 0.8;
const TICK_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Index into `ChartLayout::series`, stable per business line.
    pub series: usize,
    pub line_of_business: String,
    pub month: Month,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartLayout {
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
    /// Business lines in series order (first encounter in the rows).
    pub series: Vec<String>,
}

pub fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

pub fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// X position of the center of a month slot, for axis labels.
pub fn month_center(month: Month) -> f64 {
    let slot = plot_width() / 12.0;
    MARGIN_LEFT + (f64::from(month.order()) - 0.5) * slot
}

/// Lays out one bar per record: months in chronological order on the x axis,
/// amounts scaled to the tallest bar on the y axis, one series per business
/// line. Empty input yields an empty layout, not an error.
pub fn layout_grouped_bars(rows: &[LongRecord]) -> ChartLayout {
    if rows.is_empty() {
        return ChartLayout::default();
    }

    let mut series: Vec<String> = Vec::new();
    for row in rows {
        if !series.iter().any(|s| *s == row.line_of_business) {
            series.push(row.line_of_business.clone());
        }
    }

    let max_amount = rows.iter().map(|r| r.amount).fold(0.0_f64, f64::max);

    let slot = plot_width() / 12.0;
    let group_width = slot * GROUP_FILL;
    let bar_width = group_width / series.len() as f64;
    let baseline = MARGIN_TOP + plot_height();

    let bars = rows
        .iter()
        .map(|row| {
            let series_index = series
                .iter()
                .position(|s| *s == row.line_of_business)
                .unwrap_or(0);
            let slot_left = MARGIN_LEFT + (f64::from(row.month_order) - 1.0) * slot;
            let x = slot_left + slot * (1.0 - GROUP_FILL) / 2.0 + series_index as f64 * bar_width;
            let height = if max_amount > 0.0 {
                (row.amount.max(0.0) / max_amount) * plot_height()
            } else {
                0.0
            };
            Bar {
                x,
                y: baseline - height,
                width: bar_width,
                height,
                series: series_index,
                line_of_business: row.line_of_business.clone(),
                month: row.month,
                amount: row.amount,
            }
        })
        .collect();

    let ticks = (0..=TICK_COUNT)
        .map(|i| {
            let fraction = i as f64 / TICK_COUNT as f64;
            Tick {
                y: baseline - fraction * plot_height(),
                label: format_amount(max_amount * fraction),
            }
        })
        .collect();

    ChartLayout {
        bars,
        ticks,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Source;

    fn record(line: &str, month: Month, amount: f64) -> LongRecord {
        LongRecord {
            line_of_business: line.to_string(),
            month,
            amount,
            month_order: month.order(),
            source: Source::Costs,
        }
    }

    #[test]
    fn empty_rows_give_an_empty_layout() {
        let layout = layout_grouped_bars(&[]);
        assert!(layout.bars.is_empty());
        assert!(layout.ticks.is_empty());
        assert!(layout.series.is_empty());
    }

    #[test]
    fn one_bar_per_record_scaled_to_the_maximum() {
        let rows = vec![
            record("Retail", Month::Jan, 50.0),
            record("Retail", Month::Feb, 100.0),
        ];
        let layout = layout_grouped_bars(&rows);

        assert_eq!(layout.bars.len(), 2);
        assert_eq!(layout.series, vec!["Retail"]);
        assert_eq!(layout.bars[1].height, plot_height());
        assert_eq!(layout.bars[0].height, plot_height() / 2.0);
        // Bars sit on the baseline.
        for bar in &layout.bars {
            assert_eq!(bar.y + bar.height, MARGIN_TOP + plot_height());
        }
    }

    #[test]
    fn series_indices_are_stable_per_line() {
        let rows = vec![
            record("Retail", Month::Jan, 1.0),
            record("Wholesale", Month::Jan, 2.0),
            record("Retail", Month::Feb, 3.0),
            record("Wholesale", Month::Feb, 4.0),
        ];
        let layout = layout_grouped_bars(&rows);

        assert_eq!(layout.series, vec!["Retail", "Wholesale"]);
        for bar in &layout.bars {
            let expected = if bar.line_of_business == "Retail" { 0 } else { 1 };
            assert_eq!(bar.series, expected);
        }
        // Within one month the two series do not overlap.
        assert!(layout.bars[0].x + layout.bars[0].width <= layout.bars[1].x + 1e-9);
    }

    #[test]
    fn bars_stay_inside_the_plot_area() {
        let rows: Vec<LongRecord> = Month::ALL
            .iter()
            .flat_map(|m| {
                [
                    record("Retail", *m, 10.0),
                    record("Wholesale", *m, 20.0),
                    record("Online", *m, 30.0),
                ]
            })
            .collect();
        let layout = layout_grouped_bars(&rows);

        assert_eq!(layout.bars.len(), 36);
        for bar in &layout.bars {
            assert!(bar.x >= MARGIN_LEFT);
            assert!(bar.x + bar.width <= MARGIN_LEFT + plot_width() + 1e-9);
            assert!(bar.y >= MARGIN_TOP - 1e-9);
        }
    }

    #[test]
    fn all_zero_amounts_render_flat() {
        let rows = vec![record("Retail", Month::Jan, 0.0)];
        let layout = layout_grouped_bars(&rows);
        assert_eq!(layout.bars[0].height, 0.0);
        assert_eq!(layout.ticks.len(), 5);
    }

    #[test]
    fn month_centers_are_chronological() {
        assert!(month_center(Month::Jan) < month_center(Month::Feb));
        assert!(month_center(Month::Nov) < month_center(Month::Dec));
        assert!(month_center(Month::Dec) < CHART_WIDTH - MARGIN_RIGHT);
    }
}
