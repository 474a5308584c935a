// Grouped bar chart rendered as inline SVG.
#![allow(non_snake_case)]

pub mod bars;

use self::bars::{
    layout_grouped_bars, month_center, CHART_HEIGHT, CHART_WIDTH, MARGIN_LEFT, MARGIN_RIGHT,
    MARGIN_TOP,
};
use crate::config::theme::ChartTheme;
use dioxus::prelude::*;
use shared::models::{LongRecord, Month, Source};

#[component]
pub fn BarChart(rows: Vec<LongRecord>, source: Source, theme: ChartTheme) -> Element {
    let layout = layout_grouped_bars(&rows);
    let plot_w = bars::plot_width();
    let plot_h = bars::plot_height();
    let right_edge = CHART_WIDTH - MARGIN_RIGHT;
    let baseline = MARGIN_TOP + plot_h;
    let tick_label_x = MARGIN_LEFT - 8.0;
    let month_label_y = baseline + 20.0;

    let grid_lines = layout.ticks.iter().map(|tick| {
        let label_y = tick.y + 4.0;
        rsx! {
            line {
                x1: "{MARGIN_LEFT}",
                y1: "{tick.y}",
                x2: "{right_edge}",
                y2: "{tick.y}",
                stroke: "{theme.grid}",
                stroke_width: "1",
            }
            text {
                x: "{tick_label_x}",
                y: "{label_y}",
                fill: "{theme.text}",
                font_size: "11",
                text_anchor: "end",
                "{tick.label}"
            }
        }
    });

    let month_labels = Month::ALL.iter().map(|month| {
        let x = month_center(*month);
        rsx! {
            text {
                x: "{x}",
                y: "{month_label_y}",
                fill: "{theme.text}",
                font_size: "12",
                text_anchor: "middle",
                "{month}"
            }
        }
    });

    let bar_nodes = layout.bars.iter().map(|bar| {
        let color = theme.series_color(bar.series);
        rsx! {
            rect {
                x: "{bar.x}",
                y: "{bar.y}",
                width: "{bar.width}",
                height: "{bar.height}",
                fill: "{color}",
            }
        }
    });

    let legend = layout.series.iter().enumerate().map(|(index, line)| {
        let color = theme.series_color(index);
        rsx! {
            span { class: "legend-entry",
                span { class: "legend-swatch", style: "background: {color};" }
                "{line}"
            }
        }
    });

    rsx! {
        div { class: "chart-area",
            h4 { class: "chart-title", "Data for the {source} of the company" }
            svg {
                width: "{CHART_WIDTH}",
                height: "{CHART_HEIGHT}",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                rect {
                    x: "{MARGIN_LEFT}",
                    y: "{MARGIN_TOP}",
                    width: "{plot_w}",
                    height: "{plot_h}",
                    fill: "{theme.plot_background}",
                }
                {grid_lines}
                {month_labels}
                {bar_nodes}
            }
            div { class: "legend", {legend} }
        }
    }
}
