#![allow(non_snake_case)]

use crate::components::chart::BarChart;
use crate::components::controls::{LineFilter, SourceSelector};
use crate::config::theme::ChartTheme;
use crate::state::selection::{self, Selection};
use dioxus::prelude::*;
use shared::models::{CombinedDataset, LongRecord, Source};
use std::sync::Arc;

#[derive(Props, Clone, PartialEq)]
pub struct AppProps {
    pub dataset: Arc<CombinedDataset>,
}

/// Root component of one LiveView session. The dataset arrives read-only
/// from the server; everything below is a function of it plus the two
/// control signals.
pub fn App(props: AppProps) -> Element {
    let body = match props.dataset.sources().first().copied() {
        Some(default_source) => rsx! {
            Dashboard { dataset: props.dataset.clone(), default_source }
        },
        None => rsx! {
            p { class: "empty-note", "The input files contained no data rows." }
        },
    };

    rsx! {
        div { class: "container",
            h3 { class: "title", "Costs and Revenue Dashboard" }
            {body}
        }
    }
}

#[component]
fn Dashboard(dataset: Arc<CombinedDataset>, default_source: Source) -> Element {
    // The default source is pre-selected so the chart renders immediately,
    // with no business-line filter applied.
    let selected_source = use_signal(|| default_source);
    let selected_lines = use_signal(Vec::<String>::new);

    let sources = dataset.sources();
    let line_options = selection::line_options(&dataset, selected_source());
    let visible: Vec<LongRecord> = selection::visible_rows(
        &dataset,
        &Selection {
            source: selected_source(),
            lines: selected_lines(),
        },
    )
    .into_iter()
    .cloned()
    .collect();

    rsx! {
        div { class: "controls",
            SourceSelector { sources, selected: selected_source }
            LineFilter { options: line_options, selected: selected_lines }
        }
        BarChart {
            rows: visible,
            source: selected_source(),
            theme: ChartTheme::default_light(),
        }
    }
}
