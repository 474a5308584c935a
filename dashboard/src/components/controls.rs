// The two input controls: a radio group over the sources and a checkbox
// group over the business lines available for the selected source. Both
// write straight into signals owned by the root component.
#![allow(non_snake_case)]

use crate::state::selection;
use dioxus::prelude::*;
use shared::models::Source;

#[component]
pub fn SourceSelector(sources: Vec<Source>, mut selected: Signal<Source>) -> Element {
    rsx! {
        div { class: "source-selector",
            for source in sources {
                label { class: "control-option",
                    input {
                        r#type: "radio",
                        name: "source",
                        checked: selected() == source,
                        onchange: move |_| selected.set(source),
                    }
                    "{source}"
                }
            }
        }
    }
}

#[component]
pub fn LineFilter(options: Vec<String>, mut selected: Signal<Vec<String>>) -> Element {
    rsx! {
        div { class: "line-filter",
            for line in options {
                label { class: "control-option",
                    input {
                        r#type: "checkbox",
                        checked: selected.read().contains(&line),
                        onchange: {
                            let line = line.clone();
                            move |_| selection::toggle_line(&mut selected.write(), &line)
                        },
                    }
                    "{line}"
                }
            }
        }
    }
}
