use dioxus::prelude::*;

use content::stat::StatEntry;

#[derive(Clone, PartialEq, Props)]
pub struct StatCardProps {
    stat: StatEntry,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let stat = props.stat;

    rsx! {
        div { class: "stat-card",
            div { class: "stat-number",
                "{stat.value}"
                span { class: "stat-suffix", "{stat.suffix}" }
            }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}
