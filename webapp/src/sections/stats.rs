use dioxus::prelude::*;

use crate::{
    common::SiteContext,
    components::{section_label::SectionLabel, section_wrapper::SectionWrapper, stat_card::StatCard},
};

// not a navigation target, so the wrapper carries no anchor
#[component]
pub fn StatsSection() -> Element {
    let registry = use_context::<SiteContext>().registry;

    rsx! {
        div { class: "container",
            SectionWrapper {
                div { class: "section",
                    SectionLabel { "By The Numbers" }
                    div { class: "stats-grid",
                        for stat in registry.stats.iter() {
                            StatCard { key: "{stat.label}", stat: *stat }
                        }
                    }
                }
            }
        }
    }
}
