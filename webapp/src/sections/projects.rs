use dioxus::prelude::*;

use crate::{
    common::SiteContext,
    components::{
        project_card::ProjectCard, section_label::SectionLabel, section_wrapper::SectionWrapper,
    },
};
use content::ANCHOR_WORK;

#[component]
pub fn ProjectsSection() -> Element {
    let registry = use_context::<SiteContext>().registry;

    rsx! {
        div { class: "container",
            SectionWrapper { id: "{ANCHOR_WORK}",
                div { class: "section",
                    SectionLabel { "Work" }
                    div { class: "projects-grid",
                        for project in registry.projects.iter() {
                            ProjectCard { key: "{project.id}", project: *project }
                        }
                    }
                }
            }
        }
    }
}
