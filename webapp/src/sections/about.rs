use dioxus::prelude::*;

use crate::{
    common::SiteContext,
    components::{section_label::SectionLabel, section_wrapper::SectionWrapper, tag_chip::TagChip},
};
use content::{ANCHOR_ABOUT, ANCHOR_EXPERIENCE, tag::TagVariant};

// AboutSection
//
// bio and skill groups, with the experience list nested inside it under its own
// anchor so the navbar can jump straight to it
#[component]
pub fn AboutSection() -> Element {
    let ctx = use_context::<SiteContext>();
    let site = ctx.site;
    let registry = ctx.registry;

    rsx! {
        div { class: "container",
            SectionWrapper { id: "{ANCHOR_ABOUT}",
                div { class: "section",
                    SectionLabel { "About" }

                    div { class: "bio-grid",
                        div { class: "bio-text",
                            for paragraph in site.bio.iter() {
                                p { key: "{paragraph}", "{paragraph}" }
                            }
                        }
                        div { class: "skill-groups",
                            for category in registry.skills.iter() {
                                div { key: "{category.label}",
                                    div { class: "skill-group-label", "{category.label}" }
                                    div { class: "skill-tags",
                                        for skill in category.skills.iter() {
                                            TagChip { key: "{skill}", label: "{skill}", variant: TagVariant::Slate }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { id: ANCHOR_EXPERIENCE, class: "experience-list",
                        SectionLabel { "Experience" }
                        for exp in registry.experiences.iter() {
                            div { key: "{exp.company}", class: "experience-item",
                                a {
                                    href: "{exp.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "exp-company",
                                    "{exp.company}"
                                }
                                span { class: "exp-role", "{exp.role}" }
                                span { class: "exp-period", "{exp.period}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
