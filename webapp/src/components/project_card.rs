use dioxus::prelude::*;

use crate::components::tag_chip::TagChip;
use content::project::{ProjectEntry, ProjectLayout};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: ProjectEntry,
}

// ProjectCard
//
// featured projects get the two-column layout with the role header and highlight list.
// standard projects turn the whole card into the outbound link
#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    match project.layout {
        ProjectLayout::Featured {
            role,
            period,
            highlights,
        } => rsx! {
            div { class: "project-card featured",
                div {
                    ProjectSummary { project }
                }
                div { class: "project-highlights",
                    div { class: "project-role-header",
                        span { class: "project-role-title", "{role}" }
                        span { class: "project-role-period", "{period}" }
                    }
                    ul { class: "project-highlights-list",
                        for highlight in highlights.iter() {
                            li { key: "{highlight}", class: "project-highlight", "{highlight}" }
                        }
                    }
                }
            }
        },
        ProjectLayout::Standard { href, link_label } => rsx! {
            a {
                class: "project-card",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                ProjectSummary { project }
                span { class: "project-link",
                    "{link_label}"
                    span { class: "project-arrow", "→" }
                }
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectSummaryProps {
    project: ProjectEntry,
}

// the block both layouts share: ordinal, title, description and tech tags
#[component]
fn ProjectSummary(props: ProjectSummaryProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "project-number", "{project.ordinal}" }
        h3 { class: "project-title", "{project.title}" }
        p { class: "project-description", "{project.description}" }
        div { class: "project-tags",
            for tag in project.tech_tags() {
                TagChip { key: "{tag.label}", label: "{tag.label}", variant: tag.variant }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::project::PROJECTS;

    fn render(project: ProjectEntry) -> String {
        dioxus_ssr::render_element(rsx! {
            ProjectCard { project }
        })
    }

    #[test]
    fn featured_card_lists_highlights() {
        let html = render(PROJECTS[0]);

        assert!(html.contains("project-card featured"));
        assert!(html.contains("Senior Frontend Engineer"));
        assert_eq!(html.matches("class=\"project-highlight\"").count(), 5);
        assert!(!html.contains("target=\"_blank\""));
        assert!(!html.contains("→"));
    }

    #[test]
    fn standard_card_is_the_link() {
        let html = render(PROJECTS[3]);

        assert!(html.contains("<a"));
        assert!(html.contains("href=\"https://github.com/enyelsequeira/tanstack-movies\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("View on GitHub"));
        assert!(html.contains("→"));
        assert!(!html.contains("project-highlights-list"));
    }

    #[test]
    fn tech_tags_carry_resolved_variants() {
        let html = render(PROJECTS[3]);

        // TanStack Start and SSR are secondary, TypeScript is primary
        assert_eq!(html.matches("data-variant=\"indigo\"").count(), 2);
        assert_eq!(html.matches("data-variant=\"blue\"").count(), 1);
        assert_eq!(html.matches("data-variant=\"slate\"").count(), 0);
    }
}
