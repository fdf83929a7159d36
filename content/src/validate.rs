use std::{collections::HashSet, fmt};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{Level, debug, instrument, warn};

use crate::{project::ProjectLayout, registry::Registry};

// content defects
//
// content is trusted and compiled in, so a defect is an authoring mistake to be caught
// before deployment rather than something the page recovers from at render time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentDefect {
    DuplicateCompany(String),
    DuplicateProject(String),
    DuplicateSkillCategory(String),
    DuplicateHeroTag(String),
    InvalidProjectId(String),
    EmptyField { record: String, field: &'static str },
    EmptyHighlights(String),
    BadLink { record: String, href: String },
}

impl fmt::Display for ContentDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCompany(v) => write!(f, "experience company '{v}' appears more than once"),
            Self::DuplicateProject(v) => write!(f, "project id '{v}' appears more than once"),
            Self::DuplicateSkillCategory(v) => write!(f, "skill category '{v}' appears more than once"),
            Self::DuplicateHeroTag(v) => write!(f, "hero tag '{v}' appears more than once"),
            Self::InvalidProjectId(v) => write!(f, "project id '{v}' is not a valid key"),
            Self::EmptyField { record, field } => write!(f, "{record}: '{field}' is empty"),
            Self::EmptyHighlights(v) => write!(f, "featured project '{v}' has no highlights"),
            Self::BadLink { record, href } => write!(f, "{record}: '{href}' is not an http(s) link"),
        }
    }
}

const LINK_REGEX: &str = r"^https?://[^\s]+$";

// walk the registry and collect every defect, rather than stopping at the first
pub fn find_defects(registry: &Registry) -> Result<Vec<ContentDefect>> {
    let mut defects = Vec::new();

    let link_re = Regex::new(LINK_REGEX).context("failed to compile link regex")?;
    let id_re = Regex::new(crate::ANCHOR_REGEX).context("failed to compile anchor regex")?;

    let mut companies = HashSet::new();
    for exp in registry.experiences {
        let record = format!("experience '{}'", exp.company);

        check_empty(&mut defects, &record, "company", exp.company);
        check_empty(&mut defects, &record, "role", exp.role);
        check_empty(&mut defects, &record, "period", exp.period);

        if !link_re.is_match(exp.href) {
            defects.push(ContentDefect::BadLink {
                record,
                href: exp.href.to_owned(),
            });
        }

        if !companies.insert(exp.company) {
            defects.push(ContentDefect::DuplicateCompany(exp.company.to_owned()));
        }
    }

    let mut projects = HashSet::new();
    for project in registry.projects {
        let record = format!("project '{}'", project.id);

        if !id_re.is_match(project.id) {
            defects.push(ContentDefect::InvalidProjectId(project.id.to_owned()));
        }

        check_empty(&mut defects, &record, "ordinal", project.ordinal);
        check_empty(&mut defects, &record, "title", project.title);
        check_empty(&mut defects, &record, "description", project.description);

        for tech in project.tech {
            check_empty(&mut defects, &record, "tech", tech);
        }

        match project.layout {
            ProjectLayout::Featured {
                role,
                period,
                highlights,
            } => {
                check_empty(&mut defects, &record, "role", role);
                check_empty(&mut defects, &record, "period", period);

                if highlights.is_empty() {
                    defects.push(ContentDefect::EmptyHighlights(project.id.to_owned()));
                }
                for highlight in highlights {
                    check_empty(&mut defects, &record, "highlights", highlight);
                }
            }
            ProjectLayout::Standard { href, link_label } => {
                check_empty(&mut defects, &record, "link_label", link_label);

                if !link_re.is_match(href) {
                    defects.push(ContentDefect::BadLink {
                        record,
                        href: href.to_owned(),
                    });
                }
            }
        }

        if !projects.insert(project.id) {
            defects.push(ContentDefect::DuplicateProject(project.id.to_owned()));
        }
    }

    let mut categories = HashSet::new();
    for category in registry.skills {
        let record = format!("skill category '{}'", category.label);

        check_empty(&mut defects, &record, "label", category.label);
        if category.skills.is_empty() {
            defects.push(ContentDefect::EmptyField {
                record: record.clone(),
                field: "skills",
            });
        }
        for skill in category.skills {
            check_empty(&mut defects, &record, "skills", skill);
        }

        if !categories.insert(category.label) {
            defects.push(ContentDefect::DuplicateSkillCategory(category.label.to_owned()));
        }
    }

    let mut tags = HashSet::new();
    for tag in registry.hero_tags {
        check_empty(&mut defects, "hero tags", "label", tag.label);

        if !tags.insert(tag.label) {
            defects.push(ContentDefect::DuplicateHeroTag(tag.label.to_owned()));
        }
    }

    for stat in registry.stats {
        let record = format!("stat '{}'", stat.label);

        check_empty(&mut defects, &record, "value", stat.value);
        check_empty(&mut defects, &record, "label", stat.label);
    }

    Ok(defects)
}

fn check_empty(defects: &mut Vec<ContentDefect>, record: &str, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        defects.push(ContentDefect::EmptyField {
            record: record.to_owned(),
            field,
        });
    }
}

#[instrument(level = Level::DEBUG, skip_all)]
pub fn validate(registry: &Registry) -> Result<()> {
    let defects = find_defects(registry)?;

    if defects.is_empty() {
        debug!("content registry passed validation");
        return Ok(());
    }

    for defect in &defects {
        warn!(%defect, "content defect");
    }

    let listing = defects
        .iter()
        .map(|d| format!("  - {d}"))
        .collect::<Vec<_>>()
        .join("\n");

    anyhow::bail!(
        "content registry has {} defect(s):\n{listing}",
        defects.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        experience::ExperienceEntry,
        project::ProjectEntry,
        skill::SkillCategory,
        stat::StatEntry,
        tag::{TagVariant, TechTag},
    };

    const EMPTY: Registry = Registry {
        experiences: &[],
        projects: &[],
        skills: &[],
        hero_tags: &[],
        stats: &[],
    };

    #[test]
    fn builtin_registry_is_clean() -> Result<()> {
        assert_eq!(find_defects(&Registry::builtin())?, vec![]);
        validate(&Registry::builtin())
    }

    #[test]
    fn featured_and_standard_carry_their_fields() {
        for project in Registry::builtin().projects {
            match project.layout {
                ProjectLayout::Featured {
                    role,
                    period,
                    highlights,
                } => {
                    assert!(project.is_featured());
                    assert!(!role.is_empty());
                    assert!(!period.is_empty());
                    assert!(!highlights.is_empty());
                }
                ProjectLayout::Standard { href, link_label } => {
                    assert!(!project.is_featured());
                    assert!(!href.is_empty());
                    assert!(!link_label.is_empty());
                }
            }
        }
    }

    #[test]
    fn featured_without_highlights_is_a_defect() {
        const PROJECTS: &[ProjectEntry] = &[ProjectEntry {
            id: "bare",
            ordinal: "01",
            title: "Bare",
            description: "no highlights",
            tech: &["Rust"],
            layout: ProjectLayout::Featured {
                role: "Engineer",
                period: "2024",
                highlights: &[],
            },
        }];
        let registry = Registry {
            projects: PROJECTS,
            ..EMPTY
        };

        assert_eq!(
            find_defects(&registry).unwrap(),
            vec![ContentDefect::EmptyHighlights("bare".to_owned())]
        );
        assert!(validate(&registry).is_err());
    }

    #[test]
    fn standard_link_must_be_http() {
        const PROJECTS: &[ProjectEntry] = &[ProjectEntry {
            id: "linkless",
            ordinal: "02",
            title: "Linkless",
            description: "bad link",
            tech: &[],
            layout: ProjectLayout::Standard {
                href: "ftp://example.com",
                link_label: "",
            },
        }];
        let registry = Registry {
            projects: PROJECTS,
            ..EMPTY
        };

        let defects = find_defects(&registry).unwrap();
        assert_eq!(defects.len(), 2);
        assert!(defects.contains(&ContentDefect::EmptyField {
            record: "project 'linkless'".to_owned(),
            field: "link_label",
        }));
        assert!(matches!(defects[1], ContentDefect::BadLink { .. }));
    }

    #[test]
    fn duplicate_keys_are_reported() {
        const EXPERIENCES: &[ExperienceEntry] = &[
            ExperienceEntry {
                company: "Acme",
                role: "Dev",
                period: "2020",
                href: "https://acme.test/",
            },
            ExperienceEntry {
                company: "Acme",
                role: "Lead",
                period: "2021",
                href: "https://acme.test/",
            },
        ];
        const SKILLS: &[SkillCategory] = &[
            SkillCategory {
                label: "Web",
                skills: &["HTML"],
            },
            SkillCategory {
                label: "Web",
                skills: &["CSS"],
            },
        ];
        const TAGS: &[TechTag] = &[
            TechTag {
                label: "Rust",
                variant: TagVariant::Blue,
            },
            TechTag {
                label: "Rust",
                variant: TagVariant::Slate,
            },
        ];
        let registry = Registry {
            experiences: EXPERIENCES,
            skills: SKILLS,
            hero_tags: TAGS,
            ..EMPTY
        };

        assert_eq!(
            find_defects(&registry).unwrap(),
            vec![
                ContentDefect::DuplicateCompany("Acme".to_owned()),
                ContentDefect::DuplicateSkillCategory("Web".to_owned()),
                ContentDefect::DuplicateHeroTag("Rust".to_owned()),
            ]
        );
    }

    #[test]
    fn every_defect_is_listed_in_the_error() {
        const STATS: &[StatEntry] = &[
            StatEntry {
                value: "",
                suffix: "+",
                label: "Years",
            },
            StatEntry {
                value: "1",
                suffix: "",
                label: " ",
            },
        ];
        let registry = Registry {
            stats: STATS,
            ..EMPTY
        };

        let err = validate(&registry).expect_err("defects present").to_string();
        assert!(err.contains("2 defect(s)"));
        assert!(err.contains("stat 'Years': 'value' is empty"));
        assert!(err.contains("'label' is empty"));
    }

    #[test]
    fn project_ids_must_be_keys() {
        const PROJECTS: &[ProjectEntry] = &[ProjectEntry {
            id: "Not A Key",
            ordinal: "01",
            title: "t",
            description: "d",
            tech: &[],
            layout: ProjectLayout::Standard {
                href: "https://example.com",
                link_label: "View",
            },
        }];
        let registry = Registry {
            projects: PROJECTS,
            ..EMPTY
        };

        assert_eq!(
            find_defects(&registry).unwrap(),
            vec![ContentDefect::InvalidProjectId("Not A Key".to_owned())]
        );
    }
}
