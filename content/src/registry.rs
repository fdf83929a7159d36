use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    experience::{EXPERIENCES, ExperienceEntry},
    project::{PROJECTS, ProjectEntry},
    skill::{HERO_TAGS, SKILL_CATEGORIES, SkillCategory},
    stat::{STATS, StatEntry},
    tag::TechTag,
};

// content registry
//
// a bundle of borrowed slices over the static collections.  the page always renders
// Registry::builtin(), but validation and the cli take any registry so a broken one
// can be described in tests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Registry {
    pub experiences: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub skills: &'static [SkillCategory],
    pub hero_tags: &'static [TechTag],
    pub stats: &'static [StatEntry],
}

impl Registry {
    pub const fn builtin() -> Self {
        Registry {
            experiences: EXPERIENCES,
            projects: PROJECTS,
            skills: SKILL_CATEGORIES,
            hero_tags: HERO_TAGS,
            stats: STATS,
        }
    }

    pub fn project(&self, id: &str) -> Option<&'static ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };

        out.context("failed to serialize content registry")
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
