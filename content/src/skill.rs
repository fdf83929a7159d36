use serde::Serialize;

use crate::tag::{TagVariant, TechTag};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub label: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        label: "Frontend",
        skills: &["React", "Vue", "Svelte", "UI Frameworks"],
    },
    SkillCategory {
        label: "Backend",
        skills: &["Node.js", "Python", "Java(Learning)"],
    },
    SkillCategory {
        label: "Data & Cloud",
        skills: &["PostgreSQL", "SQL", "Mongo", "Cloudflare Workers", "Vercel"],
    },
    SkillCategory {
        label: "Web3",
        skills: &["Solana", "Solidity"],
    },
    SkillCategory {
        label: "AI & Agents",
        skills: &["LLM Agents", "MCP Servers", "AI Tooling"],
    },
];

// the hero's tag row; these carry a fixed variant rather than going through the
// project tech lookup
pub const HERO_TAGS: &[TechTag] = &[
    TechTag {
        label: "TypeScript",
        variant: TagVariant::Blue,
    },
    TechTag {
        label: "React",
        variant: TagVariant::Blue,
    },
    TechTag {
        label: "AI Agents",
        variant: TagVariant::Indigo,
    },
    TechTag {
        label: "Web3",
        variant: TagVariant::Indigo,
    },
    TechTag {
        label: "UI/UX Design",
        variant: TagVariant::Slate,
    },
    TechTag {
        label: "UI Frameworks",
        variant: TagVariant::Slate,
    },
];
