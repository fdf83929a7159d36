use serde::Serialize;

use crate::tag::{TechTag, resolve_variant};

// projects
//
// a project renders with one of two layouts.  featured projects carry the role/period
// header and a highlight list, standard projects carry an outbound link and the whole
// card becomes the click target.  keeping the per-layout fields inside the enum means a
// featured project without highlights or a standard one without a link can't be written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub ordinal: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub layout: ProjectLayout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ProjectLayout {
    Featured {
        role: &'static str,
        period: &'static str,
        highlights: &'static [&'static str],
    },
    Standard {
        href: &'static str,
        link_label: &'static str,
    },
}

impl ProjectEntry {
    pub fn is_featured(&self) -> bool {
        matches!(self.layout, ProjectLayout::Featured { .. })
    }

    // the tech list with the display variant resolved for each label, in order
    pub fn tech_tags(&self) -> impl Iterator<Item = TechTag> + '_ {
        self.tech.iter().map(|&label| TechTag {
            label,
            variant: resolve_variant(label),
        })
    }
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "omegasys",
        ordinal: "01 — Current Role",
        title: "OmegaSys",
        description: "Senior Frontend Engineer at a gaming-industry company in Lisbon, leading the design system and frontend architecture across multiple brand properties.",
        tech: &["React", "TypeScript", "Mantine", "Design Systems"],
        layout: ProjectLayout::Featured {
            role: "Senior Frontend Engineer",
            period: "Sep 2022 — Present",
            highlights: &[
                "Architected a comprehensive UI design system that standardized components across multiple brand properties, reducing development time",
                "Spearheaded performance optimization resulting in significant improvements in Core Web Vitals and application speed",
                "Established frontend engineering best practices and documentation, improving code quality and team velocity",
                "Collaborated with C-level executives to define UI/UX strategies aligned with business objectives",
                "Orchestrated the integration of multiple payment systems while ensuring a seamless user experience",
            ],
        },
    },
    ProjectEntry {
        id: "mirror-world",
        ordinal: "02",
        title: "Mirror World Marketplace",
        description: "Led frontend development for an NFT marketplace on Solana at Rct.ai, Beijing. Built real-time trading interfaces and wallet integrations.",
        tech: &["Web3", "Solana", "React"],
        layout: ProjectLayout::Standard {
            href: "https://www.mirrorworld.fun/",
            link_label: "View Project",
        },
    },
    ProjectEntry {
        id: "jsmastery",
        ordinal: "03",
        title: "JSMastery Collab",
        description: "Co-authored code for a tutorial that reached 2.1M+ views on YouTube. Built a full-stack application demonstrating modern React patterns.",
        tech: &["Next.js", "Open Source"],
        layout: ProjectLayout::Standard {
            href: "https://www.youtube.com/watch?v=Wn_Kb3MR_cU&t=38s",
            link_label: "View on Youtube",
        },
    },
    ProjectEntry {
        id: "tanstack-movies",
        ordinal: "04",
        title: "TanStack Movies",
        description: "A movie discovery app built with TanStack Start, showcasing SSR, file-based routing, and modern data fetching patterns.",
        tech: &["TanStack Start", "TypeScript", "SSR"],
        layout: ProjectLayout::Standard {
            href: "https://github.com/enyelsequeira/tanstack-movies",
            link_label: "View on GitHub",
        },
    },
];
