use serde::Serialize;

// a single line in the experience list
//
// the company doubles as the list key, so it must be unique within the collection.
// the period is display text only and is never parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub href: &'static str,
}

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Omega Systems",
        role: "Senior Frontend Developer",
        period: "Aug 2022 — Present",
        href: "https://www.omegasys.eu/",
    },
    ExperienceEntry {
        company: "Great Learning / HackerU",
        role: "Full-Stack Instructor",
        period: "Nov 2020 — Present",
        href: "https://www.mygreatlearning.com/",
    },
    ExperienceEntry {
        company: "Mirror World (Rct.ai)",
        role: "Frontend Developer",
        period: "Nov 2021 — Nov 2022",
        href: "https://www.mirrorworld.fun/",
    },
];
