use std::fmt;

use serde::Serialize;

// tag variants
//
// the closed set of visual treatments a tech tag can take.  the variant is written out
// as a data-variant attribute and the stylesheet does the rest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagVariant {
    Blue,
    Indigo,
    #[default]
    Slate,
}

impl TagVariant {
    pub fn all() -> Vec<Self> {
        vec![Self::Blue, Self::Indigo, Self::Slate]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Slate => "slate",
        }
    }
}

impl fmt::Display for TagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TechTag {
    pub label: &'static str,
    pub variant: TagVariant,
}

// labels that get the primary (blue) and secondary (indigo) treatment when a project's
// tech list is rendered.  matching is exact and case sensitive
pub const PRIMARY_TECH: &[&str] = &["React", "TypeScript", "Next.js", "Solana"];
pub const SECONDARY_TECH: &[&str] = &["Web3", "TanStack Start", "SSR"];

pub fn resolve_variant(label: &str) -> TagVariant {
    resolve_variant_in(label, PRIMARY_TECH, SECONDARY_TECH)
}

// first match wins: a label present in both sets is always primary
pub fn resolve_variant_in(label: &str, primary: &[&str], secondary: &[&str]) -> TagVariant {
    if primary.contains(&label) {
        TagVariant::Blue
    } else if secondary.contains(&label) {
        TagVariant::Indigo
    } else {
        TagVariant::Slate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_to_their_set() {
        assert_eq!(resolve_variant("React"), TagVariant::Blue);
        assert_eq!(resolve_variant("Solana"), TagVariant::Blue);
        assert_eq!(resolve_variant("Web3"), TagVariant::Indigo);
        assert_eq!(resolve_variant("SSR"), TagVariant::Indigo);
    }

    #[test]
    fn unmapped_labels_fall_through_to_slate() {
        assert_eq!(resolve_variant("COBOL"), TagVariant::Slate);
        assert_eq!(resolve_variant(""), TagVariant::Slate);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(resolve_variant("react"), TagVariant::Slate);
        assert_eq!(resolve_variant("REACT"), TagVariant::Slate);
        assert_eq!(resolve_variant("React "), TagVariant::Slate);
        assert_eq!(resolve_variant("TanStack"), TagVariant::Slate);
    }

    #[test]
    fn primary_set_wins_on_overlap() {
        let primary = ["Rust", "Web3"];
        let secondary = ["Web3", "Wasm"];

        assert_eq!(resolve_variant_in("Web3", &primary, &secondary), TagVariant::Blue);
        assert_eq!(resolve_variant_in("Wasm", &primary, &secondary), TagVariant::Indigo);
    }

    #[test]
    fn variant_names_match_stylesheet_keys() {
        let names: Vec<&str> = TagVariant::all().into_iter().map(TagVariant::as_str).collect();
        assert_eq!(names, vec!["blue", "indigo", "slate"]);
        assert_eq!(TagVariant::default(), TagVariant::Slate);
    }
}
