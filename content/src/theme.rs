use std::{collections::BTreeMap, fmt};

use serde::Serialize;

// design tokens
//
// two custom ramps (brand and obsidian) sit on top of the stock gray/blue ramps, and a
// small set of semantic names maps onto literal colors.  components only ever refer to
// the semantic css variables, so changing a value here restyles the whole page
//
// ramps are indexed 0-9 light to dark and consumers address shades by index, so the
// length is part of the type
pub const RAMP_LEN: usize = 10;

pub type Ramp = [&'static str; RAMP_LEN];

pub const GRAY: Ramp = [
    "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563", "#374151",
    "#1F2937", "#111827",
];

pub const BLUE: Ramp = [
    "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB", "#1D4ED8",
    "#1E40AF", "#1E3A8A",
];

// shade 5 is the interaction color (indigo pulse), shade 9 is the electric blue accent
pub const BRAND: Ramp = [
    "#EEF2FF", "#E0E7FF", "#C7D2FE", "#A5B4FC", "#818CF8", "#6366F1", "#4F46E5", "#4338CA",
    "#3730A3", "#2563EB",
];

// 0 silk white, 3 mist, 6 elevated, 7 surface, 9 base
pub const OBSIDIAN: Ramp = [
    "#F5F5F5", "#E2E8F0", "#CBD5E1", "#94A3B8", "#475569", "#334155", "#1C1C1C", "#161616",
    "#111111", "#0F0F0F",
];

pub const PRIMARY_SHADE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    Gray,
    Blue,
    Brand,
    Obsidian,
}

impl Palette {
    pub fn all() -> Vec<Self> {
        vec![Self::Gray, Self::Blue, Self::Brand, Self::Obsidian]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Blue => "blue",
            Self::Brand => "brand",
            Self::Obsidian => "obsidian",
        }
    }

    pub fn ramp(self) -> &'static Ramp {
        match self {
            Self::Gray => &GRAY,
            Self::Blue => &BLUE,
            Self::Brand => &BRAND,
            Self::Obsidian => &OBSIDIAN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SemanticToken {
    Background,
    Surface,
    Elevated,
    Border,
    TextPrimary,
    TextMuted,
    AccentPrimary,
    AccentSecondary,
}

impl SemanticToken {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Background,
            Self::Surface,
            Self::Elevated,
            Self::Border,
            Self::TextPrimary,
            Self::TextMuted,
            Self::AccentPrimary,
            Self::AccentSecondary,
        ]
    }

    pub fn css_var(self) -> &'static str {
        match self {
            Self::Background => "--color-bg",
            Self::Surface => "--color-surface",
            Self::Elevated => "--color-elevated",
            Self::Border => "--color-border",
            Self::TextPrimary => "--color-text-primary",
            Self::TextMuted => "--color-text-muted",
            Self::AccentPrimary => "--color-accent-primary",
            Self::AccentSecondary => "--color-accent-secondary",
        }
    }

    // the dark appearance is the only one computed
    fn dark_value(self) -> &'static str {
        match self {
            Self::Background => OBSIDIAN[9],
            Self::Surface => OBSIDIAN[7],
            Self::Elevated => OBSIDIAN[6],
            Self::Border => "rgba(148, 163, 184, 0.12)",
            Self::TextPrimary => OBSIDIAN[0],
            Self::TextMuted => OBSIDIAN[3],
            Self::AccentPrimary => BRAND[9],
            Self::AccentSecondary => BRAND[PRIMARY_SHADE],
        }
    }
}

impl fmt::Display for SemanticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_var())
    }
}

// the resolved theme
//
// built once per application instance and then only read
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub ramps: BTreeMap<Palette, Ramp>,
    pub semantic: BTreeMap<SemanticToken, &'static str>,
    pub primary_palette: Palette,
    pub primary_shade: usize,
    pub font_body: &'static str,
    pub font_mono: &'static str,
    pub font_heading: &'static str,
}

impl ThemeTokens {
    pub fn dark() -> Self {
        ThemeTokens {
            ramps: Palette::all().into_iter().map(|p| (p, *p.ramp())).collect(),
            semantic: SemanticToken::all()
                .into_iter()
                .map(|t| (t, t.dark_value()))
                .collect(),
            primary_palette: Palette::Brand,
            primary_shade: PRIMARY_SHADE,
            font_body: "Outfit, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
            font_mono: "'DM Mono', ui-monospace, SFMono-Regular, Menlo, monospace",
            font_heading: "'DM Serif Display', Georgia, serif",
        }
    }

    pub fn shade(&self, palette: Palette, index: usize) -> Option<&'static str> {
        self.ramps.get(&palette).and_then(|r| r.get(index)).copied()
    }

    pub fn primary(&self) -> Option<&'static str> {
        self.shade(self.primary_palette, self.primary_shade)
    }

    pub fn token(&self, token: SemanticToken) -> Option<&'static str> {
        self.semantic.get(&token).copied()
    }

    // render every ramp shade and semantic token as css custom properties on :root
    pub fn css_variables(&self) -> String {
        let mut out = String::from(":root {\n  color-scheme: dark;\n");

        for (palette, ramp) in &self.ramps {
            for (idx, color) in ramp.iter().enumerate() {
                out.push_str(&format!("  --{}-{idx}: {color};\n", palette.name()));
            }
        }

        for (token, value) in &self.semantic {
            out.push_str(&format!("  {}: {value};\n", token.css_var()));
        }

        if let Some(primary) = self.primary() {
            out.push_str(&format!("  --color-primary: {primary};\n"));
        }

        out.push_str(&format!("  --font-body: {};\n", self.font_body));
        out.push_str(&format!("  --font-mono: {};\n", self.font_mono));
        out.push_str(&format!("  --font-heading: {};\n", self.font_heading));
        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ramps_have_ten_shades() {
        let theme = ThemeTokens::dark();

        for palette in [Palette::Brand, Palette::Obsidian] {
            let ramp = theme.ramps.get(&palette).expect("custom ramp present");
            assert_eq!(ramp.len(), RAMP_LEN);
            assert!(ramp.iter().all(|c| c.starts_with('#') && c.len() == 7));
        }

        assert!(theme.ramps.contains_key(&Palette::Gray));
        assert!(theme.ramps.contains_key(&Palette::Blue));
    }

    #[test]
    fn all_semantic_tokens_resolve() {
        let theme = ThemeTokens::dark();

        assert_eq!(theme.semantic.len(), 8);
        for token in SemanticToken::all() {
            let value = theme.token(token).expect("token resolved");
            assert!(!value.is_empty(), "{token} is empty");
        }
    }

    #[test]
    fn dark_values_come_from_ramps() {
        let theme = ThemeTokens::dark();

        assert_eq!(theme.token(SemanticToken::Background), Some("#0F0F0F"));
        assert_eq!(theme.token(SemanticToken::Surface), Some("#161616"));
        assert_eq!(theme.token(SemanticToken::TextMuted), Some("#94A3B8"));
        assert_eq!(theme.token(SemanticToken::AccentPrimary), Some("#2563EB"));
        assert_eq!(theme.token(SemanticToken::AccentSecondary), Some("#6366F1"));
    }

    #[test]
    fn primary_is_brand_shade_five() {
        let theme = ThemeTokens::dark();

        assert_eq!(theme.primary(), Some("#6366F1"));
        assert_eq!(theme.shade(Palette::Brand, 10), None);
    }

    #[test]
    fn css_variables_cover_tokens_and_ramps() {
        let css = ThemeTokens::dark().css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("color-scheme: dark;"));
        assert!(css.contains("--color-bg: #0F0F0F;"));
        assert!(css.contains("--color-border: rgba(148, 163, 184, 0.12);"));
        assert!(css.contains("--brand-5: #6366F1;"));
        assert!(css.contains("--obsidian-9: #0F0F0F;"));
        assert!(css.contains("--gray-0: #F9FAFB;"));
        assert!(css.contains("--color-primary: #6366F1;"));

        for token in SemanticToken::all() {
            assert!(css.contains(token.css_var()));
        }
    }
}
