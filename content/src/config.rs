use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

const EMAIL_REGEX: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

// site configuration
//
// identity and contact details for the page owner.  the content registry holds what
// the page is about, this holds who it belongs to and where its static assets live
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub owner: String,
    pub given_name: String,
    pub family_name: String,
    pub monogram: String,
    pub role: String,
    pub location: String,

    // document head
    pub title: String,
    pub description: String,

    pub summary: String,
    pub bio: Vec<String>,

    // the contact action is a plain mailto link, there is no form handling
    pub email: String,

    // static assets, served as-is from the web root
    pub resume_path: String,
    pub logo_path: String,

    pub footer: String,

    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    X,
}

// the site table is nested under [site] so the document can grow other tables later
// without changing this struct
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

impl SiteConfig {
    #[instrument(level = Level::DEBUG, skip_all)]
    pub fn from_toml(doc: &str) -> Result<Self> {
        let data: TomlSiteFile = toml::from_str(doc).context("failed to parse site config")?;

        data.site.validate()?;

        debug!(owner = %data.site.owner, "parsed site config");
        Ok(data.site)
    }

    pub fn load_embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_SITE_TOML).context("embedded site.toml is invalid")
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn validate(&self) -> Result<()> {
        let email_re = Regex::new(EMAIL_REGEX)?;

        let mut problems = Vec::new();

        for (field, value) in [
            ("owner", &self.owner),
            ("given_name", &self.given_name),
            ("family_name", &self.family_name),
            ("monogram", &self.monogram),
            ("title", &self.title),
        ] {
            if value.trim().is_empty() {
                problems.push(format!("'{field}' is empty"));
            }
        }

        if !email_re.is_match(&self.email) {
            problems.push(format!("'{}' is not an email address", self.email));
        }

        for (field, path) in [
            ("resume_path", &self.resume_path),
            ("logo_path", &self.logo_path),
        ] {
            if !path.starts_with('/') {
                problems.push(format!("'{field}' must be an absolute path, got '{path}'"));
            }
        }

        let mut labels = HashSet::new();
        for social in &self.socials {
            if !social.href.starts_with("https://") {
                problems.push(format!(
                    "social link '{}' must use https, got '{}'",
                    social.label, social.href
                ));
            }
            if !labels.insert(social.label.as_str()) {
                problems.push(format!("social link '{}' appears more than once", social.label));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("site config is invalid: {}", problems.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(extra: &str) -> String {
        format!(
            r#"
[site]
owner = "Ada Lovelace"
given_name = "Ada"
family_name = "Lovelace"
monogram = "AL"
role = "Engineer"
location = "London"
title = "Ada Lovelace"
description = "analytical"
summary = "notes on the engine"
bio = []
email = "ada@example.com"
resume_path = "/cv.pdf"
logo_path = "/logo.png"
footer = "Ada"
{extra}
"#
        )
    }

    #[test]
    fn embedded_config_loads() {
        let site = SiteConfig::load_embedded().expect("embedded config");

        assert_eq!(site.monogram, "ES");
        assert_eq!(site.socials.len(), 3);
        assert_eq!(site.socials[2].icon, SocialIcon::X);
        assert_eq!(site.mailto(), "mailto:enyelsequeira@hotmail.com");
        assert_eq!(site.bio.len(), 4);
    }

    #[test]
    fn socials_default_to_empty() {
        let site = SiteConfig::from_toml(&minimal("")).expect("minimal config");
        assert!(site.socials.is_empty());
    }

    #[test]
    fn missing_table_is_rejected() {
        let err = SiteConfig::from_toml("owner = \"nobody\"").expect_err("no [site] table");
        assert!(err.to_string().contains("failed to parse site config"));
    }

    #[test]
    fn bad_email_and_relative_paths_are_rejected() {
        let doc = minimal("").replace("ada@example.com", "ada").replace("/cv.pdf", "cv.pdf");

        let err = SiteConfig::from_toml(&doc).expect_err("invalid config").to_string();
        assert!(err.contains("'ada' is not an email address"));
        assert!(err.contains("'resume_path' must be an absolute path"));
    }

    #[test]
    fn socials_must_be_https_and_unique() {
        let doc = minimal(
            r#"
[[site.socials]]
label = "GitHub"
href = "http://github.com/ada"
icon = "GitHub"

[[site.socials]]
label = "GitHub"
href = "https://github.com/ada"
icon = "GitHub"
"#,
        );

        let err = SiteConfig::from_toml(&doc).expect_err("invalid socials").to_string();
        assert!(err.contains("must use https"));
        assert!(err.contains("appears more than once"));
    }
}
