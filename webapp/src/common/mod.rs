use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use tracing::info;

use content::{Registry, config::SiteConfig, theme::ThemeTokens, validate::validate};

pub mod style;
pub mod viewport;

// site context
//
// the resolved theme, the site configuration and the content registry, built once in
// main and handed to the launch context.  components pull it with use_context() instead
// of reaching for globals, and nothing in it is ever written after startup
#[derive(Clone, Debug)]
pub struct SiteContext {
    pub site: Arc<SiteConfig>,
    pub theme: Arc<ThemeTokens>,
    pub registry: Registry,
}

impl SiteContext {
    pub fn load() -> Result<Self> {
        let site = SiteConfig::load_embedded()?;
        let registry = Registry::builtin();

        validate(&registry).context("refusing to render a broken content registry")?;

        let theme = ThemeTokens::dark();

        info!(
            owner = %site.owner,
            tokens = theme.semantic.len(),
            "site context resolved"
        );

        Ok(SiteContext {
            site: Arc::new(site),
            theme: Arc::new(theme),
            registry,
        })
    }
}

// the document-root provider boundary
//
// anything that wants to wrap the whole page (session or data providers) goes here.
// today it only passes its children through
#[derive(Clone, PartialEq, Props)]
pub struct SiteProviderProps {
    children: Element,
}

#[component]
pub fn SiteProvider(props: SiteProviderProps) -> Element {
    rsx! {
        {props.children}
    }
}
