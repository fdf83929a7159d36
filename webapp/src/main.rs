#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::{SiteContext, SiteProvider};

mod components;

mod home;
use home::Home;

mod nav;
mod sections;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // content and config are compiled in, so a failure here is a build defect and there
    // is nothing sensible to render
    let site = SiteContext::load().expect("failed to resolve site context");

    dioxus::LaunchBuilder::new().with_context(site).launch(App);
}

// one content route; everything else is in-page anchors
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    let site = use_context::<SiteContext>();

    // resolved once per app instance, the tokens never change afterwards
    let variables = use_hook(|| site.theme.css_variables());

    rsx! {
        document::Title { "{site.site.title}" }
        document::Meta { name: "description", content: "{site.site.description}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "color-scheme", content: "dark" }
        document::Link { rel: "icon", href: "{site.site.logo_path}", r#type: "image/png" }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=DM+Serif+Display:ital@0;1&family=DM+Mono:wght@300;400;500&family=Outfit:wght@300;400;500;600;700&display=swap",
        }
        style { "{variables}" }
        style { "{common::style::PAGE_STYLES}" }
        SiteProvider {
            Router::<Route> {}
        }
    }
}
