use dioxus::prelude::*;

use crate::{
    components::navigation::NavBar,
    sections::{
        about::AboutSection, contact::ContactFooter, hero::HeroSection,
        projects::ProjectsSection, stats::StatsSection,
    },
};

// the single content route: the navbar followed by every section in page order
#[component]
pub fn Home() -> Element {
    rsx! {
        NavBar {}
        main { class: "page",
            HeroSection {}
            StatsSection {}
            ProjectsSection {}
            AboutSection {}
            ContactFooter {}
        }
    }
}
