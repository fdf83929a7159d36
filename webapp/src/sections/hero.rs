use dioxus::prelude::*;

use crate::{
    common::SiteContext,
    components::{gradient_text::GradientText, tag_chip::TagChip},
};
use content::{ANCHOR_TOP, ANCHOR_WORK, anchor_href};

#[component]
pub fn HeroSection() -> Element {
    let ctx = use_context::<SiteContext>();
    let site = ctx.site;

    // the browser saves the cv under its own file name
    let resume_name = site.resume_path.rsplit('/').next().unwrap_or_default().to_owned();

    rsx! {
        div { class: "container",
            section { id: ANCHOR_TOP, class: "hero",
                p { class: "hero-eyebrow", "{site.role} · {site.location}" }
                h1 { class: "hero-heading",
                    "{site.given_name}"
                    br {}
                    GradientText { "{site.family_name}" }
                }
                p { class: "hero-sub", "{site.summary}" }
                div { class: "hero-actions",
                    a { href: anchor_href(ANCHOR_WORK), class: "btn-primary", "View Work →" }
                    a {
                        href: "{site.resume_path}",
                        download: "{resume_name}",
                        class: "btn-ghost",
                        "Download CV"
                    }
                }
                div { class: "hero-tags",
                    for tag in ctx.registry.hero_tags.iter() {
                        TagChip { key: "{tag.label}", label: "{tag.label}", variant: tag.variant }
                    }
                }
            }
        }
    }
}
