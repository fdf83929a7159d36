use dioxus::prelude::*;

use crate::{common::SiteContext, components::section_wrapper::SectionWrapper};
use content::{ANCHOR_CONTACT, config::SocialIcon};

// outline icon paths on a 24x24 grid
fn icon_paths(icon: SocialIcon) -> &'static [&'static str] {
    match icon {
        SocialIcon::GitHub => &[
            "M9 19c-4.3 1.4 -4.3 -2.5 -6 -3m12 5v-3.5c0 -1 .1 -1.4 -.5 -2c2.8 -.3 5.5 -1.4 5.5 -6a4.6 4.6 0 0 0 -1.3 -3.2a4.2 4.2 0 0 0 -.1 -3.2s-1.1 -.3 -3.5 1.3a12.3 12.3 0 0 0 -6.2 0c-2.4 -1.6 -3.5 -1.3 -3.5 -1.3a4.2 4.2 0 0 0 -.1 3.2a4.6 4.6 0 0 0 -1.3 3.2c0 4.6 2.7 5.7 5.5 6c-.6 .6 -.6 1.2 -.5 2v3.5",
        ],
        SocialIcon::LinkedIn => &[
            "M8 11v5",
            "M8 8v.01",
            "M12 16v-5",
            "M16 16v-3a2 2 0 1 0 -4 0",
            "M3 7a4 4 0 0 1 4 -4h10a4 4 0 0 1 4 4v10a4 4 0 0 1 -4 4h-10a4 4 0 0 1 -4 -4z",
        ],
        SocialIcon::X => &[
            "M4 4l11.733 16h4.267l-11.733 -16z",
            "M4 20l6.768 -6.768m2.46 -2.46l6.772 -6.772",
        ],
    }
}

#[component]
pub fn ContactFooter() -> Element {
    let site = use_context::<SiteContext>().site;

    rsx! {
        div { class: "container",
            SectionWrapper { id: "{ANCHOR_CONTACT}",
                div { class: "contact",
                    div { class: "contact-accent-bar" }
                    div { class: "contact-content",
                        h2 { class: "contact-heading", "Let's work together" }
                        p { class: "contact-sub",
                            "Open to remote roles and freelance projects. If you have a question or would like to collaborate, get in touch."
                        }
                        div { class: "contact-actions",
                            a { href: site.mailto(), class: "btn-primary", "Say Hello →" }
                        }
                        div { class: "contact-socials",
                            for social in site.socials.iter() {
                                a {
                                    key: "{social.label}",
                                    href: "{social.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "social-link",
                                    "aria-label": "{social.label}",
                                    svg {
                                        "width": "18",
                                        "height": "18",
                                        "viewBox": "0 0 24 24",
                                        "fill": "none",
                                        "stroke": "currentColor",
                                        "stroke-width": "1.5",
                                        "stroke-linecap": "round",
                                        "stroke-linejoin": "round",
                                        for d in icon_paths(social.icon).iter() {
                                            path { key: "{d}", "d": *d }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "contact-footer", "{site.footer}" }
                }
            }
        }
    }
}
