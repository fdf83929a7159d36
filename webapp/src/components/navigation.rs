use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::{
    common::{
        SiteContext,
        viewport::{self, Subscription},
    },
    components::{burger::Burger, drawer::Drawer},
    nav::{NAV_ITEMS, NavState},
};
use content::{ANCHOR_CONTACT, ANCHOR_TOP, anchor_href};

// NavBar
//
// fixed top bar whose data-scrolled attribute follows the window scroll offset, plus
// the mobile drawer.  the scroll and escape-key listeners are attached once after the
// first render and released with the component
#[component]
pub fn NavBar() -> Element {
    let site = use_context::<SiteContext>().site;

    let mut nav = use_signal(NavState::default);
    let listeners = use_hook(|| Rc::new(RefCell::new(Vec::<Subscription>::new())));

    use_effect(move || {
        let mut slot = listeners.borrow_mut();
        if !slot.is_empty() {
            return;
        }

        // the signal is only written when the flag flips, not per scroll event
        let on_scroll = move |pos: viewport::ScrollPosition| {
            let mut next = *nav.peek();
            if next.scroll_to(pos.y) {
                debug!(scrolled = next.scrolled(), y = pos.y, "navbar scroll state changed");
                nav.set(next);
            }
        };

        let on_escape = move || {
            if nav.peek().is_open() && nav.with_mut(|state| state.close()) {
                debug!("drawer closed by escape");
            }
        };

        for attached in [
            viewport::observe_scroll(on_scroll),
            viewport::observe_escape(on_escape),
        ] {
            match attached {
                Ok(subscription) => slot.push(subscription),
                Err(err) => warn!("navbar listener unavailable: {err:#}"),
            }
        }
    });

    let state = nav();

    let toggle = move |_: MouseEvent| {
        nav.with_mut(|state| state.toggle());
        debug!(drawer = ?nav.peek().drawer(), "drawer toggled");
    };

    let close = move |_: ()| {
        if nav.with_mut(|state| state.close()) {
            debug!("drawer closed");
        }
    };

    // navigating from the drawer also dismisses it
    let follow = move |_: MouseEvent| {
        if nav.with_mut(|state| state.activate_link()) {
            debug!("drawer closed by navigation");
        }
    };

    rsx! {
        nav {
            class: "navbar",
            "data-scrolled": if state.scrolled() { "true" },
            div { class: "navbar-inner",
                a { href: anchor_href(ANCHOR_TOP), class: "navbar-logo",
                    img {
                        src: "{site.logo_path}",
                        alt: "{site.owner}",
                        class: "navbar-logo-img",
                    }
                    span { class: "navbar-logo-text",
                        "{site.monogram}"
                        span { class: "navbar-logo-accent", "." }
                    }
                }
                ul { class: "navbar-links",
                    for item in NAV_ITEMS.iter() {
                        li { key: "{item.anchor}",
                            a { href: anchor_href(item.anchor), class: "navbar-link", "{item.label}" }
                        }
                    }
                }
                a { href: anchor_href(ANCHOR_CONTACT), class: "navbar-cta", "Hire me" }
                Burger { opened: state.is_open(), on_toggle: toggle }
            }
        }
        Drawer { opened: state.is_open(), on_close: close,
            for item in NAV_ITEMS.iter() {
                a {
                    key: "{item.anchor}",
                    href: anchor_href(item.anchor),
                    class: "navbar-link",
                    onclick: follow,
                    "{item.label}"
                }
            }
            a {
                href: anchor_href(ANCHOR_CONTACT),
                class: "navbar-cta",
                onclick: follow,
                "Hire me"
            }
        }
    }
}
