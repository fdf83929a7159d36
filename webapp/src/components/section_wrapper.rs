use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::common::viewport::{self, Subscription};

// a section counts as in view once a tenth of it intersects the viewport
pub const REVEAL_THRESHOLD: f64 = 0.1;

// reveal state
//
// mirrors the most recent intersection observation.  it is deliberately not latched:
// scrolling a section back out drops it to not-visible and the transition replays on
// the way back in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    pub fn visible(&self) -> bool {
        self.visible
    }

    // returns whether the flag changed; repeating an observation is a no-op
    pub fn observe(&mut self, ratio: f64) -> bool {
        let visible = ratio >= REVEAL_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionWrapperProps {
    // scroll anchor, must be unique on the page
    id: Option<String>,
    children: Element,
}

// SectionWrapper
//
// renders its children in a container whose data-visible attribute tracks the reveal
// state; the fade/slide itself is entirely in the stylesheet.  the observer is attached
// once when the container mounts and released with the component
//
// data-observed is only set once an observer is actually attached, and the stylesheet
// only hides observed sections, so a host that can't observe intersections still shows
// everything (visible stays false, it just never animates)
#[component]
pub fn SectionWrapper(props: SectionWrapperProps) -> Element {
    let mut reveal = use_signal(RevealState::default);
    let mut observed = use_signal(|| false);

    // dropped with the component's hooks, which disconnects the observer
    let observer = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    let section = props.id.clone().unwrap_or_else(|| String::from("(anonymous)"));

    let attach = move |evt: MountedEvent| {
        let mut slot = observer.borrow_mut();
        if slot.is_some() {
            return;
        }

        let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
            warn!(%section, "mounted element is not a dom element, reveal disabled");
            return;
        };

        let callback_section = section.clone();
        let on_ratio = move |ratio: f64| {
            let mut state = *reveal.peek();
            if state.observe(ratio) {
                debug!(section = %callback_section, visible = state.visible(), "reveal changed");
                reveal.set(state);
            }
        };

        match viewport::observe_intersection(&element, REVEAL_THRESHOLD, on_ratio) {
            Ok(subscription) => {
                *slot = Some(subscription);
                observed.set(true);
            }
            Err(err) => warn!(%section, "reveal disabled: {err:#}"),
        }
    };

    rsx! {
        div {
            id: props.id.clone(),
            class: "reveal",
            "data-observed": if observed() { "true" },
            "data-visible": if reveal().visible() { "true" },
            onmounted: attach,
            {props.children}
        }
    }
}
