use std::fmt;

use tracing::debug;

// host observation primitives
//
// the page needs exactly three things from the browser beyond rendering: the window's
// scroll offset, whether an element intersects the viewport, and the escape key.  each
// is a push-based subscription, and the returned Subscription detaches the listener
// when dropped, so holding it in a hook ties the observer to the component's lifetime
//
// on targets without a browser every primitive reports an error, which callers treat
// as "capability unavailable" and degrade accordingly
pub struct Subscription {
    name: &'static str,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(name: &'static str, teardown: impl FnOnce() + 'static) -> Self {
        debug!(name, "observer attached");
        Subscription {
            name,
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            debug!(name = self.name, "observer detached");
            teardown();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("name", &self.name)
            .field("attached", &self.teardown.is_some())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use anyhow::{Context, Result, anyhow};
    use js_sys::Array;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{
        Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        KeyboardEvent, Window,
    };

    use super::{ScrollPosition, Subscription};

    fn window() -> Result<Window> {
        web_sys::window().context("no global window exists")
    }

    // register a window listener and hand back the guard that removes it again
    fn listen(
        window: Window,
        name: &'static str,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Subscription> {
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow!("failed to add {event} listener: {err:?}"))?;

        Ok(Subscription::new(name, move || {
            let _ = window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            drop(callback);
        }))
    }

    pub fn observe_scroll(
        mut on_scroll: impl FnMut(ScrollPosition) + 'static,
    ) -> Result<Subscription> {
        let window = window()?;

        let reader = window.clone();
        let position = move || ScrollPosition {
            x: reader.scroll_x().unwrap_or_default(),
            y: reader.scroll_y().unwrap_or_default(),
        };

        // a reload halfway down the page should start in the right state, not wait for
        // the first scroll event
        on_scroll(position());

        let callback = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_scroll(position()));

        listen(window, "scroll", "scroll", callback)
    }

    pub fn observe_escape(mut on_escape: impl FnMut() + 'static) -> Result<Subscription> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |evt: Event| {
            if evt
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape")
            {
                on_escape();
            }
        });

        listen(window()?, "escape", "keydown", callback)
    }

    pub fn observe_intersection(
        target: &Element,
        threshold: f64,
        mut on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Subscription> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_ratio(entry.intersection_ratio());
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        // older hosts without IntersectionObserver throw here
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| anyhow!("IntersectionObserver unavailable: {err:?}"))?;

        observer.observe(target);

        Ok(Subscription::new("intersection", move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{observe_escape, observe_intersection, observe_scroll};

#[cfg(not(target_arch = "wasm32"))]
mod unsupported {
    use anyhow::{Result, bail};
    use web_sys::Element;

    use super::{ScrollPosition, Subscription};

    pub fn observe_scroll(_: impl FnMut(ScrollPosition) + 'static) -> Result<Subscription> {
        bail!("scroll observation requires a browser")
    }

    pub fn observe_escape(_: impl FnMut() + 'static) -> Result<Subscription> {
        bail!("keyboard observation requires a browser")
    }

    pub fn observe_intersection(
        _: &Element,
        _: f64,
        _: impl FnMut(f64) + 'static,
    ) -> Result<Subscription> {
        bail!("intersection observation requires a browser")
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use unsupported::{observe_escape, observe_intersection, observe_scroll};

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn teardown_runs_once_on_drop() {
        let released = Rc::new(Cell::new(0));

        let sub = {
            let released = released.clone();
            Subscription::new("test", move || released.set(released.get() + 1))
        };
        assert_eq!(released.get(), 0);

        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn guard_in_a_slot_releases_when_replaced() {
        let released = Rc::new(Cell::new(0));
        let make = |released: Rc<Cell<u32>>| {
            Subscription::new("slot", move || released.set(released.get() + 1))
        };

        let mut slot = Some(make(released.clone()));
        assert!(slot.is_some());
        assert_eq!(released.get(), 0);

        slot = Some(make(released.clone()));
        assert_eq!(released.get(), 1);

        slot.take();
        assert_eq!(released.get(), 2);
        assert!(slot.is_none());
    }

    #[test]
    fn native_host_reports_capabilities_unavailable() {
        assert!(observe_scroll(|_| {}).is_err());
        assert!(observe_escape(|| {}).is_err());
    }
}
