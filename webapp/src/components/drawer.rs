use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct DrawerProps {
    opened: bool,
    on_close: EventHandler<()>,
    children: Element,
}

// Drawer
//
// a left-hand overlay panel.  it is only mounted while open; clicking the overlay or
// the close button asks the owner to close it, clicks inside the panel do not
#[component]
pub fn Drawer(props: DrawerProps) -> Element {
    if !props.opened {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "drawer-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
        }
        aside {
            class: "drawer",
            role: "dialog",
            "aria-modal": "true",
            onclick: move |evt| evt.stop_propagation(),
            div { class: "drawer-header",
                button {
                    class: "drawer-close",
                    r#type: "button",
                    "aria-label": "Close navigation",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div { class: "drawer-body", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // event handlers need a runtime, so each case renders through its own root
    #[component]
    fn ClosedDrawer() -> Element {
        rsx! {
            Drawer { opened: false, on_close: |_: ()| {},
                a { href: "#work", "Work" }
            }
        }
    }

    #[component]
    fn OpenDrawer() -> Element {
        rsx! {
            Drawer { opened: true, on_close: |_: ()| {},
                a { href: "#work", "Work" }
            }
        }
    }

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_drawer_renders_nothing() {
        let html = render(ClosedDrawer);

        assert!(!html.contains("drawer"));
        assert!(!html.contains("Work"));
    }

    #[test]
    fn open_drawer_renders_overlay_close_button_and_children() {
        let html = render(OpenDrawer);

        assert!(html.contains("class=\"drawer-overlay\""));
        assert!(html.contains("class=\"drawer\""));
        assert!(html.contains("aria-label=\"Close navigation\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("href=\"#work\""));
        assert!(html.contains(">Work</a>"));
    }
}
