use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct BurgerProps {
    opened: bool,
    on_toggle: EventHandler<MouseEvent>,
}

#[component]
pub fn Burger(props: BurgerProps) -> Element {
    let opened = props.opened;
    let expanded = if opened { "true" } else { "false" };

    rsx! {
        button {
            class: "burger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            "aria-expanded": expanded,
            "data-opened": if opened { "true" },
            onclick: move |evt| props.on_toggle.call(evt),
            span {}
            span {}
            span {}
        }
    }
}
