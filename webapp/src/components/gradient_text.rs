use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct GradientTextProps {
    children: Element,
}

#[component]
pub fn GradientText(props: GradientTextProps) -> Element {
    rsx! {
        span { class: "gradient-text", {props.children} }
    }
}
