use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionLabelProps {
    children: Element,
}

#[component]
pub fn SectionLabel(props: SectionLabelProps) -> Element {
    rsx! {
        div { class: "section-label", {props.children} }
    }
}
