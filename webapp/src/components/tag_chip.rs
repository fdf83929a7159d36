use dioxus::prelude::*;

use content::tag::TagVariant;

#[derive(Clone, PartialEq, Props)]
pub struct TagChipProps {
    label: String,
    #[props(default)]
    variant: TagVariant,
}

#[component]
pub fn TagChip(props: TagChipProps) -> Element {
    rsx! {
        span { class: "tag", "data-variant": props.variant.as_str(), "{props.label}" }
    }
}
