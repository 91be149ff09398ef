//! Refresh control shared by the data pages.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RefreshButtonProps {
    #[props(default = "Refresh Data".to_string())]
    pub label: String,
    /// Disables the button and spins the icon
    pub loading: bool,
    pub onclick: EventHandler<MouseEvent>,
}

#[component]
pub fn RefreshButton(props: RefreshButtonProps) -> Element {
    let icon_class = if props.loading { "wrm-spin" } else { "" };

    rsx! {
        button {
            class: "wrm-btn",
            disabled: props.loading,
            onclick: move |evt| props.onclick.call(evt),
            span { class: icon_class, "⟳" }
            span { "{props.label}" }
        }
    }
}
