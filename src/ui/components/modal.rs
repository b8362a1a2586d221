use dioxus::prelude::*;

use crate::ui::styles::{modal_backdrop_style, modal_dialog_style};

/// Closes on backdrop click or on the "X" button.
#[component]
pub fn Modal(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            style: "{modal_backdrop_style()}",
            onclick: move |_| on_close.call(()),
            div {
                id: "confirmation",
                style: "{modal_dialog_style()}",
                onclick: move |event| event.stop_propagation(),
                {children}
                button {
                    style: "position: absolute; top: 6px; right: 6px; border: none; background: #222; color: #fff; border-radius: 50%; width: 24px; height: 24px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "X"
                }
            }
        }
    }
}
