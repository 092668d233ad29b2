//! Landing page with an entry point into the messaging view.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "landing",
            h1 { class: "landing-title", "Connect" }
            p { class: "landing-subtitle", "Your campus, one conversation away." }
            button {
                class: "btn btn-primary landing-enter",
                onclick: move |_| {
                    nav.push(Route::Messages {});
                },
                "Open Messages"
            }
        }
    }
}
