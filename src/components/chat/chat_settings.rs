//! Chat Settings Modal
//!
//! Per-conversation toggles (notifications, archive). Produces intents
//! only; the store applies them.

use connect_core::{Conversation, ConversationId};
use dioxus::prelude::*;

#[component]
pub fn ChatSettings(
    conversation: Conversation,
    on_toggle_mute: EventHandler<ConversationId>,
    on_archive: EventHandler<(ConversationId, bool)>,
    on_close: EventHandler<()>,
) -> Element {
    let id = conversation.id;
    let is_muted = conversation.is_muted;
    let is_archived = conversation.is_archived;

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: handle_keydown,

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "modal-title", "Chat Settings" }
                    button {
                        class: "btn-icon modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body",
                    div { class: "settings-row",
                        span { "Notifications" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| on_toggle_mute.call(id),
                            if is_muted { "Unmute" } else { "Mute" }
                        }
                    }
                    div { class: "settings-row",
                        span { "Archive" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| on_archive.call((id, !is_archived)),
                            if is_archived { "Unarchive" } else { "Archive" }
                        }
                    }

                    if !conversation.members.is_empty() {
                        p { class: "modal-section-label", "Members" }
                        for member in conversation.members.clone() {
                            div { class: "settings-member", "{member}" }
                        }
                    }
                }
            }
        }
    }
}
