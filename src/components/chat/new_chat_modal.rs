//! New Message Modal
//!
//! Picks participants for a new conversation and emits the chosen list.
//! Escape or overlay click closes without emitting.

use dioxus::prelude::*;

#[component]
pub fn NewChatModal(
    /// Contacts available to message
    contacts: Vec<String>,
    /// Fired with the chosen participant list
    on_create: EventHandler<Vec<String>>,
    on_close: EventHandler<()>,
) -> Element {
    let mut chosen = use_signal(Vec::<String>::new);

    let mut toggle = move |name: String| {
        let mut list = chosen.write();
        if let Some(pos) = list.iter().position(|n| *n == name) {
            list.remove(pos);
        } else {
            list.push(name);
        }
    };

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
                    h2 { class: "modal-title", "New Message" }
                    button {
                        class: "btn-icon modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body",
                    for name in contacts {
                        label { class: "contact-row",
                            input {
                                r#type: "checkbox",
                                checked: chosen.read().contains(&name),
                                onchange: {
                                    let name = name.clone();
                                    move |_| toggle(name.clone())
                                },
                            }
                            span { "{name}" }
                        }
                    }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: chosen.read().is_empty(),
                        onclick: move |_| on_create.call(chosen()),
                        "Start chat"
                    }
                }
            }
        }
    }
}
