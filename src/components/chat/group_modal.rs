//! New Group Modal
//!
//! Collects a group name and member list, emitting both as a structured
//! payload. Creation is gated on a non-blank name and at least one
//! member.

use dioxus::prelude::*;

#[component]
pub fn GroupModal(
    /// Contacts available as members
    contacts: Vec<String>,
    /// Fired with (group name, chosen members)
    on_create: EventHandler<(String, Vec<String>)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut members = use_signal(Vec::<String>::new);

    let mut toggle = move |contact: String| {
        let mut list = members.write();
        if let Some(pos) = list.iter().position(|n| *n == contact) {
            list.remove(pos);
        } else {
            list.push(contact);
        }
    };

    let can_create = !name.read().trim().is_empty() && !members.read().is_empty();

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
                    h2 { class: "modal-title", "New Group" }
                    button {
                        class: "btn-icon modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body",
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Group name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }

                    p { class: "modal-section-label", "Members" }
                    for contact in contacts {
                        label { class: "contact-row",
                            input {
                                r#type: "checkbox",
                                checked: members.read().contains(&contact),
                                onchange: {
                                    let contact = contact.clone();
                                    move |_| toggle(contact.clone())
                                },
                            }
                            span { "{contact}" }
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
                        disabled: !can_create,
                        onclick: move |_| on_create.call((name().trim().to_string(), members())),
                        "Create group"
                    }
                }
            }
        }
    }
}
