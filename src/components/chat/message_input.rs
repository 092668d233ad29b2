//! Message Input Component
//!
//! The composer bar: text draft, attachment menu, quick-reply shelf, and
//! voice recording. Emits four intents upward: send-text, attach-file,
//! voice-message, and (via the shelf) quick-reply-insert into the draft.
//!
//! Draft state lives in [`connect_core::Composer`]; this component wires
//! it to the widgets. The draft is cleared by `take_draft` on send, so
//! the owner never has to remember to clear it.

use connect_core::{
    Attachment, AttachmentKind, Composer, Message, QuickReply, SyntheticMicrophone, VoiceRecorder,
};
use dioxus::prelude::*;

#[component]
pub fn MessageInput(
    /// Canned phrases for the quick-reply shelf (injected configuration)
    quick_replies: Vec<QuickReply>,
    /// Message being replied to, owned by the page
    #[props(default)]
    replying_to: Option<Message>,
    /// Fired with the trimmed draft text
    on_send: EventHandler<String>,
    on_cancel_reply: EventHandler<()>,
    /// Fired the instant a file is chosen, already classified
    on_attach: EventHandler<Attachment>,
    /// Fired with the finalized voice clip
    on_voice: EventHandler<connect_core::AudioClip>,
) -> Element {
    let mut composer = use_signal(Composer::new);
    let mut recorder = use_signal(VoiceRecorder::new);
    let mut recording_error = use_signal(|| None::<String>);

    let can_send = composer.read().can_send();
    let attach_menu_open = composer.read().attach_menu_open();
    let shelf_open = composer.read().quick_replies_open();
    let is_recording = recorder.read().is_recording();

    // Both the click and keyboard paths converge here; take_draft gates
    // on a non-blank draft so a send can fire at most once per draft.
    let mut send = move || {
        let draft = composer.write().take_draft();
        if let Some(text) = draft {
            on_send.call(text);
        }
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send();
        }
    };

    let mut pick_file = move |kind: AttachmentKind| {
        composer.write().close_menus();
        spawn(async move {
            // The extension filter is advisory; classification happens on
            // whatever file actually comes back.
            let picked = rfd::AsyncFileDialog::new()
                .add_filter(kind.label(), kind.picker_extensions())
                .pick_file()
                .await;
            if let Some(file) = picked {
                let bytes = file.read().await;
                let attachment = Attachment::from_file(file.file_name(), bytes);
                tracing::debug!(
                    kind = attachment.kind.label(),
                    size = attachment.size(),
                    "file attached"
                );
                on_attach.call(attachment);
            }
        });
    };

    let toggle_recording = move |_| {
        let live = recorder.read().is_recording();
        if live {
            // Stop always emits whatever was captured
            let clip = recorder.write().stop();
            if let Some(clip) = clip {
                on_voice.call(clip);
            }
        } else {
            match recorder.write().start(SyntheticMicrophone::open) {
                Ok(()) => recording_error.set(None),
                Err(e) => {
                    tracing::warn!(error = %e, "could not start recording");
                    recording_error.set(Some(e.to_string()));
                }
            }
        }
    };

    rsx! {
        div { class: "message-input-bar",
            if let Some(error) = recording_error() {
                div { class: "recording-error-banner",
                    span { "{error}" }
                    button {
                        class: "btn-icon",
                        onclick: move |_| recording_error.set(None),
                        "×"
                    }
                }
            }

            if let Some(ref target) = replying_to {
                div { class: "reply-banner",
                    span { class: "reply-banner-label", "Replying to {target.sender.display_name()}" }
                    span { class: "reply-banner-text", "{target.preview()}" }
                    button {
                        class: "btn-icon",
                        title: "Cancel reply",
                        onclick: move |_| on_cancel_reply.call(()),
                        "×"
                    }
                }
            }

            if shelf_open {
                div { class: "quick-reply-shelf",
                    for reply in quick_replies.clone() {
                        button {
                            class: "quick-reply-item",
                            onclick: {
                                let reply = reply.clone();
                                move |_| composer.write().apply_quick_reply(&reply)
                            },
                            span { class: "quick-reply-icon", "{reply.icon}" }
                            span { "{reply.text}" }
                        }
                    }
                }
            }

            if attach_menu_open {
                div { class: "attach-menu",
                    button {
                        class: "attach-menu-item",
                        onclick: move |_| pick_file(AttachmentKind::Image),
                        "📷 Photo"
                    }
                    button {
                        class: "attach-menu-item",
                        onclick: move |_| pick_file(AttachmentKind::Video),
                        "🎬 Video"
                    }
                    button {
                        class: "attach-menu-item",
                        onclick: move |_| pick_file(AttachmentKind::Document),
                        "📄 Document"
                    }
                }
            }

            div { class: "message-input-row",
                button {
                    class: if attach_menu_open { "btn-icon btn-icon-active" } else { "btn-icon" },
                    title: "Attach",
                    onclick: move |_| composer.write().toggle_attach_menu(),
                    "📎"
                }
                button {
                    class: if shelf_open { "btn-icon btn-icon-active" } else { "btn-icon" },
                    title: "Quick replies",
                    onclick: move |_| composer.write().toggle_quick_replies(),
                    "⚡"
                }

                textarea {
                    class: "message-input-textarea",
                    placeholder: "Type a message...",
                    value: "{composer.read().input()}",
                    rows: 1,
                    oninput: move |e| composer.write().set_input(e.value()),
                    onkeydown: handle_keydown,
                }

                button {
                    class: if is_recording { "btn-icon btn-record btn-record-live" } else { "btn-icon btn-record" },
                    title: if is_recording { "Stop recording" } else { "Record voice message" },
                    onclick: toggle_recording,
                    if is_recording { "⏹" } else { "🎤" }
                }

                // Attachments and voice bypass this gate entirely; it only
                // governs the text channel.
                button {
                    class: if can_send { "message-send-btn message-send-btn-active" } else { "message-send-btn" },
                    disabled: !can_send,
                    title: "Send (Enter)",
                    onclick: move |_| send(),
                    "➤"
                }
            }
        }
    }
}
