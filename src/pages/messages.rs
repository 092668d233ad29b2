//! Messages Page
//!
//! Composition root for the messaging subsystem. Owns conversation state
//! through the shared [`ChatStore`] and wires the chat list, bubbles,
//! composer, and dialogs together: every intent the components emit is
//! routed through the store, then the page re-renders from the mutated
//! model.

use std::time::Duration;

use connect_core::{
    default_quick_replies, Attachment, AudioClip, ChatStore, Conversation, ConversationId,
    EmojiCatalog, Message, MessageId, Presence,
};
use dioxus::prelude::*;

use crate::components::chat::{
    ChatList, ChatSettings, GroupModal, MessageBubble, MessageInput, NewChatModal,
};
use crate::context::use_store;

/// Reactor identity used for locally added reactions.
const LOCAL_REACTOR: &str = "You";

/// Walk a freshly sent message through delivery acknowledgments.
///
/// Display-only simulation standing in for a transport ack; ordering or
/// delivery across the network is explicitly not guaranteed. Transitions
/// go through the status table, so a message that was already read is
/// left alone.
fn simulate_delivery(mut store: Signal<ChatStore>, chat: ConversationId, message: MessageId) {
    spawn(async move {
        tokio::time::sleep(Duration::from_millis(600)).await;
        if store.write().mark_delivered(chat, message).is_err() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(1400)).await;
        let _ = store.write().mark_read(chat, message);
    });
}

fn presence_label(chat: &Conversation) -> String {
    match chat.presence {
        Presence::Online => "online".to_string(),
        Presence::Typing => "typing...".to_string(),
        Presence::Offline => match chat.last_seen {
            Some(at) => format!("last seen {}", at.format("%H:%M")),
            None => "offline".to_string(),
        },
    }
}

/// Messages page: chat list on the left, active conversation on the
/// right, dialogs layered above.
#[component]
pub fn Messages() -> Element {
    let mut store = use_store();
    let mut show_new_chat = use_signal(|| false);
    let mut show_group = use_signal(|| false);
    let mut show_settings = use_signal(|| false);
    let mut reply_target = use_signal(|| None::<Message>);

    let catalog = use_signal(EmojiCatalog::default);
    let quick_replies = use_signal(default_quick_replies);

    let chats: Vec<Conversation> = store.read().conversations().to_vec();
    let selected = store.read().selected();
    let selected_chat: Option<Conversation> =
        selected.and_then(|id| store.read().conversation(id).cloned());
    let messages: Vec<Message> = match selected {
        Some(id) => store.read().messages(id).to_vec(),
        None => Vec::new(),
    };

    // Resolve one-level reply references against the visible list
    let rendered: Vec<(Message, Option<String>)> = messages
        .iter()
        .map(|m| {
            let preview = m
                .reply_to
                .and_then(|target| messages.iter().find(|other| other.id == target))
                .map(|other| other.preview());
            (m.clone(), preview)
        })
        .collect();

    let on_select = move |id: ConversationId| {
        reply_target.set(None);
        if let Err(e) = store.write().select(id) {
            tracing::warn!(error = %e, "failed to open conversation");
        }
    };

    let on_send = move |text: String| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        let reply = reply_target().map(|m| m.id);
        match store.write().send_text(chat, &text, reply) {
            Ok(id) => {
                reply_target.set(None);
                simulate_delivery(store, chat, id);
            }
            Err(e) => tracing::warn!(error = %e, "send failed"),
        }
    };

    let on_attach = move |attachment: Attachment| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        match store.write().send_attachment(chat, attachment, "") {
            Ok(id) => simulate_delivery(store, chat, id),
            Err(e) => tracing::warn!(error = %e, "attachment send failed"),
        }
    };

    let on_voice = move |clip: AudioClip| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        match store.write().send_voice(chat, clip) {
            Ok(id) => simulate_delivery(store, chat, id),
            Err(e) => tracing::warn!(error = %e, "voice send failed"),
        }
    };

    let on_react = move |(message, emoji): (MessageId, String)| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        if let Err(e) = store
            .write()
            .toggle_reaction(chat, message, &emoji, LOCAL_REACTOR)
        {
            tracing::warn!(error = %e, "reaction failed");
        }
    };

    let on_pin = move |message: MessageId| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        if let Err(e) = store.write().toggle_pin(chat, message) {
            tracing::warn!(error = %e, "pin failed");
        }
    };

    let on_reply = move |message: MessageId| {
        let Some(chat) = store.read().selected() else {
            return;
        };
        let target = store.read().message(chat, message).cloned();
        reply_target.set(target);
    };

    let on_create_chat = move |users: Vec<String>| {
        show_new_chat.set(false);
        let id = {
            let mut s = store.write();
            if users.len() == 1 {
                s.create_direct(&users[0])
            } else {
                s.create_group(&users.join(", "), users)
            }
        };
        let _ = store.write().select(id);
    };

    let on_create_group = move |(name, members): (String, Vec<String>)| {
        show_group.set(false);
        let id = store.write().create_group(&name, members);
        let _ = store.write().select(id);
    };

    let on_toggle_mute = move |id: ConversationId| {
        if let Err(e) = store.write().toggle_mute(id) {
            tracing::warn!(error = %e, "mute toggle failed");
        }
    };

    let on_archive = move |(id, archived): (ConversationId, bool)| {
        if let Err(e) = store.write().set_archived(id, archived) {
            tracing::warn!(error = %e, "archive toggle failed");
        }
    };

    rsx! {
        div { class: "messages-page",
            ChatList {
                chats: chats.clone(),
                selected,
                on_select,
                on_new_chat: move |_| show_new_chat.set(true),
                on_new_group: move |_| show_group.set(true),
            }

            div { class: "conversation-pane",
                if let Some(ref chat) = selected_chat {
                    header { class: "conversation-header",
                        div { class: "conversation-title",
                            h2 { class: "conversation-name", "{chat.name}" }
                            p { class: "conversation-presence", "{presence_label(chat)}" }
                        }
                        button {
                            class: "btn-icon",
                            title: "Chat settings",
                            onclick: move |_| show_settings.set(true),
                            "⚙"
                        }
                    }

                    div { class: "conversation-messages",
                        if rendered.is_empty() {
                            div { class: "conversation-empty",
                                p { class: "empty-text", "No messages yet" }
                                p { class: "empty-hint", "Say hi to start the conversation." }
                            }
                        } else {
                            for (message, reply_preview) in rendered {
                                MessageBubble {
                                    key: "{message.id}",
                                    message: message.clone(),
                                    reply_preview,
                                    catalog: catalog(),
                                    on_react,
                                    on_pin,
                                    on_reply,
                                }
                            }
                        }
                    }

                    MessageInput {
                        quick_replies: quick_replies(),
                        replying_to: reply_target(),
                        on_send,
                        on_cancel_reply: move |_| reply_target.set(None),
                        on_attach,
                        on_voice,
                    }
                } else {
                    div { class: "chat-welcome",
                        p { class: "welcome-icon", "💬" }
                        h2 { class: "welcome-title", "Welcome to Connect" }
                        p { class: "welcome-hint", "Pick a conversation or start a new one." }
                    }
                }
            }

            if show_new_chat() {
                NewChatModal {
                    contacts: crate::demo::contacts(),
                    on_create: on_create_chat,
                    on_close: move |_| show_new_chat.set(false),
                }
            }

            if show_group() {
                GroupModal {
                    contacts: crate::demo::contacts(),
                    on_create: on_create_group,
                    on_close: move |_| show_group.set(false),
                }
            }

            if show_settings() {
                if let Some(chat) = selected_chat.clone() {
                    ChatSettings {
                        conversation: chat,
                        on_toggle_mute,
                        on_archive,
                        on_close: move |_| show_settings.set(false),
                    }
                }
            }
        }
    }
}
