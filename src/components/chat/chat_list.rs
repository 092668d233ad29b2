//! Chat List Component
//!
//! Presents the conversation set with filter pills and search, and
//! reports row selection. Filtering and search semantics live in
//! `connect_core::chat::roster`; this component only renders.

use chrono::{DateTime, Utc};
use connect_core::{filter_conversations, ChatFilter, Conversation, ConversationId, Presence};
use dioxus::prelude::*;

/// Status dot class for a presence value. Total: anything that is not
/// online or typing renders the offline dot.
fn presence_dot(presence: Presence) -> &'static str {
    match presence {
        Presence::Online => "status-dot status-dot-online",
        Presence::Typing => "status-dot status-dot-typing",
        Presence::Offline => "status-dot status-dot-offline",
    }
}

/// Format an activity instant as a relative time string.
fn format_relative_time(instant: DateTime<Utc>) -> String {
    let elapsed_secs = (Utc::now().timestamp_millis() - instant.timestamp_millis()) / 1000;

    if elapsed_secs < 60 {
        "Just now".to_string()
    } else if elapsed_secs < 3600 {
        format!("{}m", elapsed_secs / 60)
    } else if elapsed_secs < 86400 {
        format!("{}h", elapsed_secs / 3600)
    } else {
        format!("{}d", elapsed_secs / 86400)
    }
}

/// Conversation list with filtering, search, and selection.
#[component]
pub fn ChatList(
    /// Conversations to display, in owner order
    chats: Vec<Conversation>,
    /// Currently open conversation
    selected: Option<ConversationId>,
    /// Row click handler; clearing the unread count is the owner's job
    on_select: EventHandler<ConversationId>,
    /// Open the new-message dialog
    on_new_chat: EventHandler<()>,
    /// Open the new-group dialog
    on_new_group: EventHandler<()>,
    /// Narrow layout (single pane)
    #[props(default = false)]
    is_mobile: bool,
) -> Element {
    let mut filter = use_signal(|| ChatFilter::All);
    let mut query = use_signal(String::new);

    let query_text = query();
    let visible: Vec<Conversation> = filter_conversations(&chats, filter(), &query_text)
        .into_iter()
        .cloned()
        .collect();

    let list_class = if is_mobile {
        "chat-list chat-list-mobile"
    } else {
        "chat-list"
    };

    rsx! {
        div { class: "{list_class}",
            header { class: "chat-list-header",
                h2 { class: "chat-list-title", "Messages" }
                div { class: "chat-list-actions",
                    button {
                        class: "btn-icon",
                        title: "New message",
                        onclick: move |_| on_new_chat.call(()),
                        "✏️"
                    }
                    button {
                        class: "btn-icon",
                        title: "New group",
                        onclick: move |_| on_new_group.call(()),
                        "👥"
                    }
                }
            }

            input {
                class: "chat-search",
                r#type: "text",
                placeholder: "Search chats...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }

            div { class: "chat-filter-pills",
                for f in ChatFilter::ALL_FILTERS {
                    button {
                        class: if filter() == f { "filter-pill filter-pill-active" } else { "filter-pill" },
                        onclick: move |_| filter.set(f),
                        "{f.label()}"
                    }
                }
            }

            // An empty filtered result renders an empty scroll region
            div { class: "chat-list-rows",
                for chat in visible {
                    ChatRow {
                        key: "{chat.id}",
                        chat: chat.clone(),
                        selected: selected == Some(chat.id),
                        on_select,
                    }
                }
            }
        }
    }
}

/// One conversation row.
#[component]
fn ChatRow(
    chat: Conversation,
    selected: bool,
    on_select: EventHandler<ConversationId>,
) -> Element {
    let row_class = if selected {
        "chat-row chat-row-selected"
    } else {
        "chat-row"
    };
    let chat_id = chat.id;

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| on_select.call(chat_id),

            div { class: "chat-avatar",
                span { class: "chat-avatar-text", "{chat.avatar}" }
                span { class: "{presence_dot(chat.presence)}" }
            }

            div { class: "chat-row-body",
                div { class: "chat-row-top",
                    span { class: "chat-row-name", "{chat.name}" }
                    if let Some(at) = chat.last_activity {
                        span { class: "chat-row-time", "{format_relative_time(at)}" }
                    }
                }
                div { class: "chat-row-bottom",
                    if chat.presence == Presence::Typing {
                        span { class: "chat-row-typing", "typing..." }
                    } else if let Some(ref preview) = chat.last_message {
                        span { class: "chat-row-preview", "{preview}" }
                    } else {
                        span { class: "chat-row-preview chat-row-preview-empty", "No messages yet" }
                    }

                    if chat.is_muted {
                        span { class: "chat-row-muted", title: "Muted", "🔕" }
                    }
                    if chat.unread_count > 0 {
                        span { class: "chat-unread-badge", "{chat.unread_count}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_dot_total() {
        assert_eq!(presence_dot(Presence::Online), "status-dot status-dot-online");
        assert_eq!(presence_dot(Presence::Typing), "status-dot status-dot-typing");
        assert_eq!(presence_dot(Presence::Offline), "status-dot status-dot-offline");
        // Unknown labels fall back to offline before they ever reach the dot
        assert_eq!(
            presence_dot(Presence::from_label("away")),
            "status-dot status-dot-offline"
        );
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative_time(now), "Just now");
        assert_eq!(
            format_relative_time(now - chrono::Duration::minutes(5)),
            "5m"
        );
        assert_eq!(format_relative_time(now - chrono::Duration::hours(2)), "2h");
        assert_eq!(format_relative_time(now - chrono::Duration::days(3)), "3d");
    }
}
