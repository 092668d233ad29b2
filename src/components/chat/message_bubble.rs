//! Message Bubble Component
//!
//! Renders one message with its metadata and offers reaction, pin, and
//! reply affordances. Holds no message state of its own: every action is
//! forwarded upward as an intent.
//!
//! Hover discloses the action bar and the full picker; leaving the
//! bubble closes both together. Pin and reply indicators are persistent,
//! not hover state.

use connect_core::{AttachmentKind, DeliveryStatus, EmojiCatalog, Message, MessageId, QUICK_REACTIONS};
use dioxus::prelude::*;

use super::emoji_picker::EmojiPicker;

/// Map a delivery status to its icon and color class.
///
/// Total over the whole status space, unknown/absent included: incoming
/// messages and unrecognized statuses get no icon rather than a panic.
fn delivery_glyph(status: Option<DeliveryStatus>) -> Option<(&'static str, &'static str)> {
    match status {
        Some(DeliveryStatus::Sent) => Some(("✓", "status-glyph status-glyph-muted")),
        Some(DeliveryStatus::Delivered) => Some(("✓✓", "status-glyph status-glyph-muted")),
        Some(DeliveryStatus::Read) => Some(("✓✓", "status-glyph status-glyph-accent")),
        None => None,
    }
}

fn attachment_line(kind: AttachmentKind, name: &str) -> String {
    match kind {
        AttachmentKind::Image => format!("📷 {}", name),
        AttachmentKind::Video => format!("🎬 {}", name),
        AttachmentKind::Document => format!("📄 {}", name),
    }
}

/// One message bubble with hover-disclosed actions.
#[component]
pub fn MessageBubble(
    message: Message,
    /// Preview text of the message this one replies to, if any
    #[props(default)]
    reply_preview: Option<String>,
    /// Injected emoji category table for the full picker
    catalog: EmojiCatalog,
    /// Reaction intent: quick bar, full picker, and aggregated chips all
    /// converge here
    on_react: EventHandler<(MessageId, String)>,
    on_pin: EventHandler<MessageId>,
    on_reply: EventHandler<MessageId>,
) -> Element {
    let mut hovered = use_signal(|| false);
    let mut picker_open = use_signal(|| false);

    let is_mine = message.sender.is_me();
    let message_id = message.id;
    let row_class = if is_mine {
        "message-row message-row-sent"
    } else {
        "message-row message-row-received"
    };
    let bubble_class = if is_mine {
        "message-bubble message-bubble-sent"
    } else {
        "message-bubble message-bubble-received"
    };
    let groups = message.aggregate_reactions();

    rsx! {
        div {
            class: "{row_class}",
            onmouseenter: move |_| hovered.set(true),
            // Leaving the hover region closes the quick bar and the full
            // picker together; pin/reply indicators stay.
            onmouseleave: move |_| {
                hovered.set(false);
                picker_open.set(false);
            },

            div { class: "message-bubble-column",
                div { class: "{bubble_class}",
                    if message.is_pinned {
                        div { class: "message-pin-indicator", "📌 Pinned" }
                    }

                    if let Some(ref preview) = reply_preview {
                        div { class: "message-reply-indicator",
                            span { class: "message-reply-label", "Replying to" }
                            span { class: "message-reply-text", "{preview}" }
                        }
                    }

                    if !is_mine {
                        div { class: "message-sender", "{message.sender.display_name()}" }
                    }

                    if let Some(ref attachment) = message.attachment {
                        div { class: "message-attachment",
                            "{attachment_line(attachment.kind, &attachment.name)}"
                        }
                    }

                    if message.voice.is_some() {
                        div { class: "message-voice", "🎤 Voice message" }
                    }

                    if !message.text.is_empty() {
                        div { class: "message-text", "{message.text}" }
                    }

                    div { class: "message-meta",
                        span { class: "message-time", "{message.relative_time()}" }
                        if let Some((glyph, class)) = delivery_glyph(message.status) {
                            span { class: "{class}", "{glyph}" }
                        }
                    }
                }

                if !groups.is_empty() {
                    div { class: "message-reaction-chips",
                        for group in groups {
                            button {
                                class: "reaction-chip",
                                onclick: {
                                    let emoji = group.emoji.clone();
                                    move |_| on_react.call((message_id, emoji.clone()))
                                },
                                "{group.emoji} {group.count}"
                            }
                        }
                    }
                }

                if hovered() {
                    div { class: "message-actions",
                        button {
                            class: "btn-icon",
                            title: "Reply",
                            onclick: move |_| on_reply.call(message_id),
                            "↩"
                        }
                        button {
                            class: "btn-icon",
                            title: "Pin",
                            onclick: move |_| on_pin.call(message_id),
                            "📌"
                        }
                        for emoji in QUICK_REACTIONS {
                            button {
                                class: "quick-reaction",
                                onclick: move |_| on_react.call((message_id, emoji.to_string())),
                                "{emoji}"
                            }
                        }
                        button {
                            class: "btn-icon",
                            title: "More reactions",
                            onclick: move |_| picker_open.set(!picker_open()),
                            "＋"
                        }
                    }
                }

                if picker_open() {
                    EmojiPicker {
                        catalog: catalog.clone(),
                        on_pick: move |emoji: String| {
                            on_react.call((message_id, emoji));
                            picker_open.set(false);
                        },
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
    fn test_delivery_glyph_total() {
        assert_eq!(
            delivery_glyph(Some(DeliveryStatus::Sent)).unwrap().0,
            "✓"
        );
        assert_eq!(
            delivery_glyph(Some(DeliveryStatus::Delivered)).unwrap().0,
            "✓✓"
        );
        let (glyph, class) = delivery_glyph(Some(DeliveryStatus::Read)).unwrap();
        assert_eq!(glyph, "✓✓");
        assert!(class.contains("accent"));

        // Incoming messages and unknown labels: no icon, no panic
        assert_eq!(delivery_glyph(None), None);
        assert_eq!(delivery_glyph(DeliveryStatus::from_label("queued")), None);
    }

    #[test]
    fn test_attachment_line_per_kind() {
        assert_eq!(
            attachment_line(AttachmentKind::Image, "pic.png"),
            "📷 pic.png"
        );
        assert_eq!(
            attachment_line(AttachmentKind::Video, "clip.mp4"),
            "🎬 clip.mp4"
        );
        assert_eq!(
            attachment_line(AttachmentKind::Document, "notes.pdf"),
            "📄 notes.pdf"
        );
    }
}
