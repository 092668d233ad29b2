//! Message types for display and state tracking
//!
//! This module provides the [`Message`] struct which represents one
//! contribution to a conversation: text, an optional attachment or voice
//! clip, delivery status, pin flag, reply reference, and reactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::composer::{Attachment, AudioClip};
use crate::error::{ChatError, ChatResult};

/// Unique message identifier, assigned by the creator at send time.
///
/// Ulids are client-generated (for optimistic appends) and sortable by
/// creation time, so ids double as a stable tiebreaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Ulid);

impl MessageId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who authored a message.
///
/// Drives left/right alignment and delivery-status visibility: only our
/// own messages carry a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The local participant
    Me,
    /// A remote participant, identified by display name or user id
    Peer(String),
}

impl Sender {
    pub fn is_me(&self) -> bool {
        matches!(self, Sender::Me)
    }

    /// Display name for the sender ("You" for the local participant).
    pub fn display_name(&self) -> &str {
        match self {
            Sender::Me => "You",
            Sender::Peer(name) => name,
        }
    }
}

/// Delivery status of an outgoing message.
///
/// Monotonic: `Sent -> Delivered -> Read`. The allowed transitions are
/// enforced by [`Message::advance_status`]; a read acknowledgment may
/// collapse the delivered step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

impl DeliveryStatus {
    /// Parse a status label. Total: unknown labels map to `None` rather
    /// than failing, so foreign data with a status this client does not
    /// know simply renders without an icon.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sent" => Some(DeliveryStatus::Sent),
            "delivered" => Some(DeliveryStatus::Delivered),
            "read" => Some(DeliveryStatus::Read),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Read => "read",
        }
    }

    /// Allowed-transition table. Forward moves only; a read ack may skip
    /// the delivered step.
    pub fn can_advance(self, next: Self) -> bool {
        matches!(
            (self, next),
            (DeliveryStatus::Sent, DeliveryStatus::Delivered)
                | (DeliveryStatus::Sent, DeliveryStatus::Read)
                | (DeliveryStatus::Delivered, DeliveryStatus::Read)
        )
    }
}

/// A single emoji annotation on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Unique reaction id (for targeted removal)
    pub id: String,
    /// The emoji character(s)
    pub emoji: String,
    /// Who reacted (display name or user id)
    pub reactor: String,
}

impl Reaction {
    pub fn new(emoji: impl Into<String>, reactor: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            emoji: emoji.into(),
            reactor: reactor.into(),
        }
    }
}

/// A distinct emoji with its occurrence count, for display as a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionGroup {
    pub emoji: String,
    pub count: usize,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, assigned at send time
    pub id: MessageId,
    /// Text content; may be empty for attachment-only messages
    pub text: String,
    /// Who sent it
    pub sender: Sender,
    /// Instant the message was created (display strings are derived at
    /// render time, never stored)
    pub sent_at: DateTime<Utc>,
    /// Delivery status; `None` for incoming messages and unknown labels
    pub status: Option<DeliveryStatus>,
    /// Whether the message is pinned in its conversation
    pub is_pinned: bool,
    /// One-level reply reference to another message in the conversation
    pub reply_to: Option<MessageId>,
    /// Flat reaction list, aggregated for display by
    /// [`Message::aggregate_reactions`]
    pub reactions: Vec<Reaction>,
    /// Optional file attachment (image / video / document)
    pub attachment: Option<Attachment>,
    /// Optional recorded voice clip
    pub voice: Option<AudioClip>,
}

impl Message {
    /// Create an outgoing message (from the local participant).
    pub fn outgoing(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::Me,
            sent_at: Utc::now(),
            status: Some(DeliveryStatus::Sent),
            is_pinned: false,
            reply_to: None,
            reactions: Vec::new(),
            attachment: None,
            voice: None,
        }
    }

    /// Create an incoming message from a peer. Incoming messages carry no
    /// delivery status.
    pub fn incoming(from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender: Sender::Peer(from.into()),
            sent_at: Utc::now(),
            status: None,
            is_pinned: false,
            reply_to: None,
            reactions: Vec::new(),
            attachment: None,
            voice: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    pub fn with_voice(mut self, clip: AudioClip) -> Self {
        self.voice = Some(clip);
        self
    }

    pub fn with_reply_to(mut self, target: MessageId) -> Self {
        self.reply_to = Some(target);
        self
    }

    /// Advance the delivery status through the allowed-transition table.
    ///
    /// Re-applying the current status is an idempotent no-op. Backward
    /// moves and transitions on incoming messages are rejected.
    pub fn advance_status(&mut self, next: DeliveryStatus) -> ChatResult<()> {
        match self.status {
            None => Err(ChatError::InvalidStatusTransition(format!(
                "incoming message {} carries no delivery status",
                self.id
            ))),
            Some(current) if current == next => Ok(()),
            Some(current) if current.can_advance(next) => {
                self.status = Some(next);
                Ok(())
            }
            Some(current) => Err(ChatError::InvalidStatusTransition(format!(
                "{} -> {}",
                current.label(),
                next.label()
            ))),
        }
    }

    /// Group reactions by emoji for display.
    ///
    /// Each distinct emoji appears once with its occurrence count, in
    /// first-encountered order.
    pub fn aggregate_reactions(&self) -> Vec<ReactionGroup> {
        let mut groups: Vec<ReactionGroup> = Vec::new();
        for reaction in &self.reactions {
            if let Some(group) = groups.iter_mut().find(|g| g.emoji == reaction.emoji) {
                group.count += 1;
            } else {
                groups.push(ReactionGroup {
                    emoji: reaction.emoji.clone(),
                    count: 1,
                });
            }
        }
        groups
    }

    /// Find an existing reaction with this emoji from this reactor.
    pub fn reaction_from(&self, reactor: &str, emoji: &str) -> Option<&Reaction> {
        self.reactions
            .iter()
            .find(|r| r.reactor == reactor && r.emoji == emoji)
    }

    /// A short preview of the message for conversation rows.
    pub fn preview(&self) -> String {
        if !self.text.trim().is_empty() {
            return self.text.clone();
        }
        if let Some(ref attachment) = self.attachment {
            return attachment.kind.preview_label().to_string();
        }
        if self.voice.is_some() {
            return "🎤 Voice message".to_string();
        }
        String::new()
    }

    /// Format the creation instant as a relative time string.
    ///
    /// Returns strings like "Just now", "5m ago", "2h ago", "Yesterday".
    pub fn relative_time(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let diff_secs = (now - self.sent_at.timestamp_millis()) / 1000;

        if diff_secs < 60 {
            "Just now".to_string()
        } else if diff_secs < 3600 {
            format!("{}m ago", diff_secs / 60)
        } else if diff_secs < 86400 {
            format!("{}h ago", diff_secs / 3600)
        } else if diff_secs < 172800 {
            "Yesterday".to_string()
        } else {
            format!("{}d ago", diff_secs / 86400)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::AttachmentKind;

    #[test]
    fn test_outgoing_message_defaults() {
        let msg = Message::outgoing("Hello, world!");
        assert_eq!(msg.text, "Hello, world!");
        assert!(msg.sender.is_me());
        assert_eq!(msg.status, Some(DeliveryStatus::Sent));
        assert!(!msg.is_pinned);
        assert!(msg.reactions.is_empty());
    }

    #[test]
    fn test_incoming_message_has_no_status() {
        let msg = Message::incoming("Alice", "Hi!");
        assert_eq!(msg.sender, Sender::Peer("Alice".to_string()));
        assert_eq!(msg.status, None);
    }

    #[test]
    fn test_status_advances_forward() {
        let mut msg = Message::outgoing("Hi");
        msg.advance_status(DeliveryStatus::Delivered).unwrap();
        assert_eq!(msg.status, Some(DeliveryStatus::Delivered));
        msg.advance_status(DeliveryStatus::Read).unwrap();
        assert_eq!(msg.status, Some(DeliveryStatus::Read));
    }

    #[test]
    fn test_read_ack_may_skip_delivered() {
        let mut msg = Message::outgoing("Hi");
        msg.advance_status(DeliveryStatus::Read).unwrap();
        assert_eq!(msg.status, Some(DeliveryStatus::Read));
    }

    #[test]
    fn test_status_never_moves_backward() {
        let mut msg = Message::outgoing("Hi");
        msg.advance_status(DeliveryStatus::Read).unwrap();
        let err = msg.advance_status(DeliveryStatus::Delivered).unwrap_err();
        assert!(matches!(err, ChatError::InvalidStatusTransition(_)));
        assert_eq!(msg.status, Some(DeliveryStatus::Read));
    }

    #[test]
    fn test_status_reapply_is_idempotent() {
        let mut msg = Message::outgoing("Hi");
        msg.advance_status(DeliveryStatus::Delivered).unwrap();
        msg.advance_status(DeliveryStatus::Delivered).unwrap();
        assert_eq!(msg.status, Some(DeliveryStatus::Delivered));
    }

    #[test]
    fn test_incoming_message_rejects_status() {
        let mut msg = Message::incoming("Alice", "Hi");
        assert!(msg.advance_status(DeliveryStatus::Delivered).is_err());
    }

    #[test]
    fn test_from_label_total_over_unknown() {
        assert_eq!(DeliveryStatus::from_label("sent"), Some(DeliveryStatus::Sent));
        assert_eq!(
            DeliveryStatus::from_label("delivered"),
            Some(DeliveryStatus::Delivered)
        );
        assert_eq!(DeliveryStatus::from_label("read"), Some(DeliveryStatus::Read));
        assert_eq!(DeliveryStatus::from_label("queued"), None);
        assert_eq!(DeliveryStatus::from_label(""), None);
    }

    #[test]
    fn test_aggregate_reactions_groups_in_first_encountered_order() {
        let mut msg = Message::incoming("Alice", "Great news!");
        msg.reactions.push(Reaction::new("👍", "Bob"));
        msg.reactions.push(Reaction::new("👍", "Carol"));
        msg.reactions.push(Reaction::new("❤️", "Dave"));

        let groups = msg.aggregate_reactions();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].emoji, "👍");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].emoji, "❤️");
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn test_aggregate_reactions_empty() {
        let msg = Message::outgoing("Hi");
        assert!(msg.aggregate_reactions().is_empty());
    }

    #[test]
    fn test_preview_prefers_text_over_attachment() {
        let attachment = Attachment::from_file("syllabus.pdf", vec![1, 2, 3]);
        assert_eq!(attachment.kind, AttachmentKind::Document);

        let with_caption = Message::outgoing("Here you go").with_attachment(attachment.clone());
        assert_eq!(with_caption.preview(), "Here you go");

        let bare = Message::outgoing("").with_attachment(attachment);
        assert_eq!(bare.preview(), "📄 Document");
    }

    #[test]
    fn test_message_serde_roundtrip() {
        let msg = Message::outgoing("Serialize me").with_reply_to(MessageId::new());
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
