//! Conversation abstraction for chat sessions
//!
//! A [`Conversation`] is a named channel (direct or group) with the
//! bookkeeping the chat list needs: presence, last-message preview,
//! unread count, mute/archive flags, and group membership.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique conversation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(Ulid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Direct (1:1) vs group conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    Direct,
    Group,
}

impl ConversationKind {
    pub fn label(self) -> &'static str {
        match self {
            ConversationKind::Direct => "direct",
            ConversationKind::Group => "group",
        }
    }
}

/// Presence of the other party (or group activity).
///
/// Total over arbitrary input: anything unrecognized is `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Typing,
    Offline,
}

impl Presence {
    /// Parse a presence label, defaulting to `Offline` for unknown values.
    pub fn from_label(label: &str) -> Self {
        match label {
            "online" => Presence::Online,
            "typing" => Presence::Typing,
            _ => Presence::Offline,
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Offline
    }
}

/// Maximum preview length for conversation rows.
const PREVIEW_LEN: usize = 60;

/// A named channel containing an ordered list of messages.
///
/// The conversation tracks list-level state only; the messages themselves
/// are owned by the [`ChatStore`](crate::store::ChatStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    /// Short avatar text (initials or an emoji)
    pub avatar: String,
    pub kind: ConversationKind,
    pub presence: Presence,
    /// Preview of the most recent message, truncated for display
    pub last_message: Option<String>,
    /// Instant of the most recent activity
    pub last_activity: Option<DateTime<Utc>>,
    /// When the other party was last seen (direct chats)
    pub last_seen: Option<DateTime<Utc>>,
    /// Messages arrived since the conversation was last opened
    pub unread_count: u32,
    pub is_muted: bool,
    pub is_archived: bool,
    /// Member display names; empty for direct chats
    pub members: Vec<String>,
}

impl Conversation {
    /// Create a direct (1:1) conversation with a contact.
    pub fn direct(name: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = initials(&name);
        Self {
            id: ConversationId::new(),
            name,
            avatar,
            kind: ConversationKind::Direct,
            presence: Presence::Offline,
            last_message: None,
            last_activity: None,
            last_seen: None,
            unread_count: 0,
            is_muted: false,
            is_archived: false,
            members: Vec::new(),
        }
    }

    /// Create a group conversation with the given members.
    pub fn group(name: impl Into<String>, members: Vec<String>) -> Self {
        let name = name.into();
        let avatar = initials(&name);
        Self {
            id: ConversationId::new(),
            name,
            avatar,
            kind: ConversationKind::Group,
            presence: Presence::Offline,
            last_message: None,
            last_activity: None,
            last_seen: None,
            unread_count: 0,
            is_muted: false,
            is_archived: false,
            members,
        }
    }

    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    /// Record a message arriving from a peer: update the preview and bump
    /// the unread counter. The owner resets the counter via
    /// [`Conversation::mark_read`] when the conversation is opened.
    pub fn record_incoming(&mut self, preview: &str) {
        self.last_message = Some(truncate(preview, PREVIEW_LEN));
        self.last_activity = Some(Utc::now());
        self.unread_count += 1;
    }

    /// Record a message we sent: update the preview without touching the
    /// unread counter.
    pub fn record_outgoing(&mut self, preview: &str) {
        self.last_message = Some(truncate(preview, PREVIEW_LEN));
        self.last_activity = Some(Utc::now());
    }

    /// Reset the unread counter (conversation opened).
    pub fn mark_read(&mut self) {
        self.unread_count = 0;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.is_archived = archived;
    }

    /// Case-insensitive substring match against the conversation name or
    /// the last-message preview.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        if self.name.to_lowercase().contains(&query) {
            return true;
        }
        self.last_message
            .as_ref()
            .map(|m| m.to_lowercase().contains(&query))
            .unwrap_or(false)
    }
}

/// Derive avatar initials from a display name ("Study Group" -> "SG").
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_conversation_defaults() {
        let convo = Conversation::direct("Alice Chen");
        assert_eq!(convo.kind, ConversationKind::Direct);
        assert_eq!(convo.avatar, "AC");
        assert_eq!(convo.unread_count, 0);
        assert!(convo.members.is_empty());
        assert!(!convo.is_muted);
    }

    #[test]
    fn test_group_conversation_members() {
        let convo = Conversation::group(
            "Study Group",
            vec!["Alice".to_string(), "Bob".to_string()],
        );
        assert_eq!(convo.kind, ConversationKind::Group);
        assert_eq!(convo.members.len(), 2);
        assert_eq!(convo.avatar, "SG");
    }

    #[test]
    fn test_record_incoming_bumps_unread() {
        let mut convo = Conversation::direct("Alice");
        convo.record_incoming("Hey!");
        convo.record_incoming("Are you there?");
        assert_eq!(convo.unread_count, 2);
        assert_eq!(convo.last_message.as_deref(), Some("Are you there?"));

        convo.mark_read();
        assert_eq!(convo.unread_count, 0);
    }

    #[test]
    fn test_record_outgoing_leaves_unread_alone() {
        let mut convo = Conversation::direct("Alice");
        convo.record_incoming("Hey!");
        convo.record_outgoing("Hi back");
        assert_eq!(convo.unread_count, 1);
        assert_eq!(convo.last_message.as_deref(), Some("Hi back"));
    }

    #[test]
    fn test_preview_truncation() {
        let mut convo = Conversation::direct("Alice");
        let long = "x".repeat(200);
        convo.record_incoming(&long);
        let preview = convo.last_message.unwrap();
        assert!(preview.chars().count() <= PREVIEW_LEN + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_presence_from_label_defaults_offline() {
        assert_eq!(Presence::from_label("online"), Presence::Online);
        assert_eq!(Presence::from_label("typing"), Presence::Typing);
        assert_eq!(Presence::from_label("offline"), Presence::Offline);
        assert_eq!(Presence::from_label("away"), Presence::Offline);
        assert_eq!(Presence::from_label(""), Presence::Offline);
    }

    #[test]
    fn test_matches_query_name_or_preview() {
        let mut convo = Conversation::direct("Alice Chen");
        convo.record_incoming("See you at the library");

        assert!(convo.matches_query("ali"));
        assert!(convo.matches_query("LIBRARY"));
        assert!(convo.matches_query(""));
        assert!(!convo.matches_query("bob"));
    }

    #[test]
    fn test_toggle_mute() {
        let mut convo = Conversation::direct("Alice");
        assert!(convo.toggle_mute());
        assert!(convo.is_muted);
        assert!(!convo.toggle_mute());
        assert!(!convo.is_muted);
    }
}
