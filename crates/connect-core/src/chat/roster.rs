//! Conversation list filtering and search
//!
//! The chat list narrows the conversation set in two composed steps:
//! a type/unread filter first, then a case-insensitive substring search
//! over name or last-message preview (AND semantics).

use serde::{Deserialize, Serialize};

use super::conversation::{Conversation, ConversationKind};

/// Filter applied to the conversation list before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatFilter {
    All,
    Unread,
    Direct,
    Group,
}

impl ChatFilter {
    /// All filters, in pill display order.
    pub const ALL_FILTERS: [ChatFilter; 4] = [
        ChatFilter::All,
        ChatFilter::Unread,
        ChatFilter::Direct,
        ChatFilter::Group,
    ];

    /// Parse a filter label, defaulting to `All` for unknown values.
    pub fn from_label(label: &str) -> Self {
        match label {
            "unread" => ChatFilter::Unread,
            "direct" => ChatFilter::Direct,
            "group" => ChatFilter::Group,
            _ => ChatFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatFilter::All => "All",
            ChatFilter::Unread => "Unread",
            ChatFilter::Direct => "Direct",
            ChatFilter::Group => "Groups",
        }
    }

    fn accepts(self, conversation: &Conversation) -> bool {
        match self {
            ChatFilter::All => true,
            ChatFilter::Unread => conversation.unread_count > 0,
            ChatFilter::Direct => conversation.kind == ConversationKind::Direct,
            ChatFilter::Group => conversation.kind == ConversationKind::Group,
        }
    }
}

/// Apply filter then search, preserving input order.
///
/// An empty result is a valid outcome; the list renders an empty scroll
/// region rather than an error.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    filter: ChatFilter,
    query: &str,
) -> Vec<&'a Conversation> {
    let query = query.trim();
    conversations
        .iter()
        .filter(|c| filter.accepts(c))
        .filter(|c| c.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Conversation> {
        let mut alice = Conversation::direct("Alice");
        alice.record_outgoing("See you tomorrow");

        let mut study = Conversation::group(
            "Study Group",
            vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()],
        );
        study.record_incoming("Who has the notes?");
        study.record_incoming("Meeting at 5pm");
        study.record_incoming("Bring the lab report");

        vec![alice, study]
    }

    #[test]
    fn test_unread_filter_selects_only_unread() {
        let chats = sample();
        let result = filter_conversations(&chats, ChatFilter::Unread, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Study Group");
    }

    #[test]
    fn test_all_filter_with_search() {
        let chats = sample();
        let result = filter_conversations(&chats, ChatFilter::All, "ali");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Alice");
    }

    #[test]
    fn test_search_matches_last_message() {
        let chats = sample();
        let result = filter_conversations(&chats, ChatFilter::All, "lab report");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Study Group");
    }

    #[test]
    fn test_filter_and_search_compose_with_and_semantics() {
        let chats = sample();
        // "Alice" matches the search but is not unread
        let result = filter_conversations(&chats, ChatFilter::Unread, "alice");
        assert!(result.is_empty());
    }

    #[test]
    fn test_kind_filters() {
        let chats = sample();
        let direct = filter_conversations(&chats, ChatFilter::Direct, "");
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].name, "Alice");

        let groups = filter_conversations(&chats, ChatFilter::Group, "");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Study Group");
    }

    #[test]
    fn test_empty_result_is_fine() {
        let chats = sample();
        let result = filter_conversations(&chats, ChatFilter::All, "nobody here");
        assert!(result.is_empty());
    }

    #[test]
    fn test_from_label_defaults_to_all() {
        assert_eq!(ChatFilter::from_label("unread"), ChatFilter::Unread);
        assert_eq!(ChatFilter::from_label("direct"), ChatFilter::Direct);
        assert_eq!(ChatFilter::from_label("group"), ChatFilter::Group);
        assert_eq!(ChatFilter::from_label("starred"), ChatFilter::All);
    }
}
