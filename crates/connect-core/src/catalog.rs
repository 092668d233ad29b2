//! Static catalogs consumed by the messaging UI
//!
//! The emoji category table, the quick-reaction bar contents, and the
//! canned quick-reply list are injected configuration: components receive
//! them as props rather than baking in their own copies.

use serde::{Deserialize, Serialize};

/// The six most commonly used emoji, shown in the hover quick-reaction
/// bar. Independent of the category table.
pub const QUICK_REACTIONS: [&str; 6] = ["👍", "❤️", "😂", "😮", "😢", "🙏"];

/// One tab of the full emoji picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCategory {
    /// Display name for the tab
    pub name: String,
    pub emojis: Vec<String>,
}

/// Category -> emoji table for the full picker, preserving tab order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCatalog {
    categories: Vec<(String, EmojiCategory)>,
}

impl EmojiCatalog {
    pub fn new(categories: Vec<(String, EmojiCategory)>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &EmojiCategory)> {
        self.categories.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn get(&self, key: &str) -> Option<&EmojiCategory> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c)
    }

    /// Key of the first category (the initially selected tab).
    pub fn first_key(&self) -> Option<&str> {
        self.categories.first().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for EmojiCatalog {
    fn default() -> Self {
        fn category(name: &str, emojis: &[&str]) -> EmojiCategory {
            EmojiCategory {
                name: name.to_string(),
                emojis: emojis.iter().map(|e| e.to_string()).collect(),
            }
        }

        Self::new(vec![
            (
                "smileys".to_string(),
                category(
                    "Smileys",
                    &[
                        "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🙂", "😊", "😍", "🤩", "😘",
                        "😎", "🤔", "😴", "😢", "😭", "😤", "😮", "🤯",
                    ],
                ),
            ),
            (
                "gestures".to_string(),
                category(
                    "Gestures",
                    &[
                        "👍", "👎", "👏", "🙌", "🙏", "💪", "🤝", "✌️", "🤞", "👋", "🤙", "👌",
                    ],
                ),
            ),
            (
                "hearts".to_string(),
                category(
                    "Hearts",
                    &["❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "💕", "💖", "💯"],
                ),
            ),
            (
                "objects".to_string(),
                category(
                    "Objects",
                    &[
                        "📚", "📝", "💻", "📱", "🎓", "🏆", "⏰", "📅", "☕", "🍕", "🎉", "🔥",
                    ],
                ),
            ),
        ])
    }
}

/// A canned phrase offered in the composer's quick-reply shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub text: String,
    /// Small icon shown next to the phrase
    pub icon: String,
}

impl QuickReply {
    pub fn new(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
        }
    }
}

/// Default canned quick replies for the composer shelf.
pub fn default_quick_replies() -> Vec<QuickReply> {
    vec![
        QuickReply::new("On my way!", "🏃"),
        QuickReply::new("Sounds good", "👍"),
        QuickReply::new("Can we reschedule?", "📅"),
        QuickReply::new("Thanks so much!", "🙏"),
        QuickReply::new("In the library, come find me", "📚"),
        QuickReply::new("Running 10 minutes late", "⏰"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = EmojiCatalog::default();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.first_key(), Some("smileys"));

        let keys: Vec<&str> = catalog.categories().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["smileys", "gestures", "hearts", "objects"]);

        for (_, category) in catalog.categories() {
            assert!(!category.name.is_empty());
            assert!(!category.emojis.is_empty());
        }
    }

    #[test]
    fn test_get_by_key() {
        let catalog = EmojiCatalog::default();
        assert!(catalog.get("gestures").is_some());
        assert!(catalog.get("vehicles").is_none());
    }

    #[test]
    fn test_quick_reactions_count() {
        assert_eq!(QUICK_REACTIONS.len(), 6);
    }

    #[test]
    fn test_default_quick_replies_nonempty() {
        let replies = default_quick_replies();
        assert!(!replies.is_empty());
        for reply in replies {
            assert!(!reply.text.is_empty());
            assert!(!reply.icon.is_empty());
        }
    }
}
