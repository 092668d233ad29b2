//! Composer state
//!
//! The composer collects the user's next contribution to the active
//! conversation and hands it to the owner as one of four intents:
//! send-text, attach-file, record-and-send-voice, or quick-reply-insert.
//!
//! Text sends are gated on a non-blank draft; attachments and voice
//! clips are independent send channels that bypass the gate entirely.
//! The draft is cleared by the composer itself, through the single
//! consuming [`Composer::take_draft`] call.

mod attachment;
mod recorder;

pub use attachment::{Attachment, AttachmentKind};
pub use recorder::{AudioClip, CaptureDevice, RecordingError, SyntheticMicrophone, VoiceRecorder};

use crate::catalog::QuickReply;
use crate::chat::MessageId;

/// Pending-input state for the message composer.
///
/// Pure state, no side effects: the owning view wires it to the actual
/// input widgets and callbacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    input: String,
    quick_replies_open: bool,
    attach_menu_open: bool,
    reply_to: Option<MessageId>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-form mutation of the pending text buffer. No validation here;
    /// gating happens at send time.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the send control is enabled: the trimmed draft is
    /// non-empty.
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Consume the draft for sending.
    ///
    /// Returns the trimmed text and clears the buffer; `None` when the
    /// draft is blank (the send path simply does nothing).
    pub fn take_draft(&mut self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let text = trimmed.to_string();
        self.input.clear();
        Some(text)
    }

    /// Mark a message as the reply target for the next send.
    pub fn set_reply_target(&mut self, target: MessageId) {
        self.reply_to = Some(target);
    }

    pub fn reply_target(&self) -> Option<MessageId> {
        self.reply_to
    }

    pub fn clear_reply_target(&mut self) {
        self.reply_to = None;
    }

    /// Consume the reply target along with a send.
    pub fn take_reply_target(&mut self) -> Option<MessageId> {
        self.reply_to.take()
    }

    // --- quick-reply shelf -------------------------------------------------

    pub fn quick_replies_open(&self) -> bool {
        self.quick_replies_open
    }

    pub fn toggle_quick_replies(&mut self) {
        self.quick_replies_open = !self.quick_replies_open;
        if self.quick_replies_open {
            self.attach_menu_open = false;
        }
    }

    /// Selecting a canned phrase sets the buffer and closes the shelf.
    /// It never auto-sends.
    pub fn apply_quick_reply(&mut self, reply: &QuickReply) {
        self.input = reply.text.clone();
        self.quick_replies_open = false;
    }

    // --- attachment menu ---------------------------------------------------

    pub fn attach_menu_open(&self) -> bool {
        self.attach_menu_open
    }

    pub fn toggle_attach_menu(&mut self) {
        self.attach_menu_open = !self.attach_menu_open;
        if self.attach_menu_open {
            self.quick_replies_open = false;
        }
    }

    /// Collapse every transient disclosure (menus and shelf). Synchronous
    /// local state collapse, no cleanup obligations.
    pub fn close_menus(&mut self) {
        self.attach_menu_open = false;
        self.quick_replies_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_gating_on_trimmed_input() {
        let mut composer = Composer::new();
        assert!(!composer.can_send());

        composer.set_input("   ");
        assert!(!composer.can_send());

        composer.set_input("  hello  ");
        assert!(composer.can_send());
    }

    #[test]
    fn test_take_draft_trims_and_clears() {
        let mut composer = Composer::new();
        composer.set_input("  hello there  ");

        assert_eq!(composer.take_draft().as_deref(), Some("hello there"));
        assert_eq!(composer.input(), "");
        assert!(composer.take_draft().is_none());
    }

    #[test]
    fn test_blank_draft_yields_nothing() {
        let mut composer = Composer::new();
        composer.set_input(" \n\t ");
        assert!(composer.take_draft().is_none());
    }

    #[test]
    fn test_quick_reply_sets_buffer_without_sending() {
        let mut composer = Composer::new();
        composer.toggle_quick_replies();
        assert!(composer.quick_replies_open());

        let reply = QuickReply::new("On my way!", "🏃");
        composer.apply_quick_reply(&reply);

        assert_eq!(composer.input(), "On my way!");
        assert!(!composer.quick_replies_open());
        // Buffer is set, not sent: still available for editing
        assert!(composer.can_send());
    }

    #[test]
    fn test_disclosures_are_mutually_exclusive() {
        let mut composer = Composer::new();
        composer.toggle_attach_menu();
        assert!(composer.attach_menu_open());

        composer.toggle_quick_replies();
        assert!(composer.quick_replies_open());
        assert!(!composer.attach_menu_open());

        composer.close_menus();
        assert!(!composer.quick_replies_open());
        assert!(!composer.attach_menu_open());
    }

    #[test]
    fn test_reply_target_consumed_with_send() {
        let mut composer = Composer::new();
        let target = MessageId::new();
        composer.set_reply_target(target);
        composer.set_input("replying");

        assert_eq!(composer.reply_target(), Some(target));
        let _ = composer.take_draft();
        assert_eq!(composer.take_reply_target(), Some(target));
        assert_eq!(composer.reply_target(), None);
    }
}
