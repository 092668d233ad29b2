//! Owning state layer for conversations and messages
//!
//! [`ChatStore`] is the composition root's model: it owns the
//! conversation set and each conversation's append-only message list,
//! and routes every intent the components emit (send, react, pin,
//! reply, select) through one mutation surface.
//!
//! # Data flow
//!
//! ```text
//! Composer ── send intent (text / attachment / voice) ──▶ ChatStore
//!    ▲                                                       │
//!    │                                        append Message, update preview
//!    │                                                       ▼
//! MessageBubble ◀── render ── conversation's message list ───┘
//!    │
//!    └── react / pin / reply intents ──▶ ChatStore ──▶ state mutated
//! ```
//!
//! Messages render in list order; the store performs no timestamp-based
//! resort. Delivery-status moves go through the allowed-transition table
//! on [`Message`]; illegal jumps are rejected, never applied.

use std::collections::HashMap;

use crate::chat::{Conversation, ConversationId, DeliveryStatus, Message, MessageId, Reaction};
use crate::composer::{Attachment, AudioClip};
use crate::error::{ChatError, ChatResult};

/// In-memory owner of all conversation state.
#[derive(Debug, Default)]
pub struct ChatStore {
    conversations: Vec<Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
    selected: Option<ConversationId>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- conversations -----------------------------------------------------

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn conversation_mut(&mut self, id: ConversationId) -> ChatResult<&mut Conversation> {
        self.conversations
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChatError::ConversationNotFound(id.to_string()))
    }

    /// Add an existing conversation (seed data, incoming invites).
    pub fn add_conversation(&mut self, conversation: Conversation) -> ConversationId {
        let id = conversation.id;
        self.messages.entry(id).or_default();
        self.conversations.push(conversation);
        id
    }

    /// Create a direct conversation with a contact.
    pub fn create_direct(&mut self, name: &str) -> ConversationId {
        tracing::info!(contact = name, "creating direct conversation");
        self.add_conversation(Conversation::direct(name))
    }

    /// Create a group conversation with the chosen participant list.
    pub fn create_group(&mut self, name: &str, members: Vec<String>) -> ConversationId {
        tracing::info!(group = name, members = members.len(), "creating group");
        self.add_conversation(Conversation::group(name, members))
    }

    // --- selection ---------------------------------------------------------

    pub fn selected(&self) -> Option<ConversationId> {
        self.selected
    }

    /// Open a conversation: select it and reset its unread counter.
    pub fn select(&mut self, id: ConversationId) -> ChatResult<()> {
        let conversation = self.conversation_mut(id)?;
        conversation.mark_read();
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // --- messages ----------------------------------------------------------

    /// Messages of a conversation, in append order.
    pub fn messages(&self, id: ConversationId) -> &[Message] {
        self.messages.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn message(&self, conversation: ConversationId, id: MessageId) -> Option<&Message> {
        self.messages(conversation).iter().find(|m| m.id == id)
    }

    fn message_mut(
        &mut self,
        conversation: ConversationId,
        id: MessageId,
    ) -> ChatResult<&mut Message> {
        self.messages
            .get_mut(&conversation)
            .and_then(|list| list.iter_mut().find(|m| m.id == id))
            .ok_or_else(|| ChatError::MessageNotFound(id.to_string()))
    }

    fn append(&mut self, conversation: ConversationId, message: Message) -> ChatResult<MessageId> {
        // Ensure the conversation exists before touching the message list
        self.conversation_mut(conversation)?;
        let id = message.id;
        let preview = message.preview();
        if message.sender.is_me() {
            self.conversation_mut(conversation)?.record_outgoing(&preview);
        } else {
            let selected = self.selected == Some(conversation);
            let convo = self.conversation_mut(conversation)?;
            convo.record_incoming(&preview);
            // Unread only counts while the conversation is not open
            if selected {
                convo.mark_read();
            }
        }
        self.messages.entry(conversation).or_default().push(message);
        Ok(id)
    }

    /// Optimistically append an outgoing text message.
    pub fn send_text(
        &mut self,
        conversation: ConversationId,
        text: &str,
        reply_to: Option<MessageId>,
    ) -> ChatResult<MessageId> {
        let mut message = Message::outgoing(text);
        message.reply_to = reply_to;
        tracing::debug!(%conversation, message = %message.id, "sending text");
        self.append(conversation, message)
    }

    /// Send a classified attachment, optionally with a caption.
    pub fn send_attachment(
        &mut self,
        conversation: ConversationId,
        attachment: Attachment,
        caption: &str,
    ) -> ChatResult<MessageId> {
        tracing::debug!(
            %conversation,
            kind = attachment.kind.label(),
            size = attachment.size(),
            "sending attachment"
        );
        let message = Message::outgoing(caption).with_attachment(attachment);
        self.append(conversation, message)
    }

    /// Send a finalized voice recording.
    pub fn send_voice(
        &mut self,
        conversation: ConversationId,
        clip: AudioClip,
    ) -> ChatResult<MessageId> {
        tracing::debug!(%conversation, bytes = clip.bytes.len(), "sending voice clip");
        let message = Message::outgoing("").with_voice(clip);
        self.append(conversation, message)
    }

    /// Append a message arriving from a peer.
    pub fn receive_text(
        &mut self,
        conversation: ConversationId,
        from: &str,
        text: &str,
    ) -> ChatResult<MessageId> {
        self.append(conversation, Message::incoming(from, text))
    }

    // --- delivery status ---------------------------------------------------

    pub fn mark_delivered(
        &mut self,
        conversation: ConversationId,
        message: MessageId,
    ) -> ChatResult<()> {
        self.message_mut(conversation, message)?
            .advance_status(DeliveryStatus::Delivered)
    }

    pub fn mark_read(
        &mut self,
        conversation: ConversationId,
        message: MessageId,
    ) -> ChatResult<()> {
        self.message_mut(conversation, message)?
            .advance_status(DeliveryStatus::Read)
    }

    // --- reactions, pins, mute ---------------------------------------------

    /// Toggle a reaction: a second invocation with the same emoji from
    /// the same reactor removes it. Returns `true` when the reaction was
    /// added.
    pub fn toggle_reaction(
        &mut self,
        conversation: ConversationId,
        message: MessageId,
        emoji: &str,
        reactor: &str,
    ) -> ChatResult<bool> {
        let msg = self.message_mut(conversation, message)?;
        if let Some(existing) = msg.reaction_from(reactor, emoji) {
            let id = existing.id.clone();
            msg.reactions.retain(|r| r.id != id);
            Ok(false)
        } else {
            msg.reactions.push(Reaction::new(emoji, reactor));
            Ok(true)
        }
    }

    /// Remove a reaction by its id (the optional targeted-removal
    /// contract).
    pub fn remove_reaction(
        &mut self,
        conversation: ConversationId,
        message: MessageId,
        reaction_id: &str,
    ) -> ChatResult<()> {
        let msg = self.message_mut(conversation, message)?;
        let before = msg.reactions.len();
        msg.reactions.retain(|r| r.id != reaction_id);
        if msg.reactions.len() == before {
            return Err(ChatError::ReactionNotFound(reaction_id.to_string()));
        }
        Ok(())
    }

    /// Toggle the pin flag; returns the new state.
    pub fn toggle_pin(
        &mut self,
        conversation: ConversationId,
        message: MessageId,
    ) -> ChatResult<bool> {
        let msg = self.message_mut(conversation, message)?;
        msg.is_pinned = !msg.is_pinned;
        Ok(msg.is_pinned)
    }

    pub fn toggle_mute(&mut self, conversation: ConversationId) -> ChatResult<bool> {
        Ok(self.conversation_mut(conversation)?.toggle_mute())
    }

    pub fn set_archived(
        &mut self,
        conversation: ConversationId,
        archived: bool,
    ) -> ChatResult<()> {
        self.conversation_mut(conversation)?.set_archived(archived);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;
    use crate::composer::AttachmentKind;

    fn store_with_chat() -> (ChatStore, ConversationId) {
        let mut store = ChatStore::new();
        let id = store.create_direct("Alice");
        (store, id)
    }

    #[test]
    fn test_send_text_appends_optimistically() {
        let (mut store, chat) = store_with_chat();
        let id = store.send_text(chat, "Hello!", None).unwrap();

        let messages = store.messages(chat);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, id);
        assert_eq!(messages[0].status, Some(DeliveryStatus::Sent));
        assert_eq!(
            store.conversation(chat).unwrap().last_message.as_deref(),
            Some("Hello!")
        );
    }

    #[test]
    fn test_send_to_unknown_conversation_fails() {
        let mut store = ChatStore::new();
        let err = store
            .send_text(ConversationId::new(), "hi", None)
            .unwrap_err();
        assert!(matches!(err, ChatError::ConversationNotFound(_)));
    }

    #[test]
    fn test_receive_bumps_unread_unless_selected() {
        let (mut store, chat) = store_with_chat();

        store.receive_text(chat, "Alice", "Hey").unwrap();
        assert_eq!(store.conversation(chat).unwrap().unread_count, 1);

        store.select(chat).unwrap();
        assert_eq!(store.conversation(chat).unwrap().unread_count, 0);

        // Arrivals while the conversation is open do not accumulate
        store.receive_text(chat, "Alice", "Still there?").unwrap();
        assert_eq!(store.conversation(chat).unwrap().unread_count, 0);
    }

    #[test]
    fn test_messages_keep_append_order() {
        let (mut store, chat) = store_with_chat();
        store.send_text(chat, "one", None).unwrap();
        store.receive_text(chat, "Alice", "two").unwrap();
        store.send_text(chat, "three", None).unwrap();

        let texts: Vec<&str> = store.messages(chat).iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_delivery_progression() {
        let (mut store, chat) = store_with_chat();
        let id = store.send_text(chat, "ping", None).unwrap();

        store.mark_delivered(chat, id).unwrap();
        assert_eq!(
            store.message(chat, id).unwrap().status,
            Some(DeliveryStatus::Delivered)
        );

        store.mark_read(chat, id).unwrap();
        assert_eq!(
            store.message(chat, id).unwrap().status,
            Some(DeliveryStatus::Read)
        );

        // Backward move is rejected and state is untouched
        assert!(store.mark_delivered(chat, id).is_err());
        assert_eq!(
            store.message(chat, id).unwrap().status,
            Some(DeliveryStatus::Read)
        );
    }

    #[test]
    fn test_reaction_toggle_roundtrip() {
        let (mut store, chat) = store_with_chat();
        let id = store.receive_text(chat, "Alice", "Big news!").unwrap();

        assert!(store.toggle_reaction(chat, id, "🎉", "You").unwrap());
        assert_eq!(store.message(chat, id).unwrap().reactions.len(), 1);

        // Same emoji, same reactor: removed
        assert!(!store.toggle_reaction(chat, id, "🎉", "You").unwrap());
        assert!(store.message(chat, id).unwrap().reactions.is_empty());
    }

    #[test]
    fn test_same_emoji_from_two_reactors_aggregates() {
        let (mut store, chat) = store_with_chat();
        let id = store.receive_text(chat, "Alice", "Passed the exam!").unwrap();

        store.toggle_reaction(chat, id, "👍", "You").unwrap();
        store.toggle_reaction(chat, id, "👍", "Bob").unwrap();
        store.toggle_reaction(chat, id, "❤️", "Carol").unwrap();

        let groups = store.message(chat, id).unwrap().aggregate_reactions();
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].emoji.as_str(), groups[0].count), ("👍", 2));
        assert_eq!((groups[1].emoji.as_str(), groups[1].count), ("❤️", 1));
    }

    #[test]
    fn test_remove_reaction_by_id() {
        let (mut store, chat) = store_with_chat();
        let id = store.receive_text(chat, "Alice", "hi").unwrap();
        store.toggle_reaction(chat, id, "👍", "You").unwrap();

        let reaction_id = store.message(chat, id).unwrap().reactions[0].id.clone();
        store.remove_reaction(chat, id, &reaction_id).unwrap();
        assert!(store.message(chat, id).unwrap().reactions.is_empty());

        let err = store.remove_reaction(chat, id, &reaction_id).unwrap_err();
        assert!(matches!(err, ChatError::ReactionNotFound(_)));
    }

    #[test]
    fn test_toggle_pin() {
        let (mut store, chat) = store_with_chat();
        let id = store.send_text(chat, "important", None).unwrap();

        assert!(store.toggle_pin(chat, id).unwrap());
        assert!(store.message(chat, id).unwrap().is_pinned);
        assert!(!store.toggle_pin(chat, id).unwrap());
    }

    #[test]
    fn test_attachment_message_preview() {
        let (mut store, chat) = store_with_chat();
        let attachment = Attachment::from_file("whiteboard.png", vec![1, 2, 3]);
        assert_eq!(attachment.kind, AttachmentKind::Image);

        store.send_attachment(chat, attachment, "").unwrap();
        assert_eq!(
            store.conversation(chat).unwrap().last_message.as_deref(),
            Some("📷 Photo")
        );
    }

    #[test]
    fn test_voice_message() {
        let (mut store, chat) = store_with_chat();
        let clip = AudioClip {
            mime: "audio/pcm".to_string(),
            bytes: vec![1, 2, 3],
        };
        let id = store.send_voice(chat, clip).unwrap();

        let message = store.message(chat, id).unwrap();
        assert!(message.voice.is_some());
        assert!(message.text.is_empty());
        assert_eq!(message.sender, Sender::Me);
        assert_eq!(
            store.conversation(chat).unwrap().last_message.as_deref(),
            Some("🎤 Voice message")
        );
    }

    #[test]
    fn test_reply_reference() {
        let (mut store, chat) = store_with_chat();
        let original = store.receive_text(chat, "Alice", "Free at 3?").unwrap();
        let reply = store.send_text(chat, "Yes!", Some(original)).unwrap();

        assert_eq!(store.message(chat, reply).unwrap().reply_to, Some(original));
    }

    #[test]
    fn test_create_group() {
        let mut store = ChatStore::new();
        let id = store.create_group(
            "Robotics Club",
            vec!["Dana".to_string(), "Eli".to_string()],
        );
        let convo = store.conversation(id).unwrap();
        assert_eq!(convo.members.len(), 2);
        assert!(store.messages(id).is_empty());
    }
}
