//! Connect Core Library
//!
//! Headless messaging domain for the Connect campus collaboration
//! client: conversations, messages, delivery status, reactions, the
//! composer state machine, voice recording, and the owning
//! [`ChatStore`]. The desktop UI renders this model and routes every
//! user intent back through it.
//!
//! ## Overview
//!
//! - Message state is append-only from the UI's perspective; reactions
//!   and pin flags mutate in place through store operations.
//! - Delivery status (`sent -> delivered -> read`) is a real state
//!   machine with an allowed-transition table, not a display label.
//! - Enum parsing is total: unknown status, presence, or filter labels
//!   degrade to safe defaults instead of failing.
//! - The microphone is a trait seam ([`CaptureDevice`]); recording
//!   failures surface as [`RecordingError`] values the UI can show.
//!
//! ## Quick Start
//!
//! ```
//! use connect_core::ChatStore;
//!
//! let mut store = ChatStore::new();
//! let chat = store.create_direct("Alice");
//!
//! let msg = store.send_text(chat, "Lab at 4?", None).unwrap();
//! store.mark_delivered(chat, msg).unwrap();
//! store.toggle_reaction(chat, msg, "👍", "Alice").unwrap();
//!
//! assert_eq!(store.messages(chat).len(), 1);
//! ```

pub mod catalog;
pub mod chat;
pub mod composer;
pub mod error;
pub mod store;

// Re-exports
pub use catalog::{default_quick_replies, EmojiCatalog, EmojiCategory, QuickReply, QUICK_REACTIONS};
pub use chat::{
    filter_conversations, ChatFilter, Conversation, ConversationId, ConversationKind,
    DeliveryStatus, Message, MessageId, Presence, Reaction, ReactionGroup, Sender,
};
pub use composer::{
    Attachment, AttachmentKind, AudioClip, CaptureDevice, Composer, RecordingError,
    SyntheticMicrophone, VoiceRecorder,
};
pub use error::{ChatError, ChatResult};
pub use store::ChatStore;
