//! Chat domain model
//!
//! High-level abstractions the messaging UI renders and mutates:
//!
//! - [`Message`]: one contribution to a conversation, with delivery
//!   status, reactions, pin flag, and reply reference
//! - [`Conversation`]: a named direct or group channel with chat-list
//!   bookkeeping (presence, preview, unread count)
//! - [`roster`]: filter + search composition for the conversation list
//!
//! The model is display-oriented: timestamps are real instants with
//! relative strings derived at render time, and all enum parsing is total
//! so unknown labels from foreign data degrade gracefully instead of
//! failing.

mod conversation;
mod message;
pub mod roster;

pub use conversation::{Conversation, ConversationId, ConversationKind, Presence};
pub use message::{DeliveryStatus, Message, MessageId, Reaction, ReactionGroup, Sender};
pub use roster::{filter_conversations, ChatFilter};
