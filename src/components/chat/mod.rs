//! Messaging components

mod chat_list;
mod chat_settings;
mod emoji_picker;
mod group_modal;
mod message_bubble;
mod message_input;
mod new_chat_modal;

pub use chat_list::ChatList;
pub use chat_settings::ChatSettings;
pub use group_modal::GroupModal;
pub use message_bubble::MessageBubble;
pub use message_input::MessageInput;
pub use new_chat_modal::NewChatModal;
