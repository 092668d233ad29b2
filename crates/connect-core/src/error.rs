//! Error types for the Connect messaging domain

use thiserror::Error;

/// Main error type for messaging operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// Conversation was not found in the store
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// Message was not found in the specified conversation
    #[error("Message not found: {0}")]
    MessageNotFound(String),

    /// Delivery status may only move forward (sent -> delivered -> read)
    #[error("Invalid status transition: {0}")]
    InvalidStatusTransition(String),

    /// Reaction was not found on the message
    #[error("Reaction not found: {0}")]
    ReactionNotFound(String),
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;
