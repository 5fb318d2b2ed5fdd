//! Turns ranked retrieval hits into a chat prompt and asks a chat-completion
//! endpoint to answer it.

pub mod client;
pub mod prompt;

pub use client::{ChatClient, ChatConfig};
pub use prompt::{build_messages, ChatMessage, Role};
