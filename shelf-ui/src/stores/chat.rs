//! Chat assistant state store

use crate::display_types::ChatMessage;
use dioxus::prelude::*;

/// State for the chat assistant view.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ChatState {
    /// Transcript in display order, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Whether a send is in flight (renders the typing indicator).
    pub sending: bool,
}
