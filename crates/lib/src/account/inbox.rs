//! FIFO message inbox

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::errors::AccountError;

/// A message waiting in an inbox.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Login of the account that sent the message
    pub sender: String,
    /// Non-blank message text
    pub body: String,
}

/// Unread messages of one account, oldest first.
///
/// Messages are consumed destructively; there is no peek.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageInbox {
    messages: VecDeque<Message>,
}

impl MessageInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the tail of the queue.
    ///
    /// Fails with [`AccountError::EmptyMessage`] when `body` is blank.
    pub fn deliver(&mut self, sender: &str, body: &str) -> Result<(), AccountError> {
        if body.trim().is_empty() {
            return Err(AccountError::EmptyMessage);
        }
        self.messages.push_back(Message {
            sender: sender.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    /// Remove and return the oldest message.
    pub fn consume_next(&mut self) -> Option<Message> {
        self.messages.pop_front()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
