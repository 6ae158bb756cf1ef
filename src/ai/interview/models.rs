//! The core models for managing a stateful interview with an LLM.
use serde::Serialize;

use crate::openai::{Message, Role};

/// Ordered log of messages for one user. The first message is always
/// the system instruction.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new_with_system(system_message: &str) -> Self {
        Self(vec![Message::new(Role::System, system_message)])
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    /// Drop the oldest messages after the system instruction until
    /// there are at most `max` left. A bound below 2 still keeps the
    /// system instruction and the latest message.
    pub fn truncate_to(&mut self, max: usize) {
        let max = max.max(2);
        if self.0.len() <= max {
            return;
        }
        let excess = self.0.len() - max;
        self.0.drain(1..1 + excess);
    }
}
