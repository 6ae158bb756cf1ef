use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;

use super::models::Transcript;
use crate::openai::Message;

/// Keyed storage for interview transcripts.
///
/// Implementations only need to support lazy creation and append-only
/// growth so the in-memory map can be swapped for something
/// persistent without changing the turn handler.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Returns a snapshot of the transcript for `user_id`, creating it
    /// seeded with the system instruction if this user hasn't been
    /// seen before.
    async fn get_or_create(&self, user_id: &str) -> Result<Transcript, Error>;

    /// Appends `message` to an existing transcript. Errors if
    /// `get_or_create` was never called for `user_id`.
    async fn append(&self, user_id: &str, message: Message) -> Result<(), Error>;

    /// Looks up a transcript without creating one.
    async fn find(&self, user_id: &str) -> Result<Option<Transcript>, Error>;
}

/// Process memory backed store. Transcripts live until the process
/// exits; there is no eviction or expiry.
pub struct MemoryStore {
    system_message: String,
    max_messages: Option<usize>,
    transcripts: RwLock<HashMap<String, Transcript>>,
}

impl MemoryStore {
    /// `max_messages` bounds each transcript's length when set. `None`
    /// lets transcripts grow without limit.
    pub fn new(system_message: &str, max_messages: Option<usize>) -> Self {
        Self {
            system_message: system_message.to_string(),
            max_messages,
            transcripts: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TranscriptStore for MemoryStore {
    async fn get_or_create(&self, user_id: &str) -> Result<Transcript, Error> {
        if let Some(transcript) = self.find(user_id).await? {
            return Ok(transcript);
        }

        let mut transcripts = self
            .transcripts
            .write()
            .map_err(|_| anyhow!("Transcript store lock poisoned"))?;
        let transcript = transcripts
            .entry(user_id.to_string())
            .or_insert_with(|| {
                tracing::debug!("Starting new transcript for user {}", user_id);
                Transcript::new_with_system(&self.system_message)
            });

        Ok(transcript.clone())
    }

    async fn append(&self, user_id: &str, message: Message) -> Result<(), Error> {
        let mut transcripts = self
            .transcripts
            .write()
            .map_err(|_| anyhow!("Transcript store lock poisoned"))?;
        let transcript = transcripts
            .get_mut(user_id)
            .ok_or_else(|| anyhow!("No transcript exists for user {}", user_id))?;

        transcript.push(message);
        if let Some(max) = self.max_messages {
            transcript.truncate_to(max);
        }

        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<Transcript>, Error> {
        let transcripts = self
            .transcripts
            .read()
            .map_err(|_| anyhow!("Transcript store lock poisoned"))?;

        Ok(transcripts.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[tokio::test]
    async fn test_get_or_create_seeds_system_message() {
        let store = MemoryStore::new("You are an interviewer.", None);

        let transcript = store.get_or_create("u1").await.unwrap();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role(), Role::System);
        assert_eq!(transcript.messages()[0].content(), "You are an interviewer.");
    }

    #[tokio::test]
    async fn test_get_or_create_returns_existing() {
        let store = MemoryStore::new("system", None);
        store.get_or_create("u1").await.unwrap();
        store
            .append("u1", Message::new(Role::User, "Hello"))
            .await
            .unwrap();

        let transcript = store.get_or_create("u1").await.unwrap();

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].role(), Role::System);
    }

    #[tokio::test]
    async fn test_append_round_trip() {
        let store = MemoryStore::new("system", None);
        store.get_or_create("u1").await.unwrap();
        store
            .append("u1", Message::new(Role::Assistant, "Nice to meet you\n"))
            .await
            .unwrap();

        let transcript = store.find("u1").await.unwrap().unwrap();
        let last = transcript.messages().last().unwrap();

        assert_eq!(last.role(), Role::Assistant);
        assert_eq!(last.content(), "Nice to meet you\n");
    }

    #[tokio::test]
    async fn test_append_unknown_user_errors() {
        let store = MemoryStore::new("system", None);

        let result = store.append("nobody", Message::new(Role::User, "Hi")).await;

        assert!(result.is_err());
        assert!(store.find("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = MemoryStore::new("system", None);
        store.get_or_create("u1").await.unwrap();
        store.get_or_create("u2").await.unwrap();
        store
            .append("u1", Message::new(Role::User, "only for u1"))
            .await
            .unwrap();

        assert_eq!(store.find("u1").await.unwrap().unwrap().len(), 2);
        assert_eq!(store.find("u2").await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_does_not_create() {
        let store = MemoryStore::new("system", None);

        assert!(store.find("u1").await.unwrap().is_none());
        assert!(store.find("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unbounded_by_default() {
        let store = MemoryStore::new("system", None);
        store.get_or_create("u1").await.unwrap();
        for i in 0..200 {
            store
                .append("u1", Message::new(Role::User, &i.to_string()))
                .await
                .unwrap();
        }

        assert_eq!(store.find("u1").await.unwrap().unwrap().len(), 201);
    }

    #[tokio::test]
    async fn test_max_messages_bound() {
        let store = MemoryStore::new("system", Some(3));
        store.get_or_create("u1").await.unwrap();
        for text in ["q1", "a1", "q2", "a2"] {
            store
                .append("u1", Message::new(Role::User, text))
                .await
                .unwrap();
        }

        let transcript = store.find("u1").await.unwrap().unwrap();
        let contents: Vec<&str> = transcript.iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["system", "q2", "a2"]);
    }
}
