use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Error, Result, anyhow};

use super::gateway::CompletionGateway;
use super::models::Transcript;
use super::store::TranscriptStore;
use crate::openai::{Message, Role};

/// Runs interview turns: records the user's message, asks the
/// completion provider for the next reply given everything said so
/// far, and records the reply.
///
/// Turns for the same user are serialized so messages can't
/// interleave. Turns for different users run concurrently.
pub struct Interviewer {
    store: Arc<dyn TranscriptStore>,
    gateway: Arc<dyn CompletionGateway>,
    turn_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl Interviewer {
    pub fn new(store: Arc<dyn TranscriptStore>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            store,
            gateway,
            turn_locks: Mutex::new(HashMap::new()),
        }
    }

    fn turn_lock(&self, user_id: &str) -> Result<Arc<tokio::sync::Mutex<()>>, Error> {
        let mut locks = self
            .turn_locks
            .lock()
            .map_err(|_| anyhow!("Turn lock registry poisoned"))?;
        Ok(Arc::clone(locks.entry(user_id.to_string()).or_default()))
    }

    /// Runs the next turn of the interview for `user_id` and returns
    /// the assistant's reply.
    ///
    /// The turn runs on its own task so it completes and records the
    /// reply even if the caller stops waiting for it (e.g. the HTTP
    /// client disconnects).
    ///
    /// If the provider fails, the user's message stays in the
    /// transcript without a reply and will be sent again as part of
    /// the history on the next turn.
    pub async fn take_turn(self: &Arc<Self>, user_id: &str, text: &str) -> Result<String, Error> {
        let this = Arc::clone(self);
        let user_id = user_id.to_string();
        let text = text.to_string();

        tokio::spawn(async move { this.run_turn(&user_id, &text).await })
            .await
            .context("Interview turn task failed")?
    }

    async fn run_turn(&self, user_id: &str, text: &str) -> Result<String, Error> {
        let lock = self.turn_lock(user_id)?;
        let _turn = lock.lock().await;

        self.store.get_or_create(user_id).await?;
        self.store
            .append(user_id, Message::new(Role::User, text))
            .await?;
        let transcript = self
            .store
            .find(user_id)
            .await?
            .ok_or_else(|| anyhow!("Transcript for user {} disappeared mid-turn", user_id))?;

        tracing::debug!(
            "Interview turn for user {} with {} messages",
            user_id,
            transcript.len()
        );

        match self.gateway.complete(transcript.messages()).await {
            Ok(reply) => {
                self.store
                    .append(user_id, Message::new(Role::Assistant, &reply))
                    .await?;
                Ok(reply)
            }
            Err(err) => {
                tracing::error!("Completion failed for user {}: {:#}", user_id, err);
                Err(err)
            }
        }
    }

    /// The transcript for `user_id` if they have taken at least one
    /// turn.
    pub async fn transcript(&self, user_id: &str) -> Result<Option<Transcript>, Error> {
        self.store.find(user_id).await
    }
}
