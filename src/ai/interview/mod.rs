//! Per-user interview transcripts and the turn handler that feeds them
//! to a completion provider.
mod core;
mod gateway;
mod models;
mod store;

pub use self::core::Interviewer;
pub use gateway::{CompletionGateway, OpenAiGateway};
pub use models::Transcript;
pub use store::{MemoryStore, TranscriptStore};
