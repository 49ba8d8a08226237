use async_trait::async_trait;
use std::path::Path;

use crate::editing::captions::DialogueSegment;

pub mod whisper;

pub use whisper::WhisperTranscriber;

/// Speech-to-text over a video's dialogue track.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, video: &Path) -> anyhow::Result<Vec<DialogueSegment>>;
}
