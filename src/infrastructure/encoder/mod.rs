use async_trait::async_trait;
use std::path::PathBuf;

use crate::editing::filters::EncodeJob;

pub mod ffmpeg;

pub use ffmpeg::FfmpegEncoder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeOutcome {
    Succeeded { output: PathBuf },
    /// Non-zero exit; `diagnostic` is the encoder's stderr, untouched.
    Failed { diagnostic: String },
}

/// Runs one encode job to completion. `Err` means the encoder could not be run at all.
#[async_trait]
pub trait Encoder: Send + Sync {
    async fn encode(&self, job: &EncodeJob) -> anyhow::Result<EncodeOutcome>;
}
