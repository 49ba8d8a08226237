use async_trait::async_trait;
use std::path::Path;

use crate::editing::effects::BeatTimestamp;

pub mod aubio;

pub use aubio::AubioBeatTracker;

/// Beat tracking over a music file. Timestamps come back ascending.
#[async_trait]
pub trait BeatTracker: Send + Sync {
    async fn detect_beats(&self, music: &Path) -> anyhow::Result<Vec<BeatTimestamp>>;
}
