use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use super::BeatTracker;
use crate::config::settings::AppConfig;
use crate::editing::effects::BeatTimestamp;
use crate::infrastructure::process;

/// `aubio beat <file>` prints one beat time in seconds per line.
#[derive(Debug, Clone)]
pub struct AubioBeatTracker {
    bin: String,
    timeout: Option<Duration>,
}

impl AubioBeatTracker {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bin: config.beat_bin.clone(),
            timeout: config.process_timeout,
        }
    }
}

pub fn parse_beat_lines(stdout: &str) -> Vec<BeatTimestamp> {
    let mut beats: Vec<BeatTimestamp> = stdout
        .lines()
        .filter_map(|line| line.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .collect();
    beats.sort_by(f64::total_cmp);
    beats
}

#[async_trait]
impl BeatTracker for AubioBeatTracker {
    async fn detect_beats(&self, music: &Path) -> Result<Vec<BeatTimestamp>> {
        let out = process::run(&self.bin, [Path::new("beat"), music], self.timeout).await?;
        if !out.success {
            bail!("aubio exited with {:?}: {}", out.code, out.stderr.trim());
        }
        Ok(parse_beat_lines(&out.stdout))
    }
}
