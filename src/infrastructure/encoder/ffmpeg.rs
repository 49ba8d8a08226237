use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use super::{EncodeOutcome, Encoder};
use crate::config::settings::AppConfig;
use crate::editing::filters::EncodeJob;
use crate::infrastructure::process;

#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    bin: String,
    timeout: Option<Duration>,
}

impl FfmpegEncoder {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bin: config.ffmpeg_bin.clone(),
            timeout: config.process_timeout,
        }
    }
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    async fn encode(&self, job: &EncodeJob) -> anyhow::Result<EncodeOutcome> {
        info!(output = %job.output.display(), "🎬 Running FFmpeg");

        let out = process::run(&self.bin, job.to_args(), self.timeout).await?;

        if out.success {
            Ok(EncodeOutcome::Succeeded {
                output: job.output.clone(),
            })
        } else {
            Ok(EncodeOutcome::Failed {
                diagnostic: out.stderr,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::editing::filters::FilterPipeline;
    use std::path::PathBuf;

    fn job() -> EncodeJob {
        EncodeJob {
            video: PathBuf::from("clip.mp4"),
            music: PathBuf::from("song.mp3"),
            subtitles: PathBuf::from("reel.ass"),
            filters: FilterPipeline::compose("", "", "scale=1280:720"),
            output: PathBuf::from("reel.mp4"),
        }
    }

    fn encoder(bin: &str) -> FfmpegEncoder {
        let mut config = AppConfig::rooted_at("/tmp/reelcraft-test");
        config.ffmpeg_bin = bin.to_string();
        FfmpegEncoder::new(&config)
    }

    #[tokio::test]
    async fn zero_exit_succeeds_with_output_path() {
        let outcome = encoder("true").encode(&job()).await.unwrap();
        assert_eq!(
            outcome,
            EncodeOutcome::Succeeded {
                output: PathBuf::from("reel.mp4")
            }
        );
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_failed_outcome() {
        let outcome = encoder("false").encode(&job()).await.unwrap();
        assert!(matches!(outcome, EncodeOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn missing_encoder_is_an_error() {
        assert!(encoder("reelcraft-no-such-ffmpeg").encode(&job()).await.is_err());
    }
}
