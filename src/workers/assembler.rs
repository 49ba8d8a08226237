//! Turns one `MediaJob` into a finished reel.
//!
//! Strictly sequential: transcribe, detect beats, write subtitles, compose the
//! filter pipeline, encode. One attempt per job; the first failure ends it.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::common::error::{ReelError, ReelResult, STAGE_BEATS, STAGE_ENCODE, STAGE_TRANSCRIBE};
use crate::config::settings::AppConfig;
use crate::editing::captions::SubtitleDocument;
use crate::editing::effects::{BeatTimestamp, build_effect};
use crate::editing::filters::{EncodeJob, FilterPipeline};
use crate::editing::resolution::scale_pad_filter;
use crate::infrastructure::beats::{AubioBeatTracker, BeatTracker};
use crate::infrastructure::encoder::{EncodeOutcome, Encoder, FfmpegEncoder};
use crate::infrastructure::speech::{Transcriber, WhisperTranscriber};
use crate::modules::reel::model::{JobStage, MediaJob};

#[derive(Debug, Clone)]
pub struct AssembledReel {
    pub output: PathBuf,
    pub subtitles: PathBuf,
    pub filter_graph: String,
    pub caption_count: usize,
    pub beat_count: usize,
}

#[derive(Clone)]
pub struct ReelAssembler {
    transcriber: Arc<dyn Transcriber>,
    beats: Arc<dyn BeatTracker>,
    encoder: Arc<dyn Encoder>,
}

impl ReelAssembler {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        beats: Arc<dyn BeatTracker>,
        encoder: Arc<dyn Encoder>,
    ) -> Self {
        Self {
            transcriber,
            beats,
            encoder,
        }
    }

    /// Whisper, aubio and FFmpeg as configured.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(WhisperTranscriber::new(config)),
            Arc::new(AubioBeatTracker::new(config)),
            Arc::new(FfmpegEncoder::new(config)),
        )
    }

    pub async fn assemble(&self, job: &MediaJob) -> ReelResult<AssembledReel> {
        enter(job, JobStage::Uploaded);

        match self.run(job).await {
            Ok(reel) => {
                enter(job, JobStage::Succeeded);
                info!(job = %job.id, output = %reel.output.display(), "✅ Reel generated");
                Ok(reel)
            }
            Err(e) => {
                enter(job, JobStage::Failed);
                error!(job = %job.id, "❌ Reel generation failed: {}", e);
                Err(e)
            }
        }
    }

    async fn run(&self, job: &MediaJob) -> ReelResult<AssembledReel> {
        enter(job, JobStage::Transcribing);
        let segments = self
            .transcriber
            .transcribe(&job.video)
            .await
            .map_err(|e| ReelError::capability(STAGE_TRANSCRIBE, e))?;
        info!(job = %job.id, segments = segments.len(), "Transcribed dialogue");

        enter(job, JobStage::BeatDetecting);
        let beats = self
            .beats
            .detect_beats(&job.music)
            .await
            .map_err(|e| ReelError::capability(STAGE_BEATS, e))?;
        info!(job = %job.id, beats = beats.len(), "Detected beats");

        let subtitles = job.subtitle_path();
        let document = SubtitleDocument::build(&segments)?;
        if let Some(parent) = subtitles.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        document.write_to(&subtitles).await?;
        enter(job, JobStage::SubtitlesWritten);

        let encode_job = compose_encode_job(job, &beats, subtitles.clone());
        let filter_graph = encode_job.video_filter();
        enter(job, JobStage::FilterComposed);

        enter(job, JobStage::Encoding);
        let outcome = self
            .encoder
            .encode(&encode_job)
            .await
            .map_err(|e| ReelError::capability(STAGE_ENCODE, e))?;

        match outcome {
            EncodeOutcome::Succeeded { output } => Ok(AssembledReel {
                output,
                subtitles,
                filter_graph,
                caption_count: document.len(),
                beat_count: beats.len(),
            }),
            EncodeOutcome::Failed { diagnostic } => Err(ReelError::Encode { diagnostic }),
        }
    }
}

fn enter(job: &MediaJob, stage: JobStage) {
    info!(job = %job.id, stage = %stage, "➡️ Reel job stage");
}

/// Color grade, beat effect and letterbox for `job`, plus the subtitle overlay.
pub fn compose_encode_job(job: &MediaJob, beats: &[BeatTimestamp], subtitles: PathBuf) -> EncodeJob {
    let (width, height) = job.resolution.dimensions();
    let effect = build_effect(beats, &job.style, width, height);

    EncodeJob {
        video: job.video.clone(),
        music: job.music.clone(),
        subtitles,
        filters: FilterPipeline::compose(job.mood.filter(), &effect, scale_pad_filter(width, height)),
        output: job.output.clone(),
    }
}
