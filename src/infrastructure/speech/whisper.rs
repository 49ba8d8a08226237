use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use super::Transcriber;
use crate::config::settings::AppConfig;
use crate::editing::captions::DialogueSegment;
use crate::infrastructure::process;

const AUDIO_FILE: &str = "dialogue.wav";
const TRANSCRIPT_FILE: &str = "dialogue.json";

/// Decodes the dialogue to 16 kHz mono PCM with FFmpeg, then runs the Whisper CLI on it.
#[derive(Debug, Clone)]
pub struct WhisperTranscriber {
    ffmpeg_bin: String,
    whisper_bin: String,
    model: String,
    work_dir: PathBuf,
    timeout: Option<Duration>,
}

#[derive(Deserialize)]
struct WhisperOutput {
    #[serde(default)]
    segments: Vec<WhisperSegment>,
}

#[derive(Deserialize)]
struct WhisperSegment {
    start: f64,
    end: f64,
    text: String,
}

impl WhisperTranscriber {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ffmpeg_bin: config.ffmpeg_bin.clone(),
            whisper_bin: config.whisper_bin.clone(),
            model: config.whisper_model.clone(),
            work_dir: config.work_dir.clone(),
            timeout: config.process_timeout,
        }
    }
}

pub fn parse_transcript(json: &str) -> Result<Vec<DialogueSegment>> {
    let output: WhisperOutput =
        serde_json::from_str(json).context("Whisper produced an unreadable transcript")?;

    Ok(output
        .segments
        .into_iter()
        .map(|seg| DialogueSegment::new(seg.start, seg.end, single_line(&seg.text)))
        .collect())
}

/// Subtitle events are one line each, so line breaks inside a segment become spaces.
fn single_line(text: &str) -> String {
    if !text.contains(['\r', '\n']) {
        return text.to_string();
    }
    text.lines().map(str::trim_end).collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, video: &Path) -> Result<Vec<DialogueSegment>> {
        tokio::fs::create_dir_all(&self.work_dir).await?;

        // Removed on drop, whichever way this function returns.
        let scratch = tempfile::Builder::new()
            .prefix("transcribe-")
            .tempdir_in(&self.work_dir)?;
        let audio = scratch.path().join(AUDIO_FILE);

        let extract = process::run(
            &self.ffmpeg_bin,
            [
                OsStr::new("-y"),
                OsStr::new("-i"),
                video.as_os_str(),
                OsStr::new("-vn"),
                OsStr::new("-acodec"),
                OsStr::new("pcm_s16le"),
                OsStr::new("-ar"),
                OsStr::new("16000"),
                OsStr::new("-ac"),
                OsStr::new("1"),
                audio.as_os_str(),
            ],
            self.timeout,
        )
        .await?;
        if !extract.success {
            bail!("audio extraction failed: {}", extract.stderr.trim());
        }

        info!(model = %self.model, "🗣️ Running Whisper");
        let whisper = process::run(
            &self.whisper_bin,
            [
                audio.as_os_str(),
                OsStr::new("--model"),
                OsStr::new(&self.model),
                OsStr::new("--output_format"),
                OsStr::new("json"),
                OsStr::new("--output_dir"),
                scratch.path().as_os_str(),
            ],
            self.timeout,
        )
        .await?;
        if !whisper.success {
            bail!("whisper exited with {:?}: {}", whisper.code, whisper.stderr.trim());
        }

        let json = tokio::fs::read_to_string(scratch.path().join(TRANSCRIPT_FILE))
            .await
            .context("Whisper did not write a transcript")?;

        parse_transcript(&json)
    }
}
