#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use reelcraft::config::settings::AppConfig;
use reelcraft::editing::captions::DialogueSegment;
use reelcraft::editing::effects::BeatTimestamp;
use reelcraft::editing::filters::EncodeJob;
use reelcraft::infrastructure::beats::BeatTracker;
use reelcraft::infrastructure::encoder::{EncodeOutcome, Encoder};
use reelcraft::infrastructure::speech::Transcriber;
use reelcraft::infrastructure::storage::LocalStorage;
use reelcraft::state::AppState;
use reelcraft::workers::assembler::ReelAssembler;

#[derive(Default)]
pub struct FakeTranscriber {
    pub segments: Vec<DialogueSegment>,
    pub failure: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, _video: &Path) -> anyhow::Result<Vec<DialogueSegment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(msg) => Err(anyhow::anyhow!(msg.clone())),
            None => Ok(self.segments.clone()),
        }
    }
}

#[derive(Default)]
pub struct FakeBeats {
    pub beats: Vec<BeatTimestamp>,
    pub failure: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl BeatTracker for FakeBeats {
    async fn detect_beats(&self, _music: &Path) -> anyhow::Result<Vec<BeatTimestamp>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(msg) => Err(anyhow::anyhow!(msg.clone())),
            None => Ok(self.beats.clone()),
        }
    }
}

/// Records every job; fails with `diagnostic` when set, otherwise writes a stub output.
#[derive(Default)]
pub struct RecordingEncoder {
    pub diagnostic: Option<String>,
    pub jobs: Mutex<Vec<EncodeJob>>,
}

impl RecordingEncoder {
    pub fn calls(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn last_job(&self) -> Option<EncodeJob> {
        self.jobs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Encoder for RecordingEncoder {
    async fn encode(&self, job: &EncodeJob) -> anyhow::Result<EncodeOutcome> {
        self.jobs.lock().unwrap().push(job.clone());
        match &self.diagnostic {
            Some(diagnostic) => Ok(EncodeOutcome::Failed {
                diagnostic: diagnostic.clone(),
            }),
            None => {
                tokio::fs::write(&job.output, b"mp4").await?;
                Ok(EncodeOutcome::Succeeded {
                    output: job.output.clone(),
                })
            }
        }
    }
}

pub struct Harness {
    pub root: tempfile::TempDir,
    pub config: AppConfig,
    pub transcriber: Arc<FakeTranscriber>,
    pub beats: Arc<FakeBeats>,
    pub encoder: Arc<RecordingEncoder>,
}

impl Harness {
    pub fn new(transcriber: FakeTranscriber, beats: FakeBeats, encoder: RecordingEncoder) -> Self {
        let root = tempfile::tempdir().unwrap();
        let config = AppConfig::rooted_at(root.path());
        config.ensure_dirs().unwrap();

        Self {
            root,
            config,
            transcriber: Arc::new(transcriber),
            beats: Arc::new(beats),
            encoder: Arc::new(encoder),
        }
    }

    pub fn assembler(&self) -> ReelAssembler {
        ReelAssembler::new(
            self.transcriber.clone(),
            self.beats.clone(),
            self.encoder.clone(),
        )
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            self.config.clone(),
            LocalStorage::new(&self.config),
            self.assembler(),
        )
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, b"media").unwrap();
        path
    }

    pub fn capability_calls(&self) -> usize {
        self.transcriber.calls.load(Ordering::SeqCst)
            + self.beats.calls.load(Ordering::SeqCst)
            + self.encoder.calls()
    }

    pub fn dir_entries(path: &Path) -> Vec<PathBuf> {
        match std::fs::read_dir(path) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}
