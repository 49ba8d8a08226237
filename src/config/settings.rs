use std::path::PathBuf;
use std::time::Duration;
use crate::config::env::{self, EnvKey};

const DEFAULT_MAX_UPLOAD_MB: usize = 512;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    pub work_dir: PathBuf,
    pub ffmpeg_bin: String,
    pub whisper_bin: String,
    pub whisper_model: String,
    pub beat_bin: String,
    /// Applied to every external process a job starts. `None` waits forever.
    pub process_timeout: Option<Duration>,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn new() -> Self {
        let work_dir = env::get(EnvKey::WorkDir)
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("reelcraft"));

        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 5000),
            upload_dir: PathBuf::from(env::get_or(EnvKey::UploadDir, "uploads")),
            output_dir: PathBuf::from(env::get_or(EnvKey::OutputDir, "static/outputs")),
            work_dir,
            ffmpeg_bin: env::get_or(EnvKey::FfmpegBin, "ffmpeg"),
            whisper_bin: env::get_or(EnvKey::WhisperBin, "whisper"),
            whisper_model: env::get_or(EnvKey::WhisperModel, "base"),
            beat_bin: env::get_or(EnvKey::BeatBin, "aubio"),
            process_timeout: env::get_opt_parsed::<u64>(EnvKey::ProcessTimeoutSecs)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            max_upload_bytes: megabytes(env::get_parsed(EnvKey::MaxUploadMb, DEFAULT_MAX_UPLOAD_MB)),
        }
    }

    /// Configuration rooted in a single directory, used by tests and local tooling.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            server_port: 0,
            upload_dir: root.join("uploads"),
            output_dir: root.join("outputs"),
            work_dir: root.join("work"),
            ffmpeg_bin: "ffmpeg".to_string(),
            whisper_bin: "whisper".to_string(),
            whisper_model: "base".to_string(),
            beat_bin: "aubio".to_string(),
            process_timeout: None,
            max_upload_bytes: megabytes(DEFAULT_MAX_UPLOAD_MB),
        }
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::create_dir_all(&self.work_dir)?;
        Ok(())
    }
}

fn megabytes(mb: usize) -> usize {
    mb.saturating_mul(1024 * 1024)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
