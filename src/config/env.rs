use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    UploadDir,
    OutputDir,
    WorkDir,
    FfmpegBin,
    WhisperBin,
    WhisperModel,
    BeatBin,
    ProcessTimeoutSecs,
    MaxUploadMb,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::UploadDir => "UPLOAD_DIR",
            EnvKey::OutputDir => "OUTPUT_DIR",
            EnvKey::WorkDir => "WORK_DIR",
            EnvKey::FfmpegBin => "FFMPEG_BIN",
            EnvKey::WhisperBin => "WHISPER_BIN",
            EnvKey::WhisperModel => "WHISPER_MODEL",
            EnvKey::BeatBin => "BEAT_BIN",
            EnvKey::ProcessTimeoutSecs => "PROCESS_TIMEOUT_SECS",
            EnvKey::MaxUploadMb => "MAX_UPLOAD_MB",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Like `get_parsed`, but an unset or malformed value means "not configured".
pub fn get_opt_parsed<T: FromStr>(key: EnvKey) -> Option<T> {
    get(key).ok().and_then(|val| val.trim().parse::<T>().ok())
}
