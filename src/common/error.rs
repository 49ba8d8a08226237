use axum::http::StatusCode;
use thiserror::Error;

/// Pipeline stage names used when a capability fails.
pub const STAGE_TRANSCRIBE: &str = "transcription";
pub const STAGE_BEATS: &str = "beat detection";
pub const STAGE_ENCODE: &str = "encoding";

#[derive(Debug, Error)]
pub enum ReelError {
    #[error("missing upload: {0}")]
    InputMissing(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("invalid caption timestamp for {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: f64 },

    #[error("{stage} failed: {source:#}")]
    Capability {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("FFmpeg error: {diagnostic}")]
    Encode { diagnostic: String },

    #[error("{stage} timed out after {seconds}s")]
    Timeout { stage: &'static str, seconds: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReelError {
    pub fn capability(stage: &'static str, source: anyhow::Error) -> Self {
        // Timeouts raised inside an adapter keep their own variant.
        match source.downcast::<crate::infrastructure::process::ProcessError>() {
            Ok(crate::infrastructure::process::ProcessError::Timeout { seconds, .. }) => {
                ReelError::Timeout { stage, seconds }
            }
            Ok(other) => ReelError::Capability { stage, source: other.into() },
            Err(source) => ReelError::Capability { stage, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ReelError::InputMissing(_) | ReelError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ReelResult<T> = Result<T, ReelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::process::ProcessError;

    #[test]
    fn process_timeout_maps_to_timeout_variant() {
        let err = ReelError::capability(
            STAGE_BEATS,
            ProcessError::Timeout { program: "aubio".into(), seconds: 30 }.into(),
        );
        assert!(matches!(err, ReelError::Timeout { stage: STAGE_BEATS, seconds: 30 }));
    }

    #[test]
    fn capability_error_keeps_underlying_message() {
        let err = ReelError::capability(STAGE_TRANSCRIBE, anyhow::anyhow!("model not found"));
        assert_eq!(err.to_string(), "transcription failed: model not found");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_input_is_a_client_error() {
        let err = ReelError::InputMissing("music".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
