use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::editing::color::Mood;
use crate::editing::resolution::Resolution;

/// Text fields of the upload form. Missing fields arrive as empty strings;
/// unrecognised tags fall back to their defaults when the job is built.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReelParams {
    pub style: String,
    pub mood: String,
    pub resolution: String,
}

/// Multipart body accepted by `POST /api/v1/reels` (documentation only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ReelUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub video: Vec<u8>,
    #[schema(value_type = String, format = Binary)]
    pub music: Vec<u8>,
    #[schema(example = "glitch")]
    pub style: Option<String>,
    #[schema(example = "cyberpunk")]
    pub mood: Option<String>,
    #[schema(example = "1080p")]
    pub resolution: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReelResponse {
    pub job_id: Uuid,
    pub output_url: Option<String>,
    pub subtitle_url: Option<String>,
    pub style: String,
    pub mood: Mood,
    pub resolution: Resolution,
    pub width: u32,
    pub height: u32,
    pub filter_graph: String,
    pub caption_count: usize,
    pub beat_count: usize,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub finished_at: OffsetDateTime,
}
