use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Resolution {
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "1440p")]
    P1440,
    #[serde(rename = "4k")]
    Uhd4k,
}

impl Resolution {
    /// Exact tag match; every other value falls back to 1080p.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "720p" => Resolution::P720,
            "1440p" => Resolution::P1440,
            "4k" => Resolution::Uhd4k,
            _ => Resolution::P1080,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P720 => "720p",
            Resolution::P1080 => "1080p",
            Resolution::P1440 => "1440p",
            Resolution::Uhd4k => "4k",
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::P720 => (1280, 720),
            Resolution::P1080 => (1920, 1080),
            Resolution::P1440 => (2560, 1440),
            Resolution::Uhd4k => (3840, 2160),
        }
    }

    pub fn scale_pad_filter(&self) -> String {
        let (width, height) = self.dimensions();
        scale_pad_filter(width, height)
    }
}

/// Fit inside `width`x`height` keeping aspect, then letterbox to exactly that size.
pub fn scale_pad_filter(width: u32, height: u32) -> String {
    format!(
        "scale={width}:{height}:force_original_aspect_ratio=decrease,pad={width}:{height}:(ow-iw)/2:(oh-ih)/2"
    )
}
