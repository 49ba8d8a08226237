//! Dialogue segments → ASS subtitle document.
//!
//! Times are rendered as `H:MM:SS.cc`: hours unpadded and uncapped, centiseconds
//! truncated. Text is escaped so braces never open an override block.

use serde::{Deserialize, Serialize};
use std::path::Path;
use utoipa::ToSchema;

use crate::common::error::{ReelError, ReelResult};

const ASS_HEADER: &str = "[Script Info]
Title: Reel Captions
ScriptType: v4.00+
Collisions: Normal
PlayDepth: 0

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,DejaVu Sans,48,&H00FFFFFF,&H000000FF,&H00000000,&H64000000,0,0,0,0,100,100,0,0,1,3,1,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";

// Absorbs binary representation error (0.29 * 100 = 28.999...) before truncating.
const CENTI_EPSILON: f64 = 1e-7;

/// One transcribed utterance, in seconds from the start of the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DialogueSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl DialogueSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// `None` for negative or non-finite input.
pub fn format_ass_time(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }

    let mut total_centis = (seconds * 100.0 + CENTI_EPSILON).floor() as u64;
    // The nudge must never carry the stamp past the input.
    if total_centis as f64 / 100.0 > seconds {
        total_centis -= 1;
    }
    let centis = total_centis % 100;
    let whole = total_centis / 100;

    Some(format!(
        "{}:{:02}:{:02}.{:02}",
        whole / 3600,
        (whole % 3600) / 60,
        whole % 60,
        centis
    ))
}

/// Parse `H:MM:SS.cc` back to whole centiseconds.
pub fn parse_ass_centis(stamp: &str) -> Option<u64> {
    let (clock, centis) = stamp.split_once('.')?;
    let mut parts = clock.split(':');
    let hours: u64 = parts.next()?.parse().ok()?;
    let minutes: u64 = parts.next()?.parse().ok()?;
    let seconds: u64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || minutes > 59 || seconds > 59 || centis.len() != 2 {
        return None;
    }
    let centis: u64 = centis.parse().ok()?;

    Some((hours * 3600 + minutes * 60 + seconds) * 100 + centis)
}

pub fn parse_ass_time(stamp: &str) -> Option<f64> {
    parse_ass_centis(stamp).map(|centis| centis as f64 / 100.0)
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleEntry {
    pub start: String,
    pub end: String,
    pub text: String,
}

impl SubtitleEntry {
    pub fn to_line(&self) -> String {
        format!(
            "Dialogue: 0,{},{},Default,,0,0,0,,{}",
            self.start, self.end, self.text
        )
    }
}

/// Styled caption document, one entry per segment in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtitleDocument {
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleDocument {
    pub fn build(segments: &[DialogueSegment]) -> ReelResult<Self> {
        let entries = segments
            .iter()
            .map(|segment| {
                let start = format_ass_time(segment.start).ok_or(ReelError::InvalidTimestamp {
                    field: "start",
                    value: segment.start,
                })?;
                let end = format_ass_time(segment.end).ok_or(ReelError::InvalidTimestamp {
                    field: "end",
                    value: segment.end,
                })?;
                Ok(SubtitleEntry {
                    start,
                    end,
                    text: escape_text(&segment.text),
                })
            })
            .collect::<ReelResult<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(ASS_HEADER);
        for entry in &self.entries {
            out.push_str(&entry.to_line());
            out.push('\n');
        }
        out
    }

    /// Writes the rendered document, replacing any existing file.
    pub async fn write_to(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::write(path, self.render()).await
    }
}
