//! Beat-synced motion effects.
//!
//! Only the `glitch` style moves. The zoom currently oscillates over a fixed
//! window at the start of the reel; beat timestamps are accepted so callers
//! don't change when the effect starts keying off individual beats.

/// Seconds from the start of the music track.
pub type BeatTimestamp = f64;

const ZOOM_WINDOW_SECS: u32 = 5;
const ZOOM_DEPTH: f64 = 0.05;
const ZOOM_RATE_HZ: u32 = 10;

/// Open set of style tags. The tag is kept verbatim for naming outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    Glitch,
    Plain(String),
}

impl Style {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "glitch" => Style::Glitch,
            other => Style::Plain(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Style::Glitch => "glitch",
            Style::Plain(tag) => tag,
        }
    }

    pub fn is_beat_synced(&self) -> bool {
        matches!(self, Style::Glitch)
    }
}

pub fn zoom_expression() -> String {
    format!(
        "if(between(t,0,{ZOOM_WINDOW_SECS}),1+{ZOOM_DEPTH}*sin(2*PI*t*{ZOOM_RATE_HZ}),1)"
    )
}

/// Filter expression for `style`, or an empty string when the style has no motion.
pub fn build_effect(beats: &[BeatTimestamp], style: &Style, width: u32, height: u32) -> String {
    if !style.is_beat_synced() {
        return String::new();
    }

    tracing::debug!(beats = beats.len(), "building zoom effect");

    format!(
        "zoompan=z='{}':d=1:x='iw/2-(iw/zoom/2)':y='ih/2-(ih/zoom/2)':s={width}x{height}",
        zoom_expression()
    )
}
