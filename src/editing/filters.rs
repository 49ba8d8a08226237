//! Filter pipeline composition and the encode job handed to FFmpeg.

use std::fmt;
use std::path::{Path, PathBuf};

pub const FILTER_SEPARATOR: &str = ",";

const VIDEO_CODEC: &str = "libx264";
const VIDEO_PRESET: &str = "fast";
const VIDEO_CRF: &str = "18";
const AUDIO_CODEC: &str = "aac";

/// Ordered video filters: color grade, then motion effect, then scale/pad.
///
/// Empty stages are skipped; the scale/pad stage is always present and last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPipeline {
    stages: Vec<String>,
}

impl FilterPipeline {
    pub fn compose(color: &str, effect: &str, scale_pad: impl Into<String>) -> Self {
        let mut stages = Vec::with_capacity(3);
        if !color.is_empty() {
            stages.push(color.to_string());
        }
        if !effect.is_empty() {
            stages.push(effect.to_string());
        }
        stages.push(scale_pad.into());
        Self { stages }
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn render(&self) -> String {
        self.stages.join(FILTER_SEPARATOR)
    }
}

impl fmt::Display for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Escape a value for use as a filter option inside a `-vf` graph.
///
/// Two levels: the option parser splits on `:`, the graph parser on `,;[]`.
pub fn escape_filter_value(value: &str) -> String {
    let option_level = value
        .replace('\\', "\\\\")
        .replace(':', "\\:")
        .replace('\'', "\\'");

    let mut out = String::with_capacity(option_level.len());
    for ch in option_level.chars() {
        if matches!(ch, '\\' | '\'' | ',' | ';' | '[' | ']') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Everything one FFmpeg invocation needs: video track from `video`, audio
/// track from `music`, burned-in subtitles, then the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeJob {
    pub video: PathBuf,
    pub music: PathBuf,
    pub subtitles: PathBuf,
    pub filters: FilterPipeline,
    pub output: PathBuf,
}

impl EncodeJob {
    pub fn video_filter(&self) -> String {
        format!(
            "ass={}{}{}",
            escape_filter_value(&self.subtitles.to_string_lossy()),
            FILTER_SEPARATOR,
            self.filters.render()
        )
    }

    pub fn to_args(&self) -> Vec<String> {
        let path = |p: &Path| p.to_string_lossy().into_owned();
        vec![
            "-y".into(),
            "-i".into(),
            path(&self.video),
            "-i".into(),
            path(&self.music),
            "-vf".into(),
            self.video_filter(),
            // Video from the upload, audio only from the music track.
            "-map".into(),
            "0:v".into(),
            "-map".into(),
            "1:a".into(),
            "-c:v".into(),
            VIDEO_CODEC.into(),
            "-preset".into(),
            VIDEO_PRESET.into(),
            "-crf".into(),
            VIDEO_CRF.into(),
            "-c:a".into(),
            AUDIO_CODEC.into(),
            "-shortest".into(),
            path(&self.output),
        ]
    }
}
