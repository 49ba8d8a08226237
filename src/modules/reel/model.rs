use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::dto::ReelParams;
use crate::editing::color::Mood;
use crate::editing::effects::Style;
use crate::editing::resolution::Resolution;
use crate::infrastructure::storage::local::sanitize_component;

pub const OUTPUT_EXTENSION: &str = "mp4";
pub const SUBTITLE_EXTENSION: &str = "ass";
/// Longest style tag carried into an output file name.
pub const MAX_NAME_TAG_CHARS: usize = 64;

/// One reel request. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct MediaJob {
    pub id: Uuid,
    pub video: PathBuf,
    pub music: PathBuf,
    pub output: PathBuf,
    pub style: Style,
    pub mood: Mood,
    pub resolution: Resolution,
}

impl MediaJob {
    pub fn new(
        id: Uuid,
        video: PathBuf,
        music: PathBuf,
        video_stem: &str,
        output_dir: &Path,
        params: &ReelParams,
    ) -> Self {
        let style = Style::parse(&params.style);
        let resolution = Resolution::parse(&params.resolution);
        let output = output_dir.join(Self::output_file_name(id, video_stem, &style, resolution));

        Self {
            id,
            video,
            music,
            output,
            style,
            mood: Mood::parse(&params.mood),
            resolution,
        }
    }

    /// `reel_<video>_<style>_<resolution>_<job id>.mp4`
    pub fn output_file_name(id: Uuid, video_stem: &str, style: &Style, resolution: Resolution) -> String {
        let stem = sanitize_component(video_stem).unwrap_or_else(|| "video".to_string());
        let style: String = style.as_str().chars().take(MAX_NAME_TAG_CHARS).collect();
        let style = sanitize_component(&style).unwrap_or_else(|| "plain".to_string());
        format!(
            "reel_{}_{}_{}_{}.{}",
            stem,
            style,
            resolution.as_str(),
            id.simple(),
            OUTPUT_EXTENSION
        )
    }

    /// Same stem as the output, `.ass` extension.
    pub fn subtitle_path(&self) -> PathBuf {
        self.output.with_extension(SUBTITLE_EXTENSION)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Uploaded,
    Transcribing,
    BeatDetecting,
    SubtitlesWritten,
    FilterComposed,
    Encoding,
    Succeeded,
    Failed,
}

impl JobStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStage::Uploaded => "uploaded",
            JobStage::Transcribing => "transcribing",
            JobStage::BeatDetecting => "beat_detecting",
            JobStage::SubtitlesWritten => "subtitles_written",
            JobStage::FilterComposed => "filter_composed",
            JobStage::Encoding => "encoding",
            JobStage::Succeeded => "succeeded",
            JobStage::Failed => "failed",
        }
    }

}

impl fmt::Display for JobStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(style: &str, mood: &str, resolution: &str) -> ReelParams {
        ReelParams {
            style: style.to_string(),
            mood: mood.to_string(),
            resolution: resolution.to_string(),
        }
    }

    #[test]
    fn job_resolves_tags_and_names_output() {
        let id = Uuid::nil();
        let job = MediaJob::new(
            id,
            PathBuf::from("up/video_clip.mp4"),
            PathBuf::from("up/music_song.mp3"),
            "clip",
            Path::new("out"),
            &params("glitch", "CyberPunk", "4k"),
        );
        assert_eq!(job.style, Style::Glitch);
        assert_eq!(job.mood, Mood::Cyberpunk);
        assert_eq!(job.resolution, Resolution::Uhd4k);
        assert_eq!(
            job.output,
            PathBuf::from("out/reel_clip_glitch_4k_00000000000000000000000000000000.mp4")
        );
        assert_eq!(
            job.subtitle_path(),
            PathBuf::from("out/reel_clip_glitch_4k_00000000000000000000000000000000.ass")
        );
    }

    #[test]
    fn unknown_tags_degrade_and_name_with_fallback() {
        let job = MediaJob::new(
            Uuid::nil(),
            PathBuf::from("v.mp4"),
            PathBuf::from("m.mp3"),
            "v",
            Path::new("out"),
            &params("../../evil style", "sepia", "8k"),
        );
        assert_eq!(job.mood, Mood::None);
        assert_eq!(job.resolution, Resolution::P1080);
        let name = job.output.file_name().unwrap().to_str().unwrap().to_string();
        assert_eq!(name, "reel_v_evil_style_1080p_00000000000000000000000000000000.mp4");
    }

    #[test]
    fn identical_requests_never_share_an_output() {
        let p = params("heroic", "none", "720p");
        let a = MediaJob::new(Uuid::new_v4(), "v.mp4".into(), "m.mp3".into(), "v", Path::new("o"), &p);
        let b = MediaJob::new(Uuid::new_v4(), "v.mp4".into(), "m.mp3".into(), "v", Path::new("o"), &p);
        assert_ne!(a.output, b.output);
        assert_ne!(a.subtitle_path(), b.subtitle_path());
    }

    #[test]
    fn long_style_is_cut_short_in_the_file_name() {
        let style = "x".repeat(200);
        let job = MediaJob::new(
            Uuid::nil(),
            PathBuf::from("v.mp4"),
            PathBuf::from("m.mp3"),
            "v",
            Path::new("out"),
            &params(&style, "", ""),
        );
        assert_eq!(job.style.as_str(), style);
        let name = job.output.file_name().unwrap().to_str().unwrap().to_string();
        assert_eq!(
            name,
            format!("reel_v_{}_1080p_00000000000000000000000000000000.mp4", "x".repeat(MAX_NAME_TAG_CHARS))
        );
    }
}
