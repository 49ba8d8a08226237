use axum::extract::Multipart;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{ReelParams, ReelResponse};
use super::model::MediaJob;
use crate::common::error::{ReelError, ReelResult};
use crate::infrastructure::storage::StagedUpload;
use crate::state::AppState;

pub const VIDEO_FIELD: &str = "video";
pub const MUSIC_FIELD: &str = "music";

/// Everything pulled out of one form submission.
struct Submission {
    video: Option<StagedUpload>,
    music: Option<StagedUpload>,
    params: ReelParams,
}

pub struct ReelService;

impl ReelService {
    /// Stage the uploads, build the job and run it to completion.
    pub async fn create_reel(state: AppState, multipart: Multipart) -> ReelResult<ReelResponse> {
        let job_id = Uuid::new_v4();
        let started_at = OffsetDateTime::now_utc();

        let submission = match Self::read_submission(&state, job_id, multipart).await {
            Ok(submission) => submission,
            Err(e) => {
                Self::discard(&state, job_id).await;
                return Err(e);
            }
        };

        let (video, music) = match (submission.video, submission.music) {
            (Some(video), Some(music)) => (video, music),
            (video, _) => {
                Self::discard(&state, job_id).await;
                let missing = if video.is_none() { VIDEO_FIELD } else { MUSIC_FIELD };
                return Err(ReelError::InputMissing(missing.to_string()));
            }
        };

        let job = MediaJob::new(
            job_id,
            video.path.clone(),
            music.path.clone(),
            video.stem(),
            state.storage.output_dir(),
            &submission.params,
        );
        info!(
            job = %job.id,
            style = job.style.as_str(),
            mood = job.mood.as_str(),
            resolution = job.resolution.as_str(),
            "🎞️ Reel job created"
        );

        let reel = state.assembler.assemble(&job).await?;
        let (width, height) = job.resolution.dimensions();

        Ok(ReelResponse {
            job_id,
            output_url: state.storage.output_url(&reel.output),
            subtitle_url: state.storage.output_url(&reel.subtitles),
            style: job.style.as_str().to_string(),
            mood: job.mood,
            resolution: job.resolution,
            width,
            height,
            filter_graph: reel.filter_graph,
            caption_count: reel.caption_count,
            beat_count: reel.beat_count,
            started_at,
            finished_at: OffsetDateTime::now_utc(),
        })
    }

    async fn read_submission(
        state: &AppState,
        job_id: Uuid,
        mut multipart: Multipart,
    ) -> ReelResult<Submission> {
        let mut submission = Submission {
            video: None,
            music: None,
            params: ReelParams::default(),
        };

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ReelError::Upload(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                VIDEO_FIELD | MUSIC_FIELD => {
                    // Browsers send an empty part when no file was picked.
                    if field.file_name().is_none_or(str::is_empty) {
                        continue;
                    }
                    let staged = state
                        .storage
                        .stage(job_id, &name, field)
                        .await
                        .map_err(|e| ReelError::Upload(e.to_string()))?;
                    if name == VIDEO_FIELD {
                        submission.video = Some(staged);
                    } else {
                        submission.music = Some(staged);
                    }
                }
                "style" | "mood" | "resolution" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ReelError::Upload(e.to_string()))?;
                    let value = value.trim().to_string();
                    match name.as_str() {
                        "style" => submission.params.style = value,
                        "mood" => submission.params.mood = value,
                        _ => submission.params.resolution = value,
                    }
                }
                _ => {}
            }
        }

        Ok(submission)
    }

    async fn discard(state: &AppState, job_id: Uuid) {
        if let Err(e) = state.storage.discard_uploads(job_id).await {
            warn!(job = %job_id, "Failed to remove staged uploads: {}", e);
        }
    }
}
