use anyhow::Result;
use axum::extract::multipart::Field;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

use crate::common::upload::stream_to_file;
use crate::config::settings::AppConfig;

/// URL prefix the output directory is served under.
pub const OUTPUT_ROUTE: &str = "/static/outputs";

#[derive(Debug, Clone)]
pub struct StagedUpload {
    pub path: PathBuf,
    /// Sanitised client-side name.
    pub file_name: String,
}

impl StagedUpload {
    pub fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
    }
}

/// Job-scoped upload staging plus the shared output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            upload_dir: config.upload_dir.clone(),
            output_dir: config.output_dir.clone(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn job_upload_dir(&self, job_id: Uuid) -> PathBuf {
        self.upload_dir.join(job_id.simple().to_string())
    }

    /// Stream one multipart file field into this job's upload directory.
    pub async fn stage(&self, job_id: Uuid, role: &str, field: Field<'_>) -> Result<StagedUpload> {
        let file_name = sanitize_filename(field.file_name().unwrap_or_default());
        let dir = self.job_upload_dir(job_id);
        tokio::fs::create_dir_all(&dir).await?;

        let path = dir.join(format!("{role}_{file_name}"));
        let bytes = stream_to_file(field, path.clone()).await?;
        info!(job = %job_id, role, bytes, "⬆️ Staged upload {}", file_name);

        Ok(StagedUpload { path, file_name })
    }

    pub async fn discard_uploads(&self, job_id: Uuid) -> std::io::Result<()> {
        match tokio::fs::remove_dir_all(self.job_upload_dir(job_id)).await {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    pub fn output_url(&self, path: &Path) -> Option<String> {
        let name = path.strip_prefix(&self.output_dir).ok()?.to_str()?;
        Some(format!("{}/{}", OUTPUT_ROUTE, name))
    }
}

/// Reduce a client-supplied name to something safe to join onto a directory.
///
/// Separators and whitespace become `_`, anything outside `[A-Za-z0-9._-]` is
/// dropped and leading/trailing dots and underscores are stripped.
pub fn sanitize_filename(name: &str) -> String {
    sanitize_component(name).unwrap_or_else(|| "upload".to_string())
}

pub fn sanitize_component(name: &str) -> Option<String> {
    let spaced = name.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
