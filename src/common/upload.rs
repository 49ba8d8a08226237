use anyhow::{Result, anyhow};
use axum::extract::multipart::Field;
use bytes::Bytes;
use futures_util::StreamExt;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::error;

/// Writes an incoming multipart field to a local file chunk by chunk.
pub struct FileUploader {
    path: PathBuf,
    file: File,
    written: u64,
}

impl FileUploader {
    pub async fn new(path: PathBuf) -> Result<Self> {
        let file = File::create(&path)
            .await
            .map_err(|e| anyhow!("Failed to create {}: {}", path.display(), e))?;

        Ok(Self {
            path,
            file,
            written: 0,
        })
    }

    pub async fn write_chunk(&mut self, chunk: Bytes) -> Result<()> {
        self.file.write_all(&chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    pub async fn finish(mut self) -> Result<u64> {
        self.file.flush().await?;
        Ok(self.written)
    }

    /// Drop whatever was written so far.
    pub async fn abort(self) -> Result<()> {
        drop(self.file);
        tokio::fs::remove_file(&self.path)
            .await
            .map_err(|e| anyhow!("Failed to remove partial upload: {}", e))
    }
}

pub async fn stream_to_file(mut field: Field<'_>, path: PathBuf) -> Result<u64> {
    let mut uploader = FileUploader::new(path).await?;

    while let Some(chunk) = field.next().await {
        let chunk = match chunk {
            Ok(c) => c,
            Err(e) => {
                error!("Stream error: {}", e);
                uploader.abort().await?;
                return Err(anyhow!("Stream interrupted"));
            }
        };

        if let Err(e) = uploader.write_chunk(chunk).await {
            error!("Upload error: {}", e);
            uploader.abort().await?;
            return Err(e);
        }
    }

    uploader.finish().await
}
