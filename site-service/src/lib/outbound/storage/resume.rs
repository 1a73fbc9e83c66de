use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::StoredResume;
use crate::domain::application::ports::ResumeStorage;

/// URL prefix under which the router serves the resume directory.
pub const PUBLIC_PREFIX: &str = "/uploads/resumes";

/// Stores uploaded resumes as plain files in a local directory.
///
/// Never overwrites: storing under a name that already exists fails.
pub struct DiskResumeStorage {
    dir: PathBuf,
}

impl DiskResumeStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ResumeStorage for DiskResumeStorage {
    async fn store(
        &self,
        file_name: &str,
        contents: &[u8],
    ) -> Result<StoredResume, ApplicationError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ApplicationError::StorageError(e.to_string()))?;

        let path = self.dir.join(file_name);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| ApplicationError::StorageError(e.to_string()))?;

        let written = async {
            file.write_all(contents).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = written {
            drop(file);
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                tracing::warn!(
                    path = %path.display(),
                    error = %cleanup,
                    "Failed to remove partial resume"
                );
            }
            return Err(ApplicationError::StorageError(e.to_string()));
        }

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Resume stored");

        Ok(StoredResume {
            file_name: file_name.to_string(),
            public_path: format!("{PUBLIC_PREFIX}/{file_name}"),
        })
    }

    async fn remove(&self, resume: &StoredResume) -> Result<(), ApplicationError> {
        tokio::fs::remove_file(self.dir.join(&resume.file_name))
            .await
            .map_err(|e| ApplicationError::StorageError(e.to_string()))
    }
}
