use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::application::ports::StagingError;
use crate::domain::{DEFAULT_FILENAME, Document};
use crate::presentation::config::StorageSettings;

const DIR_PREFIX: &str = "pdftext-";

/// Root directory under which every request gets its own transient directory.
#[derive(Debug, Clone)]
pub struct ScratchStore {
    root: PathBuf,
}

impl ScratchStore {
    pub fn new(root: PathBuf) -> Result<Self, StagingError> {
        std::fs::create_dir_all(&root).map_err(StagingError::Root)?;
        Ok(Self { root })
    }

    pub fn from_settings(settings: &StorageSettings) -> Result<Self, StagingError> {
        match &settings.scratch_dir {
            Some(dir) => Self::new(PathBuf::from(dir)),
            None => Self::new(std::env::temp_dir()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `data` to `<root>/<unique dir>/upload.pdf`.
    ///
    /// The client's filename never reaches the disk. The directory lives exactly
    /// as long as the returned [`StagedFile`].
    pub async fn stage(
        &self,
        document: &Document,
        data: &[u8],
    ) -> Result<StagedFile, StagingError> {
        let dir = tempfile::Builder::new()
            .prefix(DIR_PREFIX)
            .tempdir_in(&self.root)
            .map_err(StagingError::CreateDir)?;

        let path = dir.path().join(DEFAULT_FILENAME);
        tokio::fs::write(&path, data)
            .await
            .map_err(StagingError::Write)?;

        tracing::debug!(
            path = %path.display(),
            filename = %document.filename,
            bytes = data.len(),
            "Upload staged"
        );

        Ok(StagedFile { dir, path })
    }
}

/// An uploaded file on disk. Dropping it removes its directory.
#[derive(Debug)]
pub struct StagedFile {
    dir: TempDir,
    path: PathBuf,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the directory now, logging instead of failing if that is not possible.
    pub fn release(self) {
        let dir_path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!(
                error = %e,
                path = %dir_path.display(),
                "Failed to remove staged upload"
            );
        }
    }
}
