use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("failed to prepare scratch directory: {0}")]
    Root(#[source] io::Error),
    #[error("failed to create transient directory: {0}")]
    CreateDir(#[source] io::Error),
    #[error("failed to write uploaded file: {0}")]
    Write(#[source] io::Error),
}
