use std::io;

/// Errors that can occur while driving the build pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Gradle wrapper not found (gradlew/gradlew.bat)")]
    WrapperMissing,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for fabricator operations
pub type Result<T> = std::result::Result<T, Error>;
