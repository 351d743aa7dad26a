use std::path::PathBuf;

/// Result type for dataset split operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Error types for dataset split operations
#[derive(Debug)]
pub enum SplitError {
    Io(std::io::Error),
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    ReadDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    MoveFailed {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
    DestinationExists(PathBuf),
    InvalidRatio(f64),
    NoExtensions,
    InvalidFileName(PathBuf),
}

impl std::fmt::Display for SplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitError::Io(e) => write!(f, "I/O error: {}", e),
            SplitError::CreateDirFailed { path, source } => {
                write!(f, "Failed to create directory {:?}: {}", path, source)
            }
            SplitError::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {:?}: {}", path, source)
            }
            SplitError::MoveFailed { src, dest, source } => {
                write!(f, "Failed to move {:?} to {:?}: {}", src, dest, source)
            }
            SplitError::DestinationExists(path) => {
                write!(f, "Destination already exists: {:?}", path)
            }
            SplitError::InvalidRatio(ratio) => {
                write!(f, "Train ratio must be within [0.0, 1.0], got {}", ratio)
            }
            SplitError::NoExtensions => write!(f, "No image extensions configured"),
            SplitError::InvalidFileName(path) => write!(f, "Invalid file name: {:?}", path),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e)
            | SplitError::CreateDirFailed { source: e, .. }
            | SplitError::ReadDirFailed { source: e, .. }
            | SplitError::MoveFailed { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(error: std::io::Error) -> Self {
        SplitError::Io(error)
    }
}
