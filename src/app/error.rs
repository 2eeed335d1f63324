use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("could not read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("output file path is not specified in config")]
    ConfigValidation,
    #[error("Error processing file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error walking {0}")]
    Walk(#[source] ignore::Error),
    #[error("Error writing to output file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContextError {
    /// Fatal errors end the run; the rest only skip one input.
    pub fn is_fatal(&self) -> bool {
        match self {
            ContextError::ConfigRead { .. }
            | ContextError::ConfigParse { .. }
            | ContextError::ConfigValidation
            | ContextError::Write { .. } => true,
            ContextError::FileRead { .. } | ContextError::Walk(_) => false,
        }
    }
}
