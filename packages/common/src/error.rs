use std::path::PathBuf;
use stylist_style::StyleError;
use thiserror::Error;

/// Failures outside of declaration compilation: reading configuration and
/// writing stylesheets.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {message}")]
    Config { message: String },
}

impl CommonError {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

pub type CommonResult<T> = Result<T, CommonError>;
