use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The image file could not be read from disk.
    #[error("failed to read image {path}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file was read but could not be decoded.
    #[error("failed to decode image {path}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Checkpoint loading or tensor computation failed.
    #[error("model error")]
    Model(#[from] candle_core::Error),

    /// The label manifest could not be read or parsed.
    #[error("failed to load label manifest {path}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Label table and model head disagree, or other setup inconsistency.
    #[error("configuration: {message}")]
    Config { message: String },

    /// The predicted class index falls outside the label table.
    #[error("class index {index} out of range for label table of length {len}")]
    LabelIndex { index: usize, len: usize },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
