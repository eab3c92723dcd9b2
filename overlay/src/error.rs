//! Error types for the software overlay

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to write snapshot {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode snapshot {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}
