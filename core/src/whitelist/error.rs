//! Error types for body list operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors while bootstrapping or loading the body list
#[derive(Debug, Error)]
pub enum WhitelistError {
    #[error("missing spectre body list file at {path}")]
    Missing { path: PathBuf },

    #[error("failed to read spectre body list file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create plugin directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write default spectre body list to {path}")]
    WriteDefault {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WhitelistError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Missing { path }
            | Self::Read { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteDefault { path, .. } => path,
        }
    }
}
