// SPDX-License-Identifier: GPL-3.0-only

//! Errors raised while talking to PokéApi or writing sprites.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered, but not with 200 OK
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    /// The request never got a response (connection, timeout, ...)
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Status code reported by the server, if it got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
