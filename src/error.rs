//! Error type shared by the fallible parts of the crate.
//!
//! Navigation itself never fails: rejected requests are plain no-ops. Errors
//! only come from construction, configuration, image decoding and the
//! platform fullscreen capability.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipbookError {
    #[error("page set must contain at least one page")]
    EmptyPageSet,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to fetch page {page}: {reason}")]
    Fetch { page: usize, reason: String },
    #[error("fullscreen request failed: {0}")]
    Fullscreen(String),
}

pub type Result<T> = std::result::Result<T, FlipbookError>;
