use std::io;

use thiserror::Error;

/// Errors from poster composition and rasterization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("blob outlines need at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("blob radius must be positive, got {0}")]
    InvalidRadius(f64),
    #[error("wobble must be non-negative, got {0}")]
    NegativeWobble(f64),
    #[error("a poster needs at least one layer")]
    EmptyPoster,
    #[error("palette must hold at least one tone")]
    EmptyPalette,
    #[error("font data could not be parsed: {0}")]
    FontLoad(String),
    #[error("png encoding failed: {0}")]
    PngEncode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
