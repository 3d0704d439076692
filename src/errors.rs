//! Errors

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileGridError>;

#[derive(Error,Debug)]
pub enum TileGridError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not output to {} - {source}", .path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("could not encode PNG for {} - {source}", .path.display())]
    Encode { path: PathBuf, #[source] source: image::ImageError },

    #[error("could not read image {} - {source}", .path.display())]
    Decode { path: PathBuf, #[source] source: image::ImageError },

    #[error("font error: {0}")]
    Font(String),

    #[error("invalid font: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}
