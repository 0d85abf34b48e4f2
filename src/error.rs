// src/error.rs

use std::io;

/// Failures surfaced by [`crate::wrap_verses`]. Both carry the HTML library's
/// own diagnostic unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse HTML input: {0}")]
    Parse(#[source] io::Error),

    #[error("failed to render HTML output: {0}")]
    Render(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
