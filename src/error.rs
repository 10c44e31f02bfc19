//! Crate error type.
//!
//! Only a small part of the crate can fail: theme lookup, color literal
//! parsing, and the prompt layer (I/O and validation). Rendering and sizing
//! are total: a failed terminal probe degrades to a fixed 80x24 fallback
//! and degenerate sizing inputs are clamped, never surfaced.

use std::io;
use thiserror::Error;

/// Errors surfaced by the fallible parts of the crate.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Theme name not present in the preset registry.
    #[error("theme '{0}' not found")]
    UnknownTheme(String),

    /// Color literal (e.g. a hex string) could not be parsed.
    #[error("invalid color literal '{0}'")]
    InvalidColor(String),

    /// Reading from a prompt's line source failed.
    #[error("prompt input failed")]
    Io(#[from] io::Error),

    /// Prompt input was rejected: validation failure, cancelled selection,
    /// or a required field left empty.
    #[error("{0}")]
    InvalidInput(String),
}
