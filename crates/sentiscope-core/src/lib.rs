//! Sentiscope Core
//!
//! Core types and utilities shared across Sentiscope components.
//!
//! This crate provides:
//! - Error types and result handling
//! - Label codes produced by predictors
//! - Extraction of text lines from free-form user input

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{extract_lines, LabelCode};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{extract_lines, LabelCode};
}
