//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`FlipbookError`] covers all failure modes:
//! - Atlas frame lookups past the end of the frame list
//! - Animation lookups by unknown name
//! - Frame resolution against an invalid atlas or with no usable clip
//!
//! All failures are local and recoverable; nothing here is fatal to the host
//! process. Configuration problems (empty frame lists, non-positive fps,
//! negative speed) are not errors at all: they are clamped to a safe default
//! and logged at the call site.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, FlipbookError>`.

use thiserror::Error;

/// The main error type for the sprite animation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlipbookError {
    // ========================================================================
    // Atlas Errors
    // ========================================================================
    /// Frame index outside the atlas's frame list.
    #[error("Frame index out of bounds: {index} (frame count: {count})")]
    FrameOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of frames the atlas holds
        count: usize,
    },

    /// The atlas texture is not loaded, or no frames have been defined.
    #[error("Frame atlas is invalid: texture not loaded or no frames defined")]
    AtlasInvalid,

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// The requested animation name is not registered on the controller.
    #[error("Animation not found: {0}")]
    AnimationNotFound(String),

    /// Frame resolution was attempted with no active animation selected.
    #[error("No active animation")]
    NoActiveAnimation,

    /// The active animation was constructed with an empty frame list.
    #[error("Animation '{0}' has no frames")]
    EmptyAnimation(String),
}

/// Alias for `Result<T, FlipbookError>`.
pub type Result<T> = std::result::Result<T, FlipbookError>;
