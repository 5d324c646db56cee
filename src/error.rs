// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Vitrine
//!
//! Two layers: `ProbeError` is what a host environment reports back to the
//! capability probe and never escapes it; `VitrineError` covers everything
//! a caller can actually observe (config IO, CLI input, session waits).

use thiserror::Error;

/// Main error type for Vitrine operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session lifecycle errors
    #[error("Session error: {0}")]
    Session(String),
}

/// Failure of a single host sub-check.
///
/// The probe maps every variant to the conservative capability value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The host does not expose the requested API at all
    #[error("Host API unavailable: {0}")]
    Unavailable(&'static str),

    /// Creating a hardware-accelerated context failed
    #[error("Graphics context creation failed: {0}")]
    GraphicsContext(String),

    /// The debug renderer extension misbehaved
    #[error("Renderer extension error: {0}")]
    Extension(String),

    /// Any other host-side failure
    #[error("Host error: {0}")]
    Host(String),
}

/// Result type alias for Vitrine operations
pub type Result<T> = std::result::Result<T, VitrineError>;
