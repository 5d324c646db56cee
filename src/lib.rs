// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Vitrine - adaptive performance engine for an effects-heavy portfolio site.
//!
//! This crate exposes the shared runtime used by:
//! - the `vitrine` CLI (`src/main.rs`)
//! - embedders that feed recorded host signals from a browser bridge
//!
//! Architecture highlights:
//! - `capabilities`: one-shot, fail-closed device probe behind `HostEnvironment`
//! - `policy`: pure capability → settings table and tier classification
//! - `session`: init-once snapshot with a ready signal
//! - `effects`: per-feature gate choosing full, degraded or static rendering
//! - `scheduler`: throttled and idle-deferred callbacks

pub mod capabilities;
pub mod cli;
pub mod commands;
pub mod config;
pub mod effects;
pub mod error;
pub mod policy;
pub mod scheduler;
pub mod session;

pub use error::{Result, VitrineError};
