// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings policy derived from device capabilities

pub mod resolver;
pub mod tier;

pub use resolver::{resolve, OptimalSettings};
pub use tier::CapabilityTier;
