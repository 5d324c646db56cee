// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probing
//!
//! Reads the host environment once and boils it down to
//! [`DeviceCapabilities`]. Every sub-check fails closed: an unavailable or
//! failing host API yields the lower-capability answer, never an error.

pub mod detector;
pub mod host;
pub mod native;
pub mod patterns;
pub mod snapshot;

pub use detector::*;
pub use host::{ConnectionType, GraphicsContext, HostEnvironment};
pub use native::NativeHost;
pub use snapshot::{GraphicsSnapshot, HostSnapshot};
