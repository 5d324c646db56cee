// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Sample host snapshot for `--env`

use crate::capabilities::HostSnapshot;
use crate::error::Result;

/// Execute the env-template command
pub fn execute() -> Result<()> {
    println!("{}", render()?);
    Ok(())
}

pub fn render() -> Result<String> {
    Ok(serde_json::to_string_pretty(&HostSnapshot::template())?)
}
