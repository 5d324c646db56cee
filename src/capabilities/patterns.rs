// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Token tables for user-agent and renderer classification

use regex::Regex;
use std::sync::LazyLock;

/// Mobile platform tokens (case-insensitive containment)
pub const MOBILE_TOKENS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Legacy mobile OS versions that mark a device low-end
pub const LEGACY_PLATFORM_TOKENS: &[&str] = &[
    "android 4",
    "android 5",
    "android 6",
    "iphone os 9",
    "iphone os 10",
    "iphone os 11",
    "windows phone",
];

/// Renderer names of GPUs too weak for the terminal shader
pub const WEAK_GPU_TOKENS: &[&str] = &[
    "intel hd graphics 3000",
    "intel hd graphics 4000",
    "adreno 3",
    "mali-4",
    "powervr sgx",
];

static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MOBILE_TOKENS
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    // Built from escaped literals, cannot fail to compile.
    Regex::new(&format!("(?i){}", alternation)).unwrap()
});

/// Whether the user-agent names a mobile platform
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_PATTERN.is_match(user_agent)
}

/// First legacy platform token contained in the user-agent
pub fn legacy_platform_token(user_agent: &str) -> Option<&'static str> {
    first_token(user_agent, LEGACY_PLATFORM_TOKENS)
}

/// First weak GPU token contained in the renderer name
pub fn weak_gpu_token(renderer: &str) -> Option<&'static str> {
    first_token(renderer, WEAK_GPU_TOKENS)
}

fn first_token(haystack: &str, tokens: &[&'static str]) -> Option<&'static str> {
    let haystack = haystack.to_lowercase();
    tokens.iter().copied().find(|token| haystack.contains(token))
}
