// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;

use vitrine::capabilities::DeviceCapabilities;
use vitrine::policy::{resolve, CapabilityTier, OptimalSettings};

fn caps(
    is_low_end: bool,
    is_mobile: bool,
    has_good_gpu: bool,
    reduced_motion: bool,
) -> DeviceCapabilities {
    DeviceCapabilities {
        is_low_end,
        is_mobile,
        has_good_gpu,
        reduced_motion,
    }
}

fn any_capabilities() -> impl Strategy<Value = DeviceCapabilities> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(l, m, g, r)| caps(l, m, g, r))
}

proptest! {
    #[test]
    fn prop_resolve_is_deterministic(capabilities in any_capabilities()) {
        prop_assert_eq!(resolve(&capabilities), resolve(&capabilities));
        prop_assert_eq!(
            OptimalSettings::from(&capabilities),
            OptimalSettings::resolve(&capabilities)
        );
    }

    #[test]
    fn prop_durations_are_known_values(capabilities in any_capabilities()) {
        let settings = resolve(&capabilities);
        prop_assert!([0.1, 0.3, 0.8].contains(&settings.animation_duration));
        prop_assert!([0.5, 0.7, 1.0].contains(&settings.terminal_scale));
        prop_assert!([0.1, 0.2].contains(&settings.terminal_opacity));
    }

    #[test]
    fn prop_static_tier_never_enables_gpu_effects(capabilities in any_capabilities()) {
        let settings = resolve(&capabilities);
        if CapabilityTier::classify(&capabilities) == CapabilityTier::StaticFallback {
            prop_assert!(!settings.enable_terminal);
            prop_assert!(!settings.enable_blur);
            prop_assert!(!settings.enable_complex_animations);
        }
    }
}

#[test]
fn test_enable_terminal_truth_table() {
    for is_low_end in [false, true] {
        for has_good_gpu in [false, true] {
            for reduced_motion in [false, true] {
                let settings = resolve(&caps(is_low_end, false, has_good_gpu, reduced_motion));
                assert_eq!(
                    settings.enable_terminal,
                    !is_low_end && has_good_gpu && !reduced_motion,
                    "L={} G={} R={}",
                    is_low_end,
                    has_good_gpu,
                    reduced_motion
                );
            }
        }
    }
}

#[test]
fn test_animation_duration_precedence() {
    assert_eq!(resolve(&caps(true, false, true, true)).animation_duration, 0.3);
    assert_eq!(resolve(&caps(false, false, true, true)).animation_duration, 0.1);
    assert_eq!(resolve(&caps(false, false, true, false)).animation_duration, 0.8);
}

#[test]
fn test_throttle_is_low_end_or_mobile() {
    for is_low_end in [false, true] {
        for is_mobile in [false, true] {
            let settings = resolve(&caps(is_low_end, is_mobile, true, false));
            assert_eq!(settings.throttle_animations, is_low_end || is_mobile);
        }
    }
}

#[test]
fn test_tier_ordering() {
    assert!(CapabilityTier::StaticFallback < CapabilityTier::Degraded);
    assert!(CapabilityTier::Degraded < CapabilityTier::Full);
    assert_eq!(
        CapabilityTier::classify(&caps(true, false, true, false)),
        CapabilityTier::Degraded
    );
    assert_eq!(
        CapabilityTier::classify(&caps(false, false, false, false)),
        CapabilityTier::Full
    );
}

#[test]
fn test_settings_json_field_names() {
    let json = serde_json::to_value(resolve(&caps(false, false, true, false))).unwrap();
    for field in [
        "enableTerminal",
        "terminalScale",
        "terminalOpacity",
        "enableComplexAnimations",
        "animationDuration",
        "enableParallax",
        "enableSmoothScrolling",
        "enableBlur",
        "throttleAnimations",
        "useRequestIdleCallback",
    ] {
        assert!(json.get(field).is_some(), "missing {}", field);
    }
}
