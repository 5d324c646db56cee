// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Effect gating
//!
//! Each visual feature asks the gate for a decision before it mounts. The
//! decision is either the full configuration, a cheaper configuration, or a
//! static stand-in. Selection only reads the session snapshot, so equal
//! snapshots always produce equal decisions.

pub mod animation;
pub mod scroll;
pub mod terminal;

use serde::Serialize;
use tracing::debug;

use crate::capabilities::DeviceCapabilities;
use crate::policy::OptimalSettings;
use crate::session::SessionSnapshot;

pub use animation::{CardGroup, Fade, Hover, HoverTarget, Marquee, ScrollTrigger, Tween};
pub use scroll::{Easing, ScrollToConfig, SmoothScrollConfig};
pub use terminal::{TerminalEffect, STATIC_BACKDROP_OPACITY};

/// A feature asking whether (and how) it may run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureRequest {
    TerminalBackground { device_pixel_ratio: f64 },
    Entrance,
    ScrollReveal,
    StaggeredCards { group: CardGroup },
    Marquee { items: usize },
    HoverTransform { target: HoverTarget },
    SmoothScroll,
    Parallax,
    Blur,
}

/// Configuration handed to a feature that is allowed to run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EffectConfig {
    Terminal(TerminalEffect),
    Timeline { tweens: Vec<Tween> },
    Tween(Tween),
    Fade(Fade),
    Marquee(Marquee),
    Hover(Hover),
    SmoothScroll {
        scroll: SmoothScrollConfig,
        #[serde(rename = "scrollTo")]
        scroll_to: ScrollToConfig,
    },
    /// Feature runs as authored, no parameters
    Enabled,
}

/// What replaces a feature that must not run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StaticFallback {
    GradientBackdrop { opacity: f64 },
    NativeScroll,
    StillLayers,
    SolidBackdrop,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", content = "config", rename_all = "camelCase")]
pub enum EffectDecision {
    Full(EffectConfig),
    Degraded(EffectConfig),
    Static(StaticFallback),
}

impl EffectDecision {
    pub fn label(&self) -> &'static str {
        match self {
            EffectDecision::Full(_) => "full",
            EffectDecision::Degraded(_) => "degraded",
            EffectDecision::Static(_) => "static",
        }
    }

    pub fn config(&self) -> Option<&EffectConfig> {
        match self {
            EffectDecision::Full(config) | EffectDecision::Degraded(config) => Some(config),
            EffectDecision::Static(_) => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, EffectDecision::Static(_))
    }
}

/// Per-feature decisions derived from one session snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectGate {
    capabilities: DeviceCapabilities,
    settings: OptimalSettings,
}

impl EffectGate {
    pub fn new(snapshot: &SessionSnapshot) -> Self {
        Self {
            capabilities: snapshot.capabilities,
            settings: snapshot.settings,
        }
    }

    pub fn from_capabilities(capabilities: DeviceCapabilities) -> Self {
        Self {
            settings: OptimalSettings::resolve(&capabilities),
            capabilities,
        }
    }

    pub fn settings(&self) -> &OptimalSettings {
        &self.settings
    }

    pub fn select(&self, request: &FeatureRequest) -> EffectDecision {
        let decision = match *request {
            FeatureRequest::TerminalBackground { device_pixel_ratio } => {
                self.terminal(device_pixel_ratio)
            }
            FeatureRequest::Entrance => self.animated(".hero", || EffectConfig::Timeline {
                tweens: animation::entrance_timeline(),
            }),
            FeatureRequest::ScrollReveal => self.animated(".animate-on-scroll", || {
                EffectConfig::Tween(animation::scroll_reveal())
            }),
            FeatureRequest::StaggeredCards { group } => self.cards(group),
            FeatureRequest::Marquee { items } => {
                let animated = self.settings.enable_complex_animations;
                let marquee = EffectConfig::Marquee(Marquee::new(items, animated));
                if animated {
                    EffectDecision::Full(marquee)
                } else {
                    EffectDecision::Degraded(marquee)
                }
            }
            FeatureRequest::HoverTransform { target } => {
                let lift = self.settings.enable_complex_animations;
                let hover = EffectConfig::Hover(Hover::new(target, lift));
                if lift {
                    EffectDecision::Full(hover)
                } else {
                    EffectDecision::Degraded(hover)
                }
            }
            FeatureRequest::SmoothScroll => self.smooth_scroll(),
            FeatureRequest::Parallax => {
                if self.settings.enable_parallax {
                    EffectDecision::Full(EffectConfig::Enabled)
                } else {
                    EffectDecision::Static(StaticFallback::StillLayers)
                }
            }
            FeatureRequest::Blur => {
                if self.settings.enable_blur {
                    EffectDecision::Full(EffectConfig::Enabled)
                } else {
                    EffectDecision::Static(StaticFallback::SolidBackdrop)
                }
            }
        };

        debug!(?request, decision = decision.label(), "Effect gate");
        decision
    }

    fn terminal(&self, device_pixel_ratio: f64) -> EffectDecision {
        let Some(effect) = TerminalEffect::tune(
            &self.capabilities,
            device_pixel_ratio,
            self.settings.terminal_opacity,
        ) else {
            return EffectDecision::Static(StaticFallback::GradientBackdrop {
                opacity: STATIC_BACKDROP_OPACITY,
            });
        };

        if self.capabilities.is_low_end || self.capabilities.is_mobile {
            EffectDecision::Degraded(EffectConfig::Terminal(effect))
        } else {
            EffectDecision::Full(EffectConfig::Terminal(effect))
        }
    }

    /// Full motion when complex animations are on, else one plain fade.
    fn animated(
        &self,
        fade_target: &'static str,
        full: impl FnOnce() -> EffectConfig,
    ) -> EffectDecision {
        if self.settings.enable_complex_animations {
            EffectDecision::Full(full())
        } else {
            EffectDecision::Degraded(self.fade(fade_target))
        }
    }

    fn cards(&self, group: CardGroup) -> EffectDecision {
        if !self.settings.enable_complex_animations {
            return EffectDecision::Degraded(self.fade(group.selector()));
        }

        let throttle = self.settings.throttle_animations;
        let tween = EffectConfig::Tween(animation::staggered_cards(group, throttle));
        if throttle {
            EffectDecision::Degraded(tween)
        } else {
            EffectDecision::Full(tween)
        }
    }

    fn smooth_scroll(&self) -> EffectDecision {
        if !self.settings.enable_smooth_scrolling {
            return EffectDecision::Static(StaticFallback::NativeScroll);
        }

        let throttle = self.settings.throttle_animations;
        let config = EffectConfig::SmoothScroll {
            scroll: SmoothScrollConfig::new(throttle),
            scroll_to: ScrollToConfig::default(),
        };
        if throttle {
            EffectDecision::Degraded(config)
        } else {
            EffectDecision::Full(config)
        }
    }

    fn fade(&self, target: &'static str) -> EffectConfig {
        EffectConfig::Fade(Fade {
            target,
            duration: self.settings.animation_duration,
        })
    }
}
