// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tween and reveal plans for the page sections

use serde::Serialize;

use super::scroll::Easing;

/// Stagger spacing is multiplied by this when animations are throttled
pub const THROTTLED_STAGGER_FACTOR: f64 = 0.5;

/// Scroll position that starts (and reverses) a tween
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTrigger {
    pub trigger: &'static str,
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    pub toggle_actions: &'static str,
}

/// A from → rest tween over position, opacity and optionally scale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tween {
    pub target: &'static str,
    pub from_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_scale: Option<f64>,
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTrigger>,
}

/// The single opacity fade used when complex animations are off
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fade {
    pub target: &'static str,
    pub duration: f64,
}

/// Card grids revealed with a stagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CardGroup {
    Services,
    Projects,
    Testimonials,
}

impl CardGroup {
    pub fn selector(&self) -> &'static str {
        match self {
            CardGroup::Services => ".service-card",
            CardGroup::Projects => ".project-card",
            CardGroup::Testimonials => ".testimonial-card",
        }
    }

    fn grid(&self) -> &'static str {
        match self {
            CardGroup::Services => ".services-grid",
            CardGroup::Projects => ".projects-grid",
            CardGroup::Testimonials => ".testimonials-grid",
        }
    }
}

/// Hero title, subtitle and buttons, in order.
pub fn entrance_timeline() -> Vec<Tween> {
    [
        (".hero-title", 100.0, 1.2, 0.2),
        (".hero-subtitle", 50.0, 1.0, 0.5),
        (".hero-buttons", 30.0, 0.8, 0.8),
    ]
    .into_iter()
    .map(|(target, from_y, duration, delay)| Tween {
        target,
        from_y,
        from_scale: None,
        duration,
        delay,
        ease: Easing::Power3Out,
        stagger: None,
        scroll_trigger: None,
    })
    .collect()
}

/// Per-section reveal as the section scrolls into view.
pub fn scroll_reveal() -> Tween {
    Tween {
        target: ".animate-on-scroll",
        from_y: 60.0,
        from_scale: None,
        duration: 0.8,
        delay: 0.0,
        ease: Easing::Power3Out,
        stagger: None,
        scroll_trigger: Some(ScrollTrigger {
            trigger: ".animate-on-scroll",
            start: "top 85%",
            end: Some("bottom 15%"),
            toggle_actions: "play none none reverse",
        }),
    }
}

/// Staggered reveal of a card grid. Throttling shortens the stagger.
pub fn staggered_cards(group: CardGroup, throttle: bool) -> Tween {
    let (from_y, from_scale, duration, stagger) = match group {
        CardGroup::Services => (80.0, Some(0.9), 0.6, 0.2),
        CardGroup::Projects => (80.0, Some(0.95), 0.7, 0.15),
        CardGroup::Testimonials => (60.0, None, 0.8, 0.2),
    };
    let stagger = if throttle {
        stagger * THROTTLED_STAGGER_FACTOR
    } else {
        stagger
    };

    Tween {
        target: group.selector(),
        from_y,
        from_scale,
        duration,
        delay: 0.0,
        ease: Easing::Power3Out,
        stagger: Some(stagger),
        scroll_trigger: Some(ScrollTrigger {
            trigger: group.grid(),
            start: "top 80%",
            end: None,
            toggle_actions: "play none none reverse",
        }),
    }
}

/// Looping list layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marquee {
    /// Items rendered, including duplicates for the seamless loop
    pub rendered_items: usize,
    pub copies: usize,
    pub scrolling: bool,
}

impl Marquee {
    pub fn new(items: usize, animated: bool) -> Self {
        let copies = if animated { 2 } else { 1 };
        Self {
            rendered_items: items.saturating_mul(copies),
            copies,
            scrolling: animated,
        }
    }
}

/// What a hover transform applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HoverTarget {
    Button,
    Card,
}

/// Hover feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    /// Negative lifts the element; 0 is colour-only
    pub translate_y_px: i32,
    pub transition_ms: u32,
}

impl Hover {
    pub fn new(target: HoverTarget, lift: bool) -> Self {
        let (translate_y_px, transition_ms) = match target {
            HoverTarget::Button => (-4, 200),
            HoverTarget::Card => (-8, 300),
        };
        Self {
            translate_y_px: if lift { translate_y_px } else { 0 },
            transition_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_timeline_order() {
        let timeline = entrance_timeline();
        let targets: Vec<_> = timeline.iter().map(|t| t.target).collect();
        assert_eq!(targets, vec![".hero-title", ".hero-subtitle", ".hero-buttons"]);
        assert!(timeline.windows(2).all(|w| w[0].delay < w[1].delay));
        assert!(timeline.iter().all(|t| t.scroll_trigger.is_none()));
    }

    #[test]
    fn test_scroll_reveal_trigger() {
        let tween = scroll_reveal();
        let trigger = tween.scroll_trigger.unwrap();
        assert_eq!(trigger.start, "top 85%");
        assert_eq!(trigger.end, Some("bottom 15%"));
    }

    #[test]
    fn test_staggered_cards_values() {
        let services = staggered_cards(CardGroup::Services, false);
        assert_eq!(services.stagger, Some(0.2));
        assert_eq!(services.from_scale, Some(0.9));

        let projects = staggered_cards(CardGroup::Projects, false);
        assert_eq!(projects.stagger, Some(0.15));
        assert_eq!(projects.duration, 0.7);

        let testimonials = staggered_cards(CardGroup::Testimonials, false);
        assert_eq!(testimonials.from_scale, None);
        assert_eq!(
            testimonials.scroll_trigger.unwrap().trigger,
            ".testimonials-grid"
        );
    }

    #[test]
    fn test_throttle_halves_stagger() {
        for group in [CardGroup::Services, CardGroup::Projects, CardGroup::Testimonials] {
            let full = staggered_cards(group, false).stagger.unwrap();
            let throttled = staggered_cards(group, true).stagger.unwrap();
            assert!(throttled > 0.0);
            assert!((throttled - full / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_marquee_duplication() {
        assert_eq!(
            Marquee::new(6, true),
            Marquee {
                rendered_items: 12,
                copies: 2,
                scrolling: true
            }
        );
        assert_eq!(
            Marquee::new(6, false),
            Marquee {
                rendered_items: 6,
                copies: 1,
                scrolling: false
            }
        );
    }

    #[test]
    fn test_marquee_huge_list_saturates() {
        let marquee = Marquee::new(usize::MAX, true);
        assert_eq!(marquee.rendered_items, usize::MAX);
        assert_eq!(marquee.copies, 2);
    }

    #[test]
    fn test_hover() {
        assert_eq!(Hover::new(HoverTarget::Button, true).translate_y_px, -4);
        assert_eq!(Hover::new(HoverTarget::Card, true).translate_y_px, -8);
        let flat = Hover::new(HoverTarget::Card, false);
        assert_eq!(flat.translate_y_px, 0);
        assert_eq!(flat.transition_ms, 300);
    }
}
