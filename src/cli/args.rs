// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Vitrine.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::effects::{CardGroup, FeatureRequest, HoverTarget};

/// Vitrine - probe a device and pick the effect tier for it
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about = "Probe a device and pick the effect tier for it")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Recorded host snapshot (JSON) to probe instead of this machine
    #[arg(long, global = true)]
    pub env: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show probed capabilities and the signals behind them
    Probe,

    /// Show resolved settings and the capability tier
    Settings,

    /// Ask the effect gate about one feature
    Effect(EffectArgs),

    /// Print a sample host snapshot for --env
    EnvTemplate,
}

/// Arguments for the effect subcommand
#[derive(clap::Args, Debug)]
pub struct EffectArgs {
    /// Feature to gate
    pub feature: Feature,

    /// Screen pixel density (terminal only; defaults to the config value)
    #[arg(long)]
    pub dpr: Option<f64>,

    /// Number of list items (marquee only)
    #[arg(long, default_value_t = 6)]
    pub items: usize,
}

impl EffectArgs {
    pub fn request(&self, default_device_pixel_ratio: f64) -> FeatureRequest {
        match self.feature {
            Feature::Terminal => FeatureRequest::TerminalBackground {
                device_pixel_ratio: self.dpr.unwrap_or(default_device_pixel_ratio),
            },
            Feature::Entrance => FeatureRequest::Entrance,
            Feature::ScrollReveal => FeatureRequest::ScrollReveal,
            Feature::ServiceCards => FeatureRequest::StaggeredCards {
                group: CardGroup::Services,
            },
            Feature::ProjectCards => FeatureRequest::StaggeredCards {
                group: CardGroup::Projects,
            },
            Feature::TestimonialCards => FeatureRequest::StaggeredCards {
                group: CardGroup::Testimonials,
            },
            Feature::Marquee => FeatureRequest::Marquee { items: self.items },
            Feature::ButtonHover => FeatureRequest::HoverTransform {
                target: HoverTarget::Button,
            },
            Feature::CardHover => FeatureRequest::HoverTransform {
                target: HoverTarget::Card,
            },
            Feature::SmoothScroll => FeatureRequest::SmoothScroll,
            Feature::Parallax => FeatureRequest::Parallax,
            Feature::Blur => FeatureRequest::Blur,
        }
    }
}

/// Gated features, as named on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feature {
    Terminal,
    Entrance,
    ScrollReveal,
    ServiceCards,
    ProjectCards,
    TestimonialCards,
    Marquee,
    ButtonHover,
    CardHover,
    SmoothScroll,
    Parallax,
    Blur,
}

/// Output format for reports
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== CLI Global Arguments ====================

    #[test]
    fn test_cli_probe_defaults() {
        let cli = Cli::parse_from(["vitrine", "probe"]);
        assert!(matches!(cli.command, Commands::Probe));
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.env.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["vitrine"]).is_err());
    }

    #[test]
    fn test_cli_verbose_multiple() {
        let cli = Cli::parse_from(["vitrine", "-vv", "settings"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_global_flags_after_command() {
        let cli = Cli::parse_from([
            "vitrine",
            "settings",
            "--format",
            "json",
            "--env",
            "/tmp/phone.json",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.env, Some(PathBuf::from("/tmp/phone.json")));
    }

    #[test]
    fn test_cli_rejects_markdown_format() {
        assert!(Cli::try_parse_from(["vitrine", "--format", "markdown", "probe"]).is_err());
    }

    // ==================== Effect Command ====================

    #[test]
    fn test_effect_terminal_with_dpr() {
        let cli = Cli::parse_from(["vitrine", "effect", "terminal", "--dpr", "2.5"]);
        let Commands::Effect(args) = cli.command else {
            panic!("Expected Effect command");
        };
        assert_eq!(
            args.request(1.0),
            FeatureRequest::TerminalBackground {
                device_pixel_ratio: 2.5
            }
        );
    }

    #[test]
    fn test_effect_terminal_uses_default_dpr() {
        let cli = Cli::parse_from(["vitrine", "effect", "terminal"]);
        let Commands::Effect(args) = cli.command else {
            panic!("Expected Effect command");
        };
        assert_eq!(
            args.request(1.5),
            FeatureRequest::TerminalBackground {
                device_pixel_ratio: 1.5
            }
        );
    }

    #[test]
    fn test_effect_marquee_items() {
        let cli = Cli::parse_from(["vitrine", "effect", "marquee", "--items", "9"]);
        let Commands::Effect(args) = cli.command else {
            panic!("Expected Effect command");
        };
        assert_eq!(args.request(1.0), FeatureRequest::Marquee { items: 9 });
    }

    #[test]
    fn test_effect_kebab_case_names() {
        let cli = Cli::parse_from(["vitrine", "effect", "testimonial-cards"]);
        let Commands::Effect(args) = cli.command else {
            panic!("Expected Effect command");
        };
        assert_eq!(
            args.request(1.0),
            FeatureRequest::StaggeredCards {
                group: CardGroup::Testimonials
            }
        );
    }

    #[test]
    fn test_effect_unknown_feature() {
        assert!(Cli::try_parse_from(["vitrine", "effect", "confetti"]).is_err());
    }

    #[test]
    fn test_env_template_command() {
        let cli = Cli::parse_from(["vitrine", "env-template"]);
        assert!(matches!(cli.command, Commands::EnvTemplate));
    }
}
