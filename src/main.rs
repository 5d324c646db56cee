// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Vitrine - probe a device and pick the effect tier for it
//!
//! Entry point for the Vitrine CLI application.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use vitrine::capabilities::{HostEnvironment, HostSnapshot, NativeHost};
use vitrine::cli::{Cli, Commands};
use vitrine::commands;
use vitrine::config::VitrineConfig;
use vitrine::error::{Result, VitrineError};
use vitrine::session::{OptimizationSession, SessionSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config before logging so its default directive can apply
    let config = match &cli.config {
        Some(path) => VitrineConfig::load_from(path)?,
        None => VitrineConfig::load()?,
    };

    // Initialize tracing. `RUST_LOG` still takes precedence.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let mut directives: Vec<&str> = Vec::new();
    if let Some(level) = config.log_level.as_deref() {
        directives.extend(level.split(',').map(str::trim).filter(|d| !d.is_empty()));
    }
    if cli.verbose > 0 {
        directives.push("vitrine=debug");
    }
    if cli.verbose > 1 {
        directives.push("vitrine=trace");
    }
    for directive in directives {
        let parsed: tracing_subscriber::filter::Directive = directive.parse().map_err(|e| {
            VitrineError::Config(format!("invalid log directive {:?}: {}", directive, e))
        })?;
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::EnvTemplate => commands::env_template::execute()?,
        Commands::Probe => {
            let host = build_host(cli.env.as_deref())?;
            commands::probe::execute(host.as_ref(), &config, &cli.format)?;
        }
        Commands::Settings => {
            let host = build_host(cli.env.as_deref())?;
            let snapshot = initialize_session(host.as_ref(), &config).await?;
            commands::settings::execute(&snapshot, &cli.format)?;
        }
        Commands::Effect(args) => {
            let host = build_host(cli.env.as_deref())?;
            let snapshot = initialize_session(host.as_ref(), &config).await?;
            commands::effect::execute(&args, &snapshot, &config, &cli.format)?;
        }
    }

    Ok(())
}

/// Recorded snapshot from `--env`, or this machine.
fn build_host(env: Option<&Path>) -> Result<Box<dyn HostEnvironment>> {
    match env {
        Some(path) => {
            debug!(path = %path.display(), "Probing recorded host snapshot");
            Ok(Box::new(HostSnapshot::load_from(path)?))
        }
        None => Ok(Box::new(NativeHost::detect())),
    }
}

async fn initialize_session(
    host: &dyn HostEnvironment,
    config: &VitrineConfig,
) -> Result<Arc<SessionSnapshot>> {
    let scoped;
    let session = match config.capabilities_override {
        Some(overrides) if !overrides.is_empty() => {
            scoped = OptimizationSession::with_overrides(overrides);
            &scoped
        }
        _ => OptimizationSession::global(),
    };
    session.initialize(host);
    session.wait_ready().await
}
