//! Shared entry point for the `remove-admin-*` binaries.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::config::{
    ConfigFlags, LogLevel, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use crate::perf;
use crate::prune::Job;
use crate::targets::{Tool, dashboard_path};

/// Flags shared by both tools. The target file and sections are fixed.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Report the sections that would be removed without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Log how long each phase takes
    #[arg(long)]
    pub perf: bool,

    /// Diagnostic log verbosity (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    pub save: bool,

    /// Clear saved defaults
    #[arg(long)]
    pub clear: bool,
}

fn init_logging(level: Option<LogLevel>) {
    let filter = level.map_or_else(
        || {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy()
        },
        |level| EnvFilter::new(level.as_str()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse arguments, resolve saved defaults and run `tool` on the dashboard page.
///
/// # Errors
/// Fails on bad arguments, unreadable config, or any I/O error on the page.
pub fn main(tool: Tool) -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let matches = Cli::command()
        .name(tool.bin_name())
        .about(tool.about())
        .get_matches_from(&raw_args);
    let cli = Cli::from_arg_matches(&matches)?;

    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_level);
    perf::set_enabled(effective.perf);
    debug!(tool = tool.bin_name(), ?effective, "starting");

    let job = Job::new(dashboard_path(), tool.strategy()).with_dry_run(effective.dry_run);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = job
        .run(&mut out)
        .with_context(|| format!("{} failed", tool.bin_name()))?;
    writeln!(out, "{}", tool.summary(&outcome, job.is_dry_run()))?;
    Ok(())
}
