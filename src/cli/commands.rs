//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap,
//! the per-invocation command context, and command execution.

use crate::config::Settings;
use crate::error::{ProjectError, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::{debug, error, info};

/// Human-readable project name shown by `config`
pub const PROJECT_NAME: &str = "My Python Project";

/// Version string reported by `--version` and `config`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "my_python_project")]
#[command(about = "My Python Project - A short description of the project.")]
#[command(version = VERSION)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Greet the user with a personalized message
    Hello {
        /// Name to greet
        #[arg(short, long, default_value = "World")]
        name: String,
    },
    /// Display current configuration settings
    ///
    /// Shows configuration values from environment variables or defaults.
    Config,
}

/// Flags shared by every command for a single invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub debug: bool,
}

impl Cli {
    pub fn context(&self) -> CommandContext {
        CommandContext { debug: self.debug }
    }

    /// Run the selected command and return the process exit code.
    ///
    /// Command output goes to `out`; a failure is reported to `err` as a
    /// single `Error: <message>` line.
    pub fn execute<W: Write, E: Write>(self, settings: &Settings, out: &mut W, err: &mut E) -> i32 {
        let ctx = self.context();

        if ctx.debug {
            debug!("Debug mode enabled");
        }

        self.command.execute(&ctx, settings, out, err)
    }
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Hello { .. } => "hello",
            Commands::Config => "config",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Commands::Hello { .. } => "Command failed",
            Commands::Config => "Failed to display configuration",
        }
    }

    /// Run the command body, propagating any failure
    pub fn run<W: Write>(&self, ctx: &CommandContext, settings: &Settings, out: &mut W) -> Result<()> {
        match self {
            Commands::Hello { name } => execute_hello(name, ctx, out),
            Commands::Config => execute_config(ctx, settings, out),
        }
    }

    /// Run the command body and convert a failure into an exit code
    pub fn execute<W: Write, E: Write>(
        &self,
        ctx: &CommandContext,
        settings: &Settings,
        out: &mut W,
        err: &mut E,
    ) -> i32 {
        match self.run(ctx, settings, out) {
            Ok(()) => 0,
            Err(e) => report_failure(self, &e, err),
        }
    }
}

fn report_failure<E: Write>(command: &Commands, e: &ProjectError, err: &mut E) -> i32 {
    error!(
        command = command.name(),
        error = %e,
        details = ?e,
        "{}",
        command.failure_message()
    );

    // Nothing else can be done if stderr itself is gone
    let _ = writeln!(err, "Error: {e}");

    e.exit_code()
}

/// Greeting line printed by `hello`
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!")
}

fn execute_hello<W: Write>(name: &str, ctx: &CommandContext, out: &mut W) -> Result<()> {
    info!(name = %name, debug = ctx.debug, "Processing hello command");

    let message = greeting(name);
    writeln!(out, "{message}")?;
    out.flush()?;

    info!(
        name = %name,
        debug = ctx.debug,
        result = %message,
        "Command completed successfully"
    );
    Ok(())
}

fn execute_config<W: Write>(ctx: &CommandContext, settings: &Settings, out: &mut W) -> Result<()> {
    info!(debug = ctx.debug, "Retrieving configuration");

    writeln!(out, "Current Configuration:")?;
    writeln!(out, "  Project: {PROJECT_NAME}")?;
    writeln!(out, "  Version: {VERSION}")?;
    writeln!(out, "  Debug: {}", ctx.debug)?;
    writeln!(out, "  Log Level: {}", settings.log_level)?;
    out.flush()?;

    info!(
        debug = ctx.debug,
        log_level = %settings.log_level,
        "Configuration displayed successfully"
    );
    Ok(())
}
