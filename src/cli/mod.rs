//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments (accepting Go-style `-flag` spelling)
//! - Load configuration defaults
//! - Dispatch to command handlers and map the outcome to an exit code
//!
//! # Exit Codes
//!
//! - `0`: success, or `--help` / `--version` was displayed
//! - `1`: argument error, configuration error, or failure to write the file

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::ffi::OsString;
use std::process::ExitCode;

use crate::core::config::Config;
use crate::core::env::{Environment, ProcessEnv};
use crate::ui::output::{self, Verbosity};

/// Per-invocation state shared by command handlers.
pub struct Context<'a> {
    /// Where CI variables are read from
    pub env: &'a dyn Environment,
    /// Loaded configuration defaults
    pub config: Config,
    /// Global `--quiet`
    pub quiet: bool,
}

impl Context<'_> {
    /// Verbosity for a command given its own `-verbose` flag.
    pub fn verbosity(&self, verbose: bool) -> Verbosity {
        Verbosity::from_flags(self.quiet, verbose || self.config.verbose())
    }
}

/// Run the CLI application against the process arguments and environment.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    match run_from(std::env::args_os(), &ProcessEnv) {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Run the CLI with explicit arguments (including the program name) and
/// environment, returning the process exit code.
pub fn run_from<I, T>(args: I, env: &dyn Environment) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::try_parse_normalized(args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            err.print().ok();
            return if err.use_stderr() { 1 } else { 0 };
        }
    };

    let loaded = match Config::load(env) {
        Ok(loaded) => loaded,
        Err(err) => {
            output::error(err);
            return 1;
        }
    };

    let verbosity = Verbosity::from_flags(cli.quiet, false);
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    let ctx = Context {
        env,
        config: loaded.config,
        quiet: cli.quiet,
    };

    match commands::dispatch(cli.command, &ctx) {
        Ok(()) => 0,
        Err(err) => {
            output::error(format!("{:#}", err));
            1
        }
    }
}
