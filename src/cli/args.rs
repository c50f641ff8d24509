//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flag Style
//!
//! CI scripts call the dump commands with Go-style single-dash long flags
//! (`-file REVISION -verbose`). [`normalize_args`] rewrites those to the
//! double-dash form before clap sees them, so both styles parse the same way.
//! As with Go's `flag` package, `-verbose=false` is accepted and a repeated
//! `-file` keeps its last value.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--quiet` / `-q`: Suppress warnings

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};

/// Dump GitLab CI job information into files for later build steps
#[derive(Parser, Debug)]
#[command(name = "gitlab-ci-helper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Suppress warnings; errors are still shown
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments, normalizing single-dash long flags first.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump a file with the commit reference being built
    #[command(
        name = "ci:revision",
        args_override_self = true,
        long_about = "Dump the commit reference being built into a REVISION file.\n\n\
            The value comes from CI_COMMIT_SHA, or CI_BUILD_REF on runners that \
            predate GitLab 9.0. The file holds the raw value with no trailing newline, \
            and is created or overwritten. Parent directories are not created.",
        after_help = "\
EXAMPLES:
    # Write ./REVISION
    gitlab-ci-helper ci:revision

    # Write into the build output
    gitlab-ci-helper ci:revision -file dist/REVISION

    # Show which variable supplied the value
    gitlab-ci-helper ci:revision -verbose"
    )]
    Revision {
        /// Target file [default: REVISION]
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Log the resolved value and the variable it came from
        #[arg(
            short,
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true",
            value_parser = BoolishValueParser::new()
        )]
        verbose: bool,
    },

    /// Dump a json file with build information
    #[command(
        name = "ci:meta",
        args_override_self = true,
        long_about = "Dump meta information about the CI job into a ci.json file.\n\n\
            The file holds three objects: build (id, ref, ref_name, tag, stage, \
            job_name), project (id, dir) and server (name, revision, version). \
            Build fields prefer the CI_JOB_*/CI_COMMIT_* variables and fall back to \
            the older CI_BUILD_* names. Unset variables are written as empty strings. \
            The JSON is indented with four spaces.",
        after_help = "\
EXAMPLES:
    # Write ./ci.json
    gitlab-ci-helper ci:meta

    # Write next to the artifacts
    gitlab-ci-helper ci:meta -file public/ci.json

    # Log every resolved field
    gitlab-ci-helper ci:meta -verbose"
    )]
    Meta {
        /// Target file [default: ci.json]
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Log each resolved field and the variable it came from
        #[arg(
            short,
            long,
            action = ArgAction::Set,
            num_args = 0..=1,
            require_equals = true,
            default_value_t = false,
            default_missing_value = "true",
            value_parser = BoolishValueParser::new()
        )]
        verbose: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell.",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    gitlab-ci-helper completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    gitlab-ci-helper completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Long flags that may be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["file", "verbose", "quiet", "help", "version"];

/// Long flags that take a separate value argument.
const VALUE_FLAGS: &[&str] = &["file"];

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value` for known long
/// flags. Values following a value flag and everything after `--` are left
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let name = text
            .trim_start_matches('-')
            .split('=')
            .next()
            .unwrap_or_default();
        let has_inline_value = text.contains('=');
        let is_long_flag = LONG_FLAGS.contains(&name);

        if is_long_flag && !has_inline_value && VALUE_FLAGS.contains(&name) {
            expect_value = true;
        }

        if is_long_flag && text.starts_with('-') && !text.starts_with("--") {
            out.push(OsString::from(format!("-{}", text)));
        } else {
            out.push(arg);
        }
    }

    out
}
