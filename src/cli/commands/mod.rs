//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler resolves its target path (flag, then config, then default),
//! reads the environment once, and writes its file. Handlers return
//! `anyhow::Result`; the caller turns errors into exit code 1.

mod completion;
mod meta;
mod revision;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use meta::meta;
pub use revision::revision;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::env::{FallbackPair, Resolved};
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context<'_>) -> Result<()> {
    match command {
        Command::Revision { file, verbose } => revision::revision(ctx, file.as_deref(), verbose),
        Command::Meta { file, verbose } => meta::meta(ctx, file.as_deref(), verbose),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Log where configuration defaults came from.
fn debug_config(ctx: &Context<'_>, verbosity: Verbosity) {
    match ctx.config.loaded_from() {
        Some(path) => output::debug(format!("config loaded from {}", path.display()), verbosity),
        None => output::debug("no config file, using defaults", verbosity),
    }
}

/// Describe where a resolved value came from, for debug output.
fn describe_source(resolved: &Resolved, pair: &FallbackPair) -> String {
    match resolved.source_name(pair) {
        Some(name) => format!("from {}", name),
        None => format!("{} and {} unset", pair.preferred, pair.legacy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::{resolve_traced, MapEnv};

    const PAIR: FallbackPair = FallbackPair::new("NEW", "OLD");

    #[test]
    fn describe_each_source() {
        let env = MapEnv::new().with("NEW", "x");
        assert_eq!(describe_source(&resolve_traced(&env, &PAIR), &PAIR), "from NEW");

        let env = MapEnv::new().with("OLD", "x");
        assert_eq!(describe_source(&resolve_traced(&env, &PAIR), &PAIR), "from OLD");

        assert_eq!(
            describe_source(&resolve_traced(&MapEnv::new(), &PAIR), &PAIR),
            "NEW and OLD unset"
        );
    }
}
