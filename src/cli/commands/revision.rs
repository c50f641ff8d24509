//! ci:revision command - Dump the commit reference into a file

use std::path::Path;

use anyhow::{Context as _, Result};

use super::{debug_config, describe_source};
use crate::cli::Context;
use crate::core::dump;
use crate::core::env::resolve_traced;
use crate::core::vars;
use crate::ui::output::{self, format_value};

/// Write the resolved commit reference to `file` (or the configured default).
pub fn revision(ctx: &Context<'_>, file: Option<&Path>, verbose: bool) -> Result<()> {
    let verbosity = ctx.verbosity(verbose);
    let path = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.config.revision_file());

    debug_config(ctx, verbosity);

    let resolved = resolve_traced(ctx.env, &vars::COMMIT_REF);
    output::debug(
        format!(
            "ref = {} ({})",
            format_value(&resolved.value),
            describe_source(&resolved, &vars::COMMIT_REF)
        ),
        verbosity,
    );

    dump::write_revision(&path, &resolved.value).context("failed to dump revision")?;
    output::debug(format!("wrote {}", path.display()), verbosity);

    Ok(())
}
