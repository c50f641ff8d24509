//! ci:meta command - Dump build, project and server information as JSON

use std::path::Path;

use anyhow::{Context as _, Result};

use super::{debug_config, describe_source};
use crate::cli::Context;
use crate::core::dump;
use crate::core::metadata::{Metadata, BUILD_FIELDS};
use crate::ui::output::{self, format_value};

/// Collect the metadata snapshot and write it to `file` (or the configured default).
pub fn meta(ctx: &Context<'_>, file: Option<&Path>, verbose: bool) -> Result<()> {
    let verbosity = ctx.verbosity(verbose);
    let path = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.config.meta_file());

    debug_config(ctx, verbosity);

    let (meta, traced) = Metadata::collect_traced(ctx.env);
    for ((field, pair), resolved) in BUILD_FIELDS.iter().zip(&traced) {
        output::debug(
            format!(
                "build.{} = {} ({})",
                field,
                format_value(&resolved.value),
                describe_source(resolved, pair)
            ),
            verbosity,
        );
    }
    output::debug(
        format!(
            "project.id = {}, project.dir = {}",
            format_value(&meta.project.id),
            format_value(&meta.project.dir)
        ),
        verbosity,
    );
    output::debug(
        format!(
            "server.name = {}, server.revision = {}, server.version = {}",
            format_value(&meta.server.name),
            format_value(&meta.server.revision),
            format_value(&meta.server.version)
        ),
        verbosity,
    );

    dump::write_metadata(&path, &meta).context("failed to dump metadata")?;
    output::debug(format!("wrote {}", path.display()), verbosity);

    Ok(())
}
