//! gitlab-ci-helper - dump GitLab CI job information into files
//!
//! CI jobs expose what they are building through environment variables. This
//! crate turns those variables into files that later build and deploy steps
//! can read without talking to the GitLab API:
//!
//! - `ci:revision` writes the commit sha to a `REVISION` file
//! - `ci:meta` writes build, project and server details to `ci.json`
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing, configuration, dispatch, exit codes
//! - [`core`] - Environment fallback chain, metadata record, file output
//! - [`ui`] - User-visible output and verbosity
//!
//! # Compatibility
//!
//! GitLab 9.0 renamed the `CI_BUILD_*` variables. Build fields prefer the new
//! names and fall back to the old ones, so the same binary works on every
//! runner generation.

pub mod cli;
pub mod core;
pub mod ui;
