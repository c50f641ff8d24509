//! core
//!
//! Environment resolution, the metadata record, and dump file output.
//!
//! # Modules
//!
//! - [`env`] - Environment abstraction and the preferred/legacy fallback chain
//! - [`vars`] - GitLab CI variable names
//! - [`metadata`] - Metadata snapshot and its JSON form
//! - [`dump`] - Writing revision and metadata files
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Absence of a variable is a value (`""`), never an error
//! - Nothing reads the process environment except [`env::ProcessEnv`]
//! - Every invocation reads the environment fresh

pub mod config;
pub mod dump;
pub mod env;
pub mod metadata;
pub mod vars;
