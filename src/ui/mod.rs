//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All user-visible output goes through this module so verbosity is handled
//! in one place.

pub mod output;
