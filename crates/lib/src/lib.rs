//! toybuild-lib: Core types and logic for toybuild
//!
//! This crate drives a headless Unity editor build:
//! - `platform`: host OS detection
//! - `editor`: pinned editor install locations
//! - `version`: build labels and `version.txt` maintenance
//! - `target`: build targets, scripting backends and output naming
//! - `request`: the fully resolved, immutable build request
//! - `invoke`: command-line construction and the streaming build runner

pub mod consts;
pub mod editor;
pub mod error;
pub mod invoke;
pub mod platform;
pub mod request;
pub mod target;
pub mod version;

#[cfg(test)]
pub(crate) mod util;

pub use error::{BuildError, Result};
