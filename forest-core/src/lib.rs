//! Procedural fractal-forest generation library.
//!
//! Main components:
//! - [`branch`] — branch specs and the recursive path generator.
//! - [`forest`] — scene assembly from randomized trees.
//! - [`config`] — global configuration for forest composition.
//! - [`palette`] — the fixed set of tree stroke colors.
//! - [`types`] — shared type aliases.

pub mod branch;
pub mod config;
pub mod forest;
pub mod palette;
pub mod types;
