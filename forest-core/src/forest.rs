//! Scene assembly: instantiates randomized trees and collects their
//! path fragments into one drawable scene.
//!
//! The typical flow is:
//! 1. Build (or default) a [`ForestConfig`].
//! 2. Call [`compose_forest`] with a randomness source.
//! 3. Hand the returned [`Scene`] to a presentation layer for
//!    serialization (SVG, file, whatever the caller needs).

use crate::branch::{self, BranchSpec, PathFragment};
use crate::config::ForestConfig;
use crate::palette;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

/// Horizontal margin kept clear at both canvas edges when placing roots.
const EDGE_MARGIN: f32 = 50.0;

/// Maximum deviation of a tree's heading from straight up, in radians.
const MAX_TILT: f32 = 0.25;

/// One generated tree: its draw commands and the stroke color chosen
/// for it, in a shape that maps 1:1 onto a stroked vector path.
#[derive(Clone, Debug)]
pub struct TreePath {
    pub fragment: PathFragment,
    pub color: &'static str,
}

/// The assembled output of one composition: canvas metadata plus the
/// generated trees in generation order. Built fresh per call and owned
/// by the caller.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub trees: Vec<TreePath>,
}

/// Composes a forest scene from `cfg`, drawing all randomness from `rng`.
///
/// Each tree roots on the bottom edge at a uniform x within the margins,
/// leans mostly upward (heading `PI/2` plus a tilt in
/// `[-MAX_TILT, MAX_TILT)`), and picks its stroke color uniformly from
/// the palette. Trunk length and depth are fixed by the config.
///
/// ### Parameters
/// - `cfg` - Canvas size, background, tree count, and per-tree shape.
/// - `rng` - Randomness source; pass a seeded generator for
///   reproducible scenes.
///
/// ### Returns
/// A [`Scene`] with exactly `cfg.tree_count` trees.
pub fn compose_forest(cfg: &ForestConfig, rng: &mut impl Rng) -> Scene {
    let mut trees = Vec::with_capacity(cfg.tree_count);

    for _ in 0..cfg.tree_count {
        let x = rng.random_range(EDGE_MARGIN..cfg.width as f32 - EDGE_MARGIN);
        let angle = FRAC_PI_2 + rng.random_range(-MAX_TILT..MAX_TILT);
        let color = palette::random_color(rng);

        let spec = BranchSpec {
            origin: Vec2::new(x, cfg.height as f32),
            angle,
            length: cfg.branch_length,
            depth: cfg.depth,
            color,
        };

        trees.push(TreePath {
            fragment: branch::generate(&spec),
            color,
        });
    }

    Scene {
        width: cfg.width,
        height: cfg.height,
        background: cfg.background,
        trees,
    }
}
