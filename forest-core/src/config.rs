use crate::types::Depth;

/// Global configuration for forest composition.
#[derive(Clone, Copy, Debug)]
pub struct ForestConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels. Trees root on the bottom edge.
    pub height: u32,
    /// Solid background fill behind the trees.
    pub background: &'static str,
    /// Number of trees to instantiate.
    pub tree_count: usize,
    /// Length of each tree's trunk; children shrink from there.
    pub branch_length: f32,
    /// Recursion depth per tree. A tree draws `2^depth - 1` lines.
    pub depth: Depth,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "skyblue",
            tree_count: 5,
            branch_length: 100.0,
            depth: 8,
        }
    }
}
