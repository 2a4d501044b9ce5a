use crate::types::Depth;
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

/// Ratio between a child branch's length and its parent's.
pub const LENGTH_DECAY: f32 = 0.7;

/// Angular deviation of each child from its parent's heading, in radians.
pub const SPLIT_ANGLE: f32 = FRAC_PI_4;

/// One branch to draw, plus everything needed to expand its subtree.
///
/// Constructed per recursive call and discarded after use; nothing is
/// mutated after construction.
#[derive(Clone, Copy, Debug)]
pub struct BranchSpec {
    pub origin: Vec2,
    /// Heading in radians. `0` points along +x, `PI/2` straight up on
    /// the canvas given the inverted-y endpoint formula.
    pub angle: f32,
    pub length: f32,
    pub depth: Depth,
    pub color: &'static str,
}

/// A single line-draw command from `start` to `end`, in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

/// Ordered line-draw commands for one tree, in pre-order
/// (branch first, then its left subtree, then its right subtree).
pub type PathFragment = Vec<Line>;

impl BranchSpec {
    /// Endpoint of this branch. The y term is subtracted because canvas
    /// y grows downward while the heading follows math orientation.
    pub fn endpoint(&self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.length * self.angle.cos(),
            self.origin.y - self.length * self.angle.sin(),
        )
    }

    fn child(&self, origin: Vec2, turn: f32) -> Self {
        Self {
            origin,
            angle: self.angle + turn,
            length: self.length * LENGTH_DECAY,
            depth: self.depth - 1,
            color: self.color,
        }
    }
}

/// Recursively expands `spec` into its line-draw commands.
///
/// A spec of depth `d` yields exactly `2^d - 1` lines; depth `0` yields
/// an empty fragment. Pure over its inputs, so identical specs always
/// produce identical fragments.
pub fn generate(spec: &BranchSpec) -> PathFragment {
    let mut lines = Vec::new();
    expand(spec, &mut lines);
    lines
}

fn expand(spec: &BranchSpec, out: &mut PathFragment) {
    if spec.depth == 0 {
        return;
    }

    let end = spec.endpoint();
    out.push(Line {
        start: spec.origin,
        end,
    });

    expand(&spec.child(end, SPLIT_ANGLE), out);
    expand(&spec.child(end, -SPLIT_ANGLE), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn spec(angle: f32, length: f32, depth: Depth) -> BranchSpec {
        BranchSpec {
            origin: Vec2::new(400.0, 300.0),
            angle,
            length,
            depth,
            color: "#2d5a27",
        }
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a - b).length() < 1e-3,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn depth_zero_draws_nothing() {
        assert!(generate(&spec(FRAC_PI_2, 100.0, 0)).is_empty());
    }

    #[test]
    fn line_count_is_two_to_the_depth_minus_one() {
        for (depth, expected) in [(0, 0), (1, 1), (2, 3), (3, 7), (8, 255)] {
            let lines = generate(&spec(FRAC_PI_2, 100.0, depth));
            assert_eq!(lines.len(), expected, "depth {depth}");
        }
    }

    #[test]
    fn first_line_starts_at_the_origin() {
        let s = spec(FRAC_PI_2, 100.0, 3);
        let lines = generate(&s);
        assert_eq!(lines[0].start, s.origin);
    }

    #[test]
    fn downward_branch_ends_below_its_origin() {
        // cos(-PI/2) = 0 and sin(-PI/2) = -1, so the single line runs
        // from (400, 300) straight down to (400, 400).
        let lines = generate(&spec(-FRAC_PI_2, 100.0, 1));
        assert_eq!(lines.len(), 1);
        assert_close(lines[0].end, Vec2::new(400.0, 400.0));
    }

    #[test]
    fn children_fork_from_the_parent_endpoint() {
        let s = spec(FRAC_PI_2, 100.0, 2);
        let lines = generate(&s);

        // Pre-order: parent, left child, right child.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].start, lines[0].end);
        assert_eq!(lines[2].start, lines[0].end);
    }

    #[test]
    fn children_turn_quarter_pi_and_shrink_to_seventy_percent() {
        let s = spec(FRAC_PI_2, 100.0, 2);
        let lines = generate(&s);
        let fork = lines[0].end;

        let left = s.child(fork, SPLIT_ANGLE);
        let right = s.child(fork, -SPLIT_ANGLE);
        assert_close(lines[1].end, left.endpoint());
        assert_close(lines[2].end, right.endpoint());

        for child in &lines[1..] {
            let len = (child.end - child.start).length();
            assert!((len - 70.0).abs() < 1e-2, "child length {len}");
        }
    }

    #[test]
    fn generate_is_deterministic() {
        let s = spec(1.234, 80.0, 5);
        assert_eq!(generate(&s), generate(&s));
    }

    #[test]
    fn zero_length_is_accepted() {
        let lines = generate(&spec(FRAC_PI_2, 0.0, 3));
        assert_eq!(lines.len(), 7);
        for line in &lines {
            assert_eq!(line.start, line.end);
        }
    }
}
