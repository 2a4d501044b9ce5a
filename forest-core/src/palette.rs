use rand::Rng;

/// Tree stroke colors in natural shades of green.
pub const TREE_COLORS: [&str; 8] = [
    "#2d5a27", // dark green
    "#3a7d32", // forest green
    "#4a8c3f", // medium green
    "#5c9c4c", // light green
    "#6dac59", // pale green
    "#7ebc66", // mint green
    "#8fcc73", // sage green
    "#a0dc80", // lime green
];

/// Picks one palette entry uniformly at random.
pub fn random_color(rng: &mut impl Rng) -> &'static str {
    TREE_COLORS[rng.random_range(0..TREE_COLORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn palette_holds_eight_hex_colors() {
        assert_eq!(TREE_COLORS.len(), 8);
        for color in TREE_COLORS {
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn random_color_always_returns_a_palette_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let color = random_color(&mut rng);
            assert!(TREE_COLORS.contains(&color));
        }
    }
}
