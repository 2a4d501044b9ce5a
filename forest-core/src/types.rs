/// Remaining recursion depth of a branch expansion.
///
/// Depth strictly decreases by one at each split, and a branch with
/// depth `0` draws nothing and ends the recursion.
pub type Depth = u32;
