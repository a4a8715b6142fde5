// Constants

// Tolerances
pub const TOLERANCE: f64 = 1e-6; // Relative/absolute comparator for distances, matrix entries and scales
pub const VERTEX_MATCH_TOLERANCE: f64 = 1e-6; // Absolute distance when matching transformed vertices

// Group closure
/// Largest group the closure loop may produce before giving up.
/// Icosahedral symmetry (order 120) is the biggest group in the shape library.
pub const DEFAULT_GROUP_SIZE_CAP: usize = 240;
