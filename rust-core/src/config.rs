// Constants

// Tolerances
pub const LATTICE_TOLERANCE: f64 = 1e-10; // Cross products below this count as collinear

// Full turn, used by every Eisenstein term exponent
pub const TAU: f64 = std::f64::consts::TAU;
