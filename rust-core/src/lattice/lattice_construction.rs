use num_complex::Complex64;

use crate::interfaces::LatticeType;
use crate::lattice::LatticeVectorPair;

/// Standard lattice vector construction for each supported lattice type.
///
/// `width` and `height` are only read by the lattice types whose shape they
/// control; the returned pair is not validated yet.
pub fn lattice_vectors_for(lattice_type: LatticeType, width: f64, height: f64) -> LatticeVectorPair {
    match lattice_type {
        LatticeType::Generic => generic_lattice(width, height),
        LatticeType::Hexagonal => hexagonal_lattice(),
        LatticeType::Rectangular => rectangular_lattice(height),
        LatticeType::Rhombic => rhombic_lattice(height),
        LatticeType::Square => square_lattice(),
    }
}

/// Oblique lattice: unit x vector, free second vector
pub fn generic_lattice(width: f64, height: f64) -> LatticeVectorPair {
    LatticeVectorPair::new(Complex64::new(1.0, 0.0), Complex64::new(width, height))
}

/// Hexagonal lattice with unit vectors 120° apart
pub fn hexagonal_lattice() -> LatticeVectorPair {
    LatticeVectorPair::new(
        Complex64::new(1.0, 0.0),
        Complex64::new(-0.5, 3.0_f64.sqrt() / 2.0),
    )
}

pub fn rectangular_lattice(height: f64) -> LatticeVectorPair {
    LatticeVectorPair::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, height))
}

/// Rhombic (centered rectangular) lattice, mirrored across the x axis
pub fn rhombic_lattice(height: f64) -> LatticeVectorPair {
    LatticeVectorPair::new(Complex64::new(0.5, height), Complex64::new(0.5, -height))
}

pub fn square_lattice() -> LatticeVectorPair {
    LatticeVectorPair::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0))
}
