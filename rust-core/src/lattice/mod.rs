//! Lattice module: basis vectors and change of basis for wallpaper lattices.
//!
//! Quick reference
//! - Types: [`LatticeVectorPair`]
//! - Construction: [`lattice_vectors_for`], [`generic_lattice`], [`hexagonal_lattice`],
//!   [`rectangular_lattice`], [`rhombic_lattice`], [`square_lattice`]

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_construction;
pub mod lattice_vector_pair;


// ======================== LATTICE VECTORS ========================
#[doc(inline)]
pub use lattice_vector_pair::LatticeVectorPair;
// LatticeVectorPair impl methods:
//   new(x: Complex64, y: Complex64) -> Self                       - pair of basis vectors
//   validate(&self) -> Result<()>                                 - rejects zero or collinear vectors
//   convert_to_lattice_coordinates(&self, z: Complex64) -> Complex64 - plane point → (u, v) as u + v i
//   cross_product(&self) -> f64                                   - signed cell area
//   basis_matrix(&self) -> Matrix2<f64>                           - vectors as columns

// ======================== LATTICE CONSTRUCTION ========================
pub use lattice_construction::{
    generic_lattice,     // fn(width: f64, height: f64) -> LatticeVectorPair
    hexagonal_lattice,   // fn() -> LatticeVectorPair
    lattice_vectors_for, // fn(lattice_type: LatticeType, width: f64, height: f64) -> LatticeVectorPair
    rectangular_lattice, // fn(height: f64) -> LatticeVectorPair
    rhombic_lattice,     // fn(height: f64) -> LatticeVectorPair
    square_lattice,      // fn() -> LatticeVectorPair
};
