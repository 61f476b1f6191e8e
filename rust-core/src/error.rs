use num_complex::Complex64;
use thiserror::Error;

/// Errors raised while preparing a wallpaper formula.
///
/// Both variants come out of lattice validation and are surfaced unchanged
/// through [`crate::formula::WallpaperFormula::setup`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallpaperError {
    #[error("Lattice vectors must be non-zero")]
    DegenerateLattice,

    #[error("Lattice vectors are collinear: x = {vector_x}, y = {vector_y}")]
    CollinearVectors {
        vector_x: Complex64,
        vector_y: Complex64,
    },
}

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, WallpaperError>;
