//! Wallpaper formula library
//!
//! Builds two-dimensional repeating patterns from complex-exponential wave
//! terms on a periodic lattice, forces a chosen plane-group symmetry onto
//! them, and checks which of the 17 wallpaper groups a set of wave packets
//! already has.

pub mod config;
pub mod error;
pub mod formula;
pub mod interfaces;
pub mod lattice;
pub mod symmetries;

pub use error::{Result, WallpaperError};
pub use formula::{WallpaperFormula, WallpaperFormulaData};
pub use interfaces::{LatticeType, Symmetry};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
