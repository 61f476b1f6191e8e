// Formula module: Eisenstein terms, wave packets and the wallpaper formula that combines them
// Evaluation works in lattice coordinates; the formula converts plane points first

// ======================== MODULE DECLARATIONS ========================
pub mod eisenstein_term;
pub mod formula_data;
pub mod wallpaper_formula;
pub mod wave_packet;


// ======================== WAVE TERMS ========================
pub use eisenstein_term::EisensteinTerm; // struct - integer powers (n, m) of exp(2πi(n·u + m·v))
// EisensteinTerm impl methods:
//   new(power_n: i32, power_m: i32) -> Self
//   power_sum_is_even(&self) -> bool                              - parity of n + m
//   power_n_is_even(&self) -> bool                                - parity of n
//   calculate(&self, z_in_lattice_coordinates: Complex64) -> Complex64 - unit-magnitude wave value

pub use wave_packet::{
    CalculationResult, // struct - total value plus per-part contributions
    WavePacket,        // struct - multiplier-scaled sum of Eisenstein terms
};
// WavePacket impl methods:
//   new(terms: Vec<EisensteinTerm>, multiplier: Complex64) -> Self
//   single(term: EisensteinTerm, multiplier: Complex64) -> Self
//   first_term(&self) -> Option<&EisensteinTerm>                  - term read by symmetry algorithms
//   calculate(&self, z_in_lattice_coordinates: Complex64) -> CalculationResult - scaled total, raw term values

// ======================== FORMULA ========================
pub use wallpaper_formula::WallpaperFormula;
// WallpaperFormula impl methods:
//   new(lattice_type, lattice_size, multiplier, wave_packets, desired_symmetry) -> Self
//   from_data(data: &WallpaperFormulaData) -> Result<Self>        - build from record and set up
//   setup(&mut self) -> Result<()>                                - lattice, expansion, term locking
//   calculate(&self, z: Complex64) -> CalculationResult           - averaged packets, scaled sum
//   calculate_many(&self, points: &[Complex64]) -> Vec<CalculationResult>
//   has_symmetry(&self, symmetry: Symmetry) -> bool
//   symmetries_present(&self) -> Vec<Symmetry>

// ======================== CONSTRUCTION RECORDS ========================
pub use formula_data::{
    ComplexNumber,        // struct - { real, imaginary }
    EisensteinTermData,   // struct - { powerN, powerM }
    LatticeSize,          // struct - { width, height }
    WallpaperFormulaData, // struct - full formula description
    WavePacketData,       // struct - { multiplier, terms }
};
