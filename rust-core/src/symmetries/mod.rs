// Symmetries module: relationships between wave packets and the plane-group algorithms built on them
// Expansion adds packets, locking adds terms inside packets, detection pairs packets up

// ======================== MODULE DECLARATIONS ========================
pub mod coefficient_relationships;
pub mod symmetry_detection;
pub mod symmetry_expansion;
pub mod term_locking;

// Test modules
mod _tests_coefficient_relationships;

// ======================== COEFFICIENT RELATIONSHIPS ========================
pub use coefficient_relationships::{
    CoefficientRelationship,             // enum - 16 named (term, multiplier) transforms
    get_all_possible_term_relationships, // fn(term1, term2, multiplier1, multiplier2) -> Vec<CoefficientRelationship>
    multipliers_are_negated,             // fn(multiplier1, multiplier2) -> bool - exact
    multipliers_are_the_same,            // fn(multiplier1, multiplier2) -> bool - exact
    satisfies_relationship,              // fn(term1, term2, multiplier1, multiplier2, relationship) -> bool
};
// CoefficientRelationship impl methods:
//   transform_powers(self, term: &EisensteinTerm) -> EisensteinTerm
//   apply(self, term: &EisensteinTerm, multiplier: Complex64) -> (EisensteinTerm, Complex64)

// ======================== SYMMETRY EXPANSION ========================
pub use symmetry_expansion::{
    partner_wave_packets,     // fn(wave_packet: &WavePacket, desired_symmetry: Symmetry) -> Vec<WavePacket>
    satisfy_desired_symmetry, // fn(wave_packets: &mut Vec<WavePacket>, desired_symmetry: Symmetry) -> usize
};
// Symmetry::generating_relationships(&self) -> &'static [CoefficientRelationship]

// ======================== LATTICE TERM LOCKING ========================
pub use term_locking::{
    lock_eisenstein_terms_based_on_relationship, // fn(wave_packets: &mut [WavePacket], lattice_type: LatticeType)
    lock_terms, // fn(wave_packet: &mut WavePacket, relationships: &[CoefficientRelationship])
};
// LatticeType::locked_relationships(&self) -> &'static [CoefficientRelationship]

// ======================== SYMMETRY DETECTION ========================
pub use symmetry_detection::{
    can_wave_packets_be_grouped_among_coefficient_relationships, // fn(wave_packets, required) -> bool - greedy
    has_symmetry, // fn(wave_packets: &[WavePacket], lattice_type: LatticeType, symmetry: Symmetry) -> bool
};
// LatticeType::has_intrinsic_symmetry(&self, symmetry: Symmetry) -> bool
// LatticeType::required_relationships(&self, symmetry: Symmetry) -> Option<&'static [CoefficientRelationship]>
