use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::formula::EisensteinTerm;

/// Value of a wave packet or formula at one point, plus what each part added.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub total: Complex64,
    pub contribution_by_term: Vec<Complex64>,
}

/// A multiplier-scaled sum of Eisenstein terms.
///
/// Symmetry operations act on whole packets: the expander adds new packets,
/// the lattice locker appends terms to existing ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WavePacket {
    pub terms: Vec<EisensteinTerm>,
    pub multiplier: Complex64,
}

impl WavePacket {
    pub fn new(terms: Vec<EisensteinTerm>, multiplier: Complex64) -> Self {
        Self { terms, multiplier }
    }

    /// Packet holding exactly one term.
    pub fn single(term: EisensteinTerm, multiplier: Complex64) -> Self {
        Self::new(vec![term], multiplier)
    }

    /// The term symmetry expansion, locking and detection look at.
    pub fn first_term(&self) -> Option<&EisensteinTerm> {
        self.terms.first()
    }

    /// Evaluate every term at `z_in_lattice_coordinates`.
    ///
    /// `total` is scaled by the packet multiplier, the per-term contributions
    /// are the raw exponentials.
    pub fn calculate(&self, z_in_lattice_coordinates: Complex64) -> CalculationResult {
        let contribution_by_term: Vec<Complex64> = self
            .terms
            .iter()
            .map(|term| term.calculate(z_in_lattice_coordinates))
            .collect();

        let sum: Complex64 = contribution_by_term.iter().sum();

        CalculationResult {
            total: sum * self.multiplier,
            contribution_by_term,
        }
    }
}
