use log::trace;
use num_complex::Complex64;

use crate::formula::{EisensteinTerm, WavePacket};
use crate::interfaces::{LatticeType, Symmetry};
use crate::symmetries::coefficient_relationships::{satisfies_relationship, CoefficientRelationship};

impl LatticeType {
    /// Symmetries every formula on this lattice has once its terms are locked.
    pub fn has_intrinsic_symmetry(&self, symmetry: Symmetry) -> bool {
        matches!(
            (self, symmetry),
            (_, Symmetry::P1)
                | (LatticeType::Hexagonal, Symmetry::P3)
                | (LatticeType::Square, Symmetry::P4)
        )
    }

    /// Relationships the wave packets must pair up under for `symmetry` to hold.
    ///
    /// `None` when the symmetry cannot be detected on this lattice type.
    pub fn required_relationships(&self, symmetry: Symmetry) -> Option<&'static [CoefficientRelationship]> {
        use Symmetry::*;

        let detectable = match self {
            LatticeType::Generic => matches!(symmetry, P2),
            LatticeType::Rectangular => matches!(symmetry, P2 | Pm | Pg | Pmm | Pmg | Pgg),
            LatticeType::Rhombic => matches!(symmetry, Cm | Cmm),
            LatticeType::Hexagonal => matches!(symmetry, P31m | P3m1 | P6 | P6m),
            LatticeType::Square => matches!(symmetry, P4m | P4g),
        };

        detectable.then(|| symmetry.generating_relationships())
    }
}

fn first_term_and_multiplier(wave_packet: &WavePacket) -> Option<(&EisensteinTerm, Complex64)> {
    wave_packet
        .first_term()
        .map(|term| (term, wave_packet.multiplier))
}

/// Greedy one-pass grouping of wave packets by relationship.
///
/// Each unmatched packet claims, for every required relationship, the first
/// later unmatched packet whose first term and multiplier satisfy it. Fails as
/// soon as a packet cannot complete its group. Order dependent: this is not a
/// maximum matching search.
pub fn can_wave_packets_be_grouped_among_coefficient_relationships(
    wave_packets: &[WavePacket],
    required_relationships: &[CoefficientRelationship],
) -> bool {
    let count = wave_packets.len();
    if count < 2 || count % 2 != 0 {
        return false;
    }

    let mut matched = vec![false; count];

    for a in 0..count {
        if matched[a] {
            continue;
        }

        let Some((term_a, multiplier_a)) = first_term_and_multiplier(&wave_packets[a]) else {
            trace!("Wave packet {} has no terms to match", a);
            return false;
        };

        for relationship in required_relationships {
            let partner = (a + 1..count).find(|&b| {
                !matched[b]
                    && first_term_and_multiplier(&wave_packets[b]).is_some_and(
                        |(term_b, multiplier_b)| {
                            satisfies_relationship(
                                term_a,
                                term_b,
                                multiplier_a,
                                multiplier_b,
                                *relationship,
                            )
                        },
                    )
            });

            match partner {
                Some(b) => matched[b] = true,
                None => {
                    trace!("Wave packet {} has no partner for {:?}", a, relationship);
                    return false;
                }
            }
        }

        matched[a] = true;
    }

    true
}

/// Decide whether wave packets on the given lattice already exhibit `symmetry`.
pub fn has_symmetry(wave_packets: &[WavePacket], lattice_type: LatticeType, symmetry: Symmetry) -> bool {
    if lattice_type.has_intrinsic_symmetry(symmetry) {
        return true;
    }

    match lattice_type.required_relationships(symmetry) {
        Some(required) => {
            can_wave_packets_be_grouped_among_coefficient_relationships(wave_packets, required)
        }
        None => false,
    }
}
