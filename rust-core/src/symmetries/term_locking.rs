use log::debug;

use crate::formula::WavePacket;
use crate::interfaces::LatticeType;
use crate::symmetries::CoefficientRelationship;

impl LatticeType {
    /// Transforms folded into every wave packet to give the lattice its own
    /// rotational or mirror symmetry.
    pub fn locked_relationships(&self) -> &'static [CoefficientRelationship] {
        use CoefficientRelationship::*;

        match self {
            LatticeType::Generic | LatticeType::Rectangular => &[],
            LatticeType::Hexagonal => &[PlusMMinusSumNAndM, MinusSumNAndMPlusN],
            LatticeType::Rhombic => &[PlusMPlusN],
            LatticeType::Square => &[PlusMMinusN, MinusNMinusM, MinusMPlusN],
        }
    }
}

/// Append the locked terms derived from the packet's first term.
///
/// The packet keeps its single multiplier; only powers are transformed.
pub fn lock_terms(wave_packet: &mut WavePacket, relationships: &[CoefficientRelationship]) {
    let Some(first_term) = wave_packet.first_term().copied() else {
        return;
    };

    wave_packet.terms.extend(
        relationships
            .iter()
            .map(|relationship| relationship.transform_powers(&first_term)),
    );
}

/// Lock lattice symmetry terms into every packet. No-op for generic and
/// rectangular lattices.
pub fn lock_eisenstein_terms_based_on_relationship(
    wave_packets: &mut [WavePacket],
    lattice_type: LatticeType,
) {
    let relationships = lattice_type.locked_relationships();
    if relationships.is_empty() {
        return;
    }

    for wave_packet in wave_packets.iter_mut() {
        lock_terms(wave_packet, relationships);
    }

    debug!(
        "Locked {} extra terms into each of {} wave packets ({} lattice)",
        relationships.len(),
        wave_packets.len(),
        lattice_type
    );
}
