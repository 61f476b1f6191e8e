use log::debug;

use crate::formula::WavePacket;
use crate::interfaces::Symmetry;
use crate::symmetries::CoefficientRelationship;

impl Symmetry {
    /// Relationships whose partner packets force this symmetry onto a formula.
    ///
    /// Empty for `p1`, `p3` and `p4`: those need no extra packets (rotations
    /// of order 3 and 4 come from lattice term locking).
    pub fn generating_relationships(&self) -> &'static [CoefficientRelationship] {
        use CoefficientRelationship::*;

        match self {
            Symmetry::P1 | Symmetry::P3 | Symmetry::P4 => &[],
            Symmetry::P2 | Symmetry::P6 => &[MinusNMinusM],
            Symmetry::Pm => &[PlusNMinusM],
            Symmetry::Pg => &[PlusNMinusMNegateMultiplierIfOddPowerN],
            Symmetry::Pmm => &[MinusNMinusM, MinusNPlusM, PlusNMinusM],
            Symmetry::Pmg => &[
                MinusNMinusM,
                MinusNPlusMNegateMultiplierIfOddPowerN,
                PlusNMinusMNegateMultiplierIfOddPowerN,
            ],
            Symmetry::Pgg => &[
                MinusNMinusM,
                MinusNPlusMNegateMultiplierIfOddPowerSum,
                PlusNMinusMNegateMultiplierIfOddPowerSum,
            ],
            Symmetry::Cm | Symmetry::P4m | Symmetry::P31m => &[PlusMPlusN],
            Symmetry::Cmm | Symmetry::P6m => &[MinusNMinusM, PlusMPlusN, MinusMMinusN],
            Symmetry::P3m1 => &[MinusMMinusN],
            Symmetry::P4g => &[PlusMPlusNNegateMultiplierIfOddPowerSum],
        }
    }
}

/// Single-term partner packets of one packet for the desired symmetry.
///
/// Only the first term and the multiplier of `wave_packet` are read.
pub fn partner_wave_packets(wave_packet: &WavePacket, desired_symmetry: Symmetry) -> Vec<WavePacket> {
    let Some(first_term) = wave_packet.first_term() else {
        return Vec::new();
    };

    desired_symmetry
        .generating_relationships()
        .iter()
        .map(|relationship| {
            let (term, multiplier) = relationship.apply(first_term, wave_packet.multiplier);
            WavePacket::single(term, multiplier)
        })
        .collect()
}

/// Append the partner packets every existing packet needs for `desired_symmetry`.
///
/// Existing packets are left untouched and generated packets are not expanded
/// again, so the list grows to `original × (1 + generated per packet)`.
/// Returns the number of packets added.
pub fn satisfy_desired_symmetry(wave_packets: &mut Vec<WavePacket>, desired_symmetry: Symmetry) -> usize {
    let generated: Vec<WavePacket> = wave_packets
        .iter()
        .flat_map(|wave_packet| partner_wave_packets(wave_packet, desired_symmetry))
        .collect();

    let added = generated.len();
    wave_packets.extend(generated);

    debug!(
        "Expanded formula for {}: {} wave packets added, {} total",
        desired_symmetry,
        added,
        wave_packets.len()
    );
    added
}
