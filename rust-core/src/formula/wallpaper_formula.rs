use log::{debug, warn};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::formula::formula_data::{LatticeSize, WallpaperFormulaData};
use crate::formula::{CalculationResult, WavePacket};
use crate::interfaces::{LatticeType, Symmetry};
use crate::lattice::{lattice_vectors_for, LatticeVectorPair};
use crate::symmetries::{
    has_symmetry, lock_eisenstein_terms_based_on_relationship, satisfy_desired_symmetry,
};

/// A sum of wave packets laid out on a periodic lattice.
///
/// Build it with [`WallpaperFormula::new`] (or [`WallpaperFormula::from_data`]),
/// then call [`WallpaperFormula::setup`] once before evaluating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallpaperFormula {
    pub lattice_type: LatticeType,
    pub lattice_size: LatticeSize,
    /// Filled in by `setup`.
    pub lattice: Option<LatticeVectorPair>,
    pub multiplier: Complex64,
    pub wave_packets: Vec<WavePacket>,
    pub desired_symmetry: Option<Symmetry>,
}

impl WallpaperFormula {
    pub fn new(
        lattice_type: LatticeType,
        lattice_size: LatticeSize,
        multiplier: Complex64,
        wave_packets: Vec<WavePacket>,
        desired_symmetry: Option<Symmetry>,
    ) -> Self {
        Self {
            lattice_type,
            lattice_size,
            lattice: None,
            multiplier,
            wave_packets,
            desired_symmetry,
        }
    }

    /// Build from a construction record and run [`Self::setup`].
    pub fn from_data(data: &WallpaperFormulaData) -> Result<Self> {
        let mut formula = Self::new(
            data.lattice_type,
            data.lattice_size,
            data.multiplier.into(),
            data.wave_packets.iter().map(WavePacket::from).collect(),
            data.desired_symmetry,
        );
        formula.setup()?;
        Ok(formula)
    }

    pub fn is_set_up(&self) -> bool {
        self.lattice.is_some()
    }

    /// Build and validate the lattice vectors, expand wave packets for the
    /// desired symmetry, then lock the lattice's own terms into each packet.
    ///
    /// A second call leaves the formula unchanged.
    pub fn setup(&mut self) -> Result<()> {
        if self.is_set_up() {
            warn!("Wallpaper formula is already set up; skipping");
            return Ok(());
        }

        // 1) Lattice vectors
        let lattice = lattice_vectors_for(
            self.lattice_type,
            self.lattice_size.width,
            self.lattice_size.height,
        );
        lattice.validate()?;

        // 2) Extra wave packets for the desired symmetry
        if let Some(desired_symmetry) = self.desired_symmetry {
            satisfy_desired_symmetry(&mut self.wave_packets, desired_symmetry);
        }

        // 3) Terms the lattice itself forces into every packet
        lock_eisenstein_terms_based_on_relationship(&mut self.wave_packets, self.lattice_type);

        debug!(
            "Set up {} wallpaper formula with {} wave packets",
            self.lattice_type,
            self.wave_packets.len()
        );
        self.lattice = Some(lattice);
        Ok(())
    }

    /// Evaluate the formula at a point in the plane.
    ///
    /// Every packet is averaged over its term count before summing; the sum is
    /// scaled by the formula multiplier. `contribution_by_term` holds each
    /// packet's unaveraged total.
    ///
    /// # Panics
    /// If [`Self::setup`] has not succeeded.
    pub fn calculate(&self, z: Complex64) -> CalculationResult {
        let lattice = self
            .lattice
            .as_ref()
            .expect("WallpaperFormula::setup must succeed before calculate");
        let z_in_lattice_coordinates = lattice.convert_to_lattice_coordinates(z);

        let mut sum = Complex64::new(0.0, 0.0);
        let mut contribution_by_term = Vec::with_capacity(self.wave_packets.len());

        for wave_packet in &self.wave_packets {
            let packet_result = wave_packet.calculate(z_in_lattice_coordinates);
            if !wave_packet.terms.is_empty() {
                sum += packet_result.total / wave_packet.terms.len() as f64;
            }
            contribution_by_term.push(packet_result.total);
        }

        CalculationResult {
            total: sum * self.multiplier,
            contribution_by_term,
        }
    }

    /// Evaluate at many points. Runs on the rayon pool with the `parallel` feature.
    pub fn calculate_many(&self, points: &[Complex64]) -> Vec<CalculationResult> {
        #[cfg(feature = "parallel")]
        {
            points.par_iter().map(|&z| self.calculate(z)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            points.iter().map(|&z| self.calculate(z)).collect()
        }
    }

    pub fn has_symmetry(&self, symmetry: Symmetry) -> bool {
        has_symmetry(&self.wave_packets, self.lattice_type, symmetry)
    }

    /// Every plane group the formula is detected to have.
    pub fn symmetries_present(&self) -> Vec<Symmetry> {
        Symmetry::ALL
            .into_iter()
            .filter(|symmetry| self.has_symmetry(*symmetry))
            .collect()
    }
}
