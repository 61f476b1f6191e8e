// Plain construction records. Loaders for structured text fill these in;
// the engine turns them into formula objects.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::formula::{EisensteinTerm, WavePacket};
use crate::interfaces::{LatticeType, Symmetry};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ComplexNumber {
    pub real: f64,
    pub imaginary: f64,
}

impl From<ComplexNumber> for Complex64 {
    fn from(value: ComplexNumber) -> Self {
        Complex64::new(value.real, value.imaginary)
    }
}

impl From<Complex64> for ComplexNumber {
    fn from(value: Complex64) -> Self {
        ComplexNumber {
            real: value.re,
            imaginary: value.im,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatticeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for LatticeSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EisensteinTermData {
    pub power_n: i32,
    pub power_m: i32,
}

impl From<EisensteinTermData> for EisensteinTerm {
    fn from(value: EisensteinTermData) -> Self {
        EisensteinTerm::new(value.power_n, value.power_m)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WavePacketData {
    pub multiplier: ComplexNumber,
    pub terms: Vec<EisensteinTermData>,
}

impl From<&WavePacketData> for WavePacket {
    fn from(value: &WavePacketData) -> Self {
        WavePacket::new(
            value.terms.iter().copied().map(EisensteinTerm::from).collect(),
            value.multiplier.into(),
        )
    }
}

/// Everything needed to build a [`crate::formula::WallpaperFormula`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperFormulaData {
    pub lattice_type: LatticeType,
    #[serde(default)]
    pub lattice_size: LatticeSize,
    pub multiplier: ComplexNumber,
    pub wave_packets: Vec<WavePacketData>,
    #[serde(default)]
    pub desired_symmetry: Option<Symmetry>,
}
