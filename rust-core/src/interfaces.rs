// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lattice shapes a wallpaper formula can be laid out on.
///
/// The lattice type selects how the basis vectors are built, which terms are
/// locked into every wave packet, and which symmetries can be detected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LatticeType {
    Generic,
    Hexagonal,
    Rectangular,
    Rhombic,
    Square,
}

impl LatticeType {
    pub const ALL: [LatticeType; 5] = [
        LatticeType::Generic,
        LatticeType::Hexagonal,
        LatticeType::Rectangular,
        LatticeType::Rhombic,
        LatticeType::Square,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LatticeType::Generic => "generic",
            LatticeType::Hexagonal => "hexagonal",
            LatticeType::Rectangular => "rectangular",
            LatticeType::Rhombic => "rhombic",
            LatticeType::Square => "square",
        }
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 17 plane (wallpaper) groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    P1,
    P2,
    P3,
    P3m1,
    P31m,
    P6,
    P6m,
    P4,
    P4m,
    P4g,
    Cm,
    Cmm,
    Pm,
    Pg,
    Pgg,
    Pmm,
    Pmg,
}

impl Symmetry {
    pub const ALL: [Symmetry; 17] = [
        Symmetry::P1,
        Symmetry::P2,
        Symmetry::P3,
        Symmetry::P3m1,
        Symmetry::P31m,
        Symmetry::P6,
        Symmetry::P6m,
        Symmetry::P4,
        Symmetry::P4m,
        Symmetry::P4g,
        Symmetry::Cm,
        Symmetry::Cmm,
        Symmetry::Pm,
        Symmetry::Pg,
        Symmetry::Pgg,
        Symmetry::Pmm,
        Symmetry::Pmg,
    ];

    /// Crystallographic short name, e.g. `p31m`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symmetry::P1 => "p1",
            Symmetry::P2 => "p2",
            Symmetry::P3 => "p3",
            Symmetry::P3m1 => "p3m1",
            Symmetry::P31m => "p31m",
            Symmetry::P6 => "p6",
            Symmetry::P6m => "p6m",
            Symmetry::P4 => "p4",
            Symmetry::P4m => "p4m",
            Symmetry::P4g => "p4g",
            Symmetry::Cm => "cm",
            Symmetry::Cmm => "cmm",
            Symmetry::Pm => "pm",
            Symmetry::Pg => "pg",
            Symmetry::Pgg => "pgg",
            Symmetry::Pmm => "pmm",
            Symmetry::Pmg => "pmg",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
