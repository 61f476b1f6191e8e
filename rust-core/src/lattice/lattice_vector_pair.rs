use nalgebra::{Matrix2, Vector2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::LATTICE_TOLERANCE;
use crate::error::{Result, WallpaperError};

/// Two basis vectors spanning a 2D lattice, stored as points in the complex plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatticeVectorPair {
    pub x_lattice_vector: Complex64,
    pub y_lattice_vector: Complex64,
}

impl LatticeVectorPair {
    pub fn new(x_lattice_vector: Complex64, y_lattice_vector: Complex64) -> Self {
        Self {
            x_lattice_vector,
            y_lattice_vector,
        }
    }

    /// Basis matrix with the two lattice vectors as columns.
    pub fn basis_matrix(&self) -> Matrix2<f64> {
        Matrix2::from_columns(&[
            as_column(self.x_lattice_vector),
            as_column(self.y_lattice_vector),
        ])
    }

    /// 2D cross product of the basis vectors, i.e. the signed cell area.
    pub fn cross_product(&self) -> f64 {
        self.basis_matrix().determinant()
    }

    /// Check that the vectors span the plane.
    ///
    /// Zero vectors are rejected before the collinearity test so callers can
    /// tell the two failure modes apart.
    pub fn validate(&self) -> Result<()> {
        let zero = Complex64::new(0.0, 0.0);
        if self.x_lattice_vector == zero || self.y_lattice_vector == zero {
            return Err(WallpaperError::DegenerateLattice);
        }

        if self.cross_product().abs() < LATTICE_TOLERANCE {
            return Err(WallpaperError::CollinearVectors {
                vector_x: self.x_lattice_vector,
                vector_y: self.y_lattice_vector,
            });
        }

        Ok(())
    }

    /// Express `z` as `u * x + v * y` and return `u + v i`.
    ///
    /// Solved with Cramer's rule. The pair must have passed [`Self::validate`].
    pub fn convert_to_lattice_coordinates(&self, z: Complex64) -> Complex64 {
        let x = as_column(self.x_lattice_vector);
        let y = as_column(self.y_lattice_vector);
        let point = as_column(z);

        let denominator = self.cross_product();
        let u = Matrix2::from_columns(&[point, y]).determinant() / denominator;
        let v = Matrix2::from_columns(&[x, point]).determinant() / denominator;

        Complex64::new(u, v)
    }
}

fn as_column(z: Complex64) -> Vector2<f64> {
    Vector2::new(z.re, z.im)
}
