use std::ops::Range;

use ndarray::{Array1, Array2};

use super::{errors::PlotError, normaliser::zernike_count, snapshots::LayerTable, type_lib::{LayerRow, NumericData, NUM_FLUID_LAYERS}};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// Fixed axis limits and legend placement for one dataset's figures.
pub struct FigureLayout {
    pub layer_centroid_range: Range<NumericData>,
    pub layer_temp_range: Range<NumericData>,
    pub layer_legend: LegendCorner,
    pub temp_legend: LegendCorner,
    pub k_eff_legend: LegendCorner,
}

/// Zernike expansion coefficients of the fission distribution, one row per
/// Picard iteration.
pub struct FissionDistribution {
    pub zernike_order: usize,
    pub coeffs: Array2<NumericData>,
}

impl FissionDistribution {
    pub fn zeroth_order(&self) -> Array1<NumericData> {
        self.coeffs.column(0).to_owned()
    }
}

pub struct PicardDataset {
    pub name: &'static str,
    /// Zeroth-order Zernike coefficient of the fuel temperature per iteration.
    pub fuel_average_coeffs: Array1<NumericData>,
    /// Index of the fuel coefficient that lines up with Picard iteration 0.
    pub fuel_series_offset: usize,
    pub k_eff: Array1<NumericData>,
    pub fluid_layer_temps: LayerTable,
    /// Uniform inlet condition drawn as the "Iteration 0" profile.
    pub inlet_temps: LayerRow,
    pub snapshot_iterations: Vec<usize>,
    pub fission_distribution: Option<FissionDistribution>,
    pub layout: FigureLayout,
}

impl PicardDataset {
    pub fn n_iterations(&self) -> usize {
        self.k_eff.len()
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        if self.k_eff.is_empty() {
            return Err(PlotError::EmptySeries { name: "k_eff" });
        }
        if self.fuel_average_coeffs.is_empty() {
            return Err(PlotError::EmptySeries { name: "fuel_average_coeffs" });
        }

        let needed = self.fuel_series_offset + self.n_iterations();
        if self.fuel_average_coeffs.len() < needed {
            return Err(PlotError::LengthMismatch {
                name: "fuel_average_coeffs",
                expected: needed,
                found: self.fuel_average_coeffs.len(),
            });
        }

        let layers = self.fluid_layer_temps.temps.ncols();
        if layers != NUM_FLUID_LAYERS {
            return Err(PlotError::LengthMismatch { name: "fluid layer columns", expected: NUM_FLUID_LAYERS, found: layers });
        }
        let rows = self.fluid_layer_temps.rows();
        if let Some(&requested) = self.snapshot_iterations.iter().find(|&&i| i >= rows) {
            return Err(PlotError::SnapshotOutOfRange { requested, rows });
        }

        if let Some(fission) = &self.fission_distribution {
            if fission.coeffs.nrows() != self.n_iterations() {
                return Err(PlotError::LengthMismatch {
                    name: "fission_distribution rows",
                    expected: self.n_iterations(),
                    found: fission.coeffs.nrows(),
                });
            }
            let n_zernike = zernike_count(fission.zernike_order);
            if fission.coeffs.ncols() != n_zernike {
                return Err(PlotError::LengthMismatch {
                    name: "fission_distribution columns",
                    expected: n_zernike,
                    found: fission.coeffs.ncols(),
                });
            }
        }
        Ok(())
    }
}
