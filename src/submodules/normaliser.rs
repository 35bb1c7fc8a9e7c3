use std::f64::consts::PI;

use ndarray::Array1;

use super::{errors::PlotError, type_lib::NumericData};

/// Scale turning the zeroth-order Zernike coefficient of the fuel temperature
/// into a temperature, `1/sqrt(2 pi)`.
pub fn zernike_normalization() -> NumericData {
    1.0 / (2.0 * PI).sqrt()
}

/// Number of Zernike coefficients up to and including `order`.
pub fn zernike_count(order: usize) -> usize {
    (order + 1) * (order + 2) / 2
}

pub struct Normaliser {
    pub multiplier: NumericData,
}

impl Normaliser {
    pub fn new(multiplier: NumericData) -> Self {
        Normaliser { multiplier }
    }

    pub fn zernike() -> Self {
        Normaliser::new(zernike_normalization())
    }

    pub fn normalise(&self, name: &'static str, coeffs: &Array1<NumericData>) -> Result<Array1<NumericData>, PlotError> {
        if coeffs.is_empty() {
            return Err(PlotError::EmptySeries { name });
        }
        Ok(coeffs.mapv(|c| c * self.multiplier))
    }
}
