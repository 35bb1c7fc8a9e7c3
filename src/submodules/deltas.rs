use ndarray::Array1;
use serde::Serialize;

use super::{errors::PlotError, type_lib::NumericData};

/// Which sample divides the step change when forming the relative change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ReferenceSelector {
    /// `|S[i] - S[i-1]| / S[i-1]`
    Previous,
    /// `|S[i] - S[i-1]| / S[i]`
    Current,
}

impl ReferenceSelector {
    pub fn to_str(&self) -> &str {
        match self {
            ReferenceSelector::Previous => "previous",
            ReferenceSelector::Current => "current",
        }
    }

    fn reference_index(&self, i: usize) -> usize {
        match self {
            ReferenceSelector::Previous => i - 1,
            ReferenceSelector::Current => i,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeriesDeltas {
    pub reference: ReferenceSelector,
    pub absolute: Array1<NumericData>,
    pub relative: Array1<NumericData>,
}

impl SeriesDeltas {
    /// Step-to-step changes of `series`. Index 0 has no predecessor and is 0.
    /// NaN or infinite samples are rejected before any change is formed.
    pub fn compute(name: &'static str, series: &Array1<NumericData>, reference: ReferenceSelector) -> Result<Self, PlotError> {
        let n = series.len();
        if n == 0 {
            return Err(PlotError::EmptySeries { name });
        }
        if let Some(index) = series.iter().position(|v| !v.is_finite()) {
            return Err(PlotError::NonFiniteSample { name, index });
        }

        let mut absolute = Array1::<NumericData>::zeros(n);
        let mut relative = Array1::<NumericData>::zeros(n);
        for i in 1..n {
            let step = (series[i] - series[i - 1]).abs();
            let divisor = series[reference.reference_index(i)];
            if divisor == 0.0 {
                return Err(PlotError::ZeroReference { name, index: i });
            }
            absolute[i] = step;
            relative[i] = step / divisor;
        }

        Ok(SeriesDeltas { reference, absolute, relative })
    }

    pub fn len(&self) -> usize {
        self.absolute.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absolute.is_empty()
    }

    /// Extends both series with trailing zeros up to `len` samples.
    pub fn zero_padded(self, len: usize) -> Self {
        let pad = |a: &Array1<NumericData>| Array1::from_shape_fn(len.max(a.len()), |i| a.get(i).copied().unwrap_or(0.0));
        SeriesDeltas {
            reference: self.reference,
            absolute: pad(&self.absolute),
            relative: pad(&self.relative),
        }
    }

    /// Absolute changes rescaled, e.g. to pcm for k_eff.
    pub fn absolute_scaled(&self, factor: NumericData) -> Array1<NumericData> {
        self.absolute.mapv(|d| d * factor)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn first_entry_is_zero_and_changes_are_non_negative() {
        let s = array![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let d = SeriesDeltas::compute("s", &s, ReferenceSelector::Previous).unwrap();
        assert_eq!(d.len(), s.len());
        assert!(!d.is_empty());
        assert_eq!(d.absolute[0], 0.0);
        assert_eq!(d.relative[0], 0.0);
        assert!(d.absolute.iter().all(|&a| a >= 0.0));
        assert_eq!(d.absolute[6], 7.0);
    }

    #[test]
    fn relative_change_uses_the_selected_reference() {
        let s = array![2.0, 4.0, 1.0];
        let prev = SeriesDeltas::compute("s", &s, ReferenceSelector::Previous).unwrap();
        let curr = SeriesDeltas::compute("s", &s, ReferenceSelector::Current).unwrap();

        for i in 1..s.len() {
            assert!((prev.relative[i] - prev.absolute[i] / s[i - 1]).abs() < 1e-9);
            assert!((curr.relative[i] - curr.absolute[i] / s[i]).abs() < 1e-9);
        }
        assert!((prev.relative[1] - 1.0).abs() < 1e-9);
        assert!((curr.relative[1] - 0.5).abs() < 1e-9);
        assert!((curr.relative[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn single_sample_has_no_change() {
        let d = SeriesDeltas::compute("s", &array![0.42], ReferenceSelector::Current).unwrap();
        assert_eq!(d.absolute, array![0.0]);
        assert_eq!(d.relative, array![0.0]);
    }

    #[test]
    fn zero_reference_is_a_domain_error() {
        let s = array![0.0, 1.0, 2.0];
        let err = SeriesDeltas::compute("k_eff", &s, ReferenceSelector::Previous).unwrap_err();
        assert!(matches!(err, PlotError::ZeroReference { name: "k_eff", index: 1 }));

        let s = array![1.0, 0.0];
        let err = SeriesDeltas::compute("temp", &s, ReferenceSelector::Current).unwrap_err();
        assert!(matches!(err, PlotError::ZeroReference { index: 1, .. }));

        // leading zero is fine when the divisor is the current sample
        assert!(SeriesDeltas::compute("temp", &array![0.0, 1.0], ReferenceSelector::Current).is_ok());
    }

    #[test]
    fn non_finite_samples_are_rejected() {
        let err = SeriesDeltas::compute("k_eff", &array![1.0, f64::NAN, 2.0], ReferenceSelector::Previous).unwrap_err();
        assert!(matches!(err, PlotError::NonFiniteSample { name: "k_eff", index: 1 }));

        let err = SeriesDeltas::compute("temp", &array![1.0, 2.0, f64::INFINITY], ReferenceSelector::Current).unwrap_err();
        assert!(matches!(err, PlotError::NonFiniteSample { index: 2, .. }));

        // a NaN in the first slot is never a divisor for `Current`, still rejected
        let err = SeriesDeltas::compute("temp", &array![f64::NAN, 2.0], ReferenceSelector::Current).unwrap_err();
        assert!(matches!(err, PlotError::NonFiniteSample { index: 0, .. }));
    }

    #[test]
    fn empty_series_is_rejected() {
        let err = SeriesDeltas::compute("k_eff", &Array1::zeros(0), ReferenceSelector::Previous).unwrap_err();
        assert!(matches!(err, PlotError::EmptySeries { .. }));
    }

    #[test]
    fn zero_padding_keeps_the_computed_prefix() {
        let d = SeriesDeltas::compute("s", &array![2.0, 4.0], ReferenceSelector::Previous).unwrap().zero_padded(4);
        assert_eq!(d.len(), 4);
        assert_eq!(d.absolute, array![0.0, 2.0, 0.0, 0.0]);
        assert_eq!(d.relative, array![0.0, 1.0, 0.0, 0.0]);
        assert_eq!(d.zero_padded(1).len(), 4);
    }

    #[test]
    fn selector_names() {
        assert_eq!(ReferenceSelector::Previous.to_str(), "previous");
        assert_eq!(ReferenceSelector::Current.to_str(), "current");
    }

    #[test]
    fn pcm_scaling() {
        let d = SeriesDeltas::compute("k", &array![0.421719, 0.422127], ReferenceSelector::Previous).unwrap();
        let pcm = d.absolute_scaled(1e5);
        assert!((pcm[1] - 40.8).abs() < 1e-6);
    }
}
