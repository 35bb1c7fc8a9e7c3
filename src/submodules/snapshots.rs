use ndarray::Array2;
use serde::Serialize;

use super::{errors::PlotError, type_lib::{LayerRow, NumericData, NUM_FLUID_LAYERS}};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub label: String,
    pub temps: LayerRow,
}

impl Snapshot {
    pub fn new(iteration: usize, temps: LayerRow) -> Self {
        Snapshot { label: format!("Iteration {}", iteration), temps }
    }
}

/// Layer-averaged fluid temperatures, one row per Picard iteration.
pub struct LayerTable {
    pub temps: Array2<NumericData>,
}

impl LayerTable {
    pub fn new(temps: Array2<NumericData>) -> Result<Self, PlotError> {
        if temps.ncols() != NUM_FLUID_LAYERS {
            return Err(PlotError::LengthMismatch { name: "fluid layer columns", expected: NUM_FLUID_LAYERS, found: temps.ncols() });
        }
        Ok(LayerTable { temps })
    }

    pub fn rows(&self) -> usize {
        self.temps.nrows()
    }

    pub fn row(&self, iteration: usize) -> Result<LayerRow, PlotError> {
        if iteration >= self.rows() {
            return Err(PlotError::SnapshotOutOfRange { requested: iteration, rows: self.rows() });
        }
        let row = self.temps.row(iteration);
        let mut out = [0.0; NUM_FLUID_LAYERS];
        for (o, t) in out.iter_mut().zip(row.iter()) {
            *o = *t;
        }
        Ok(out)
    }

    pub fn select(&self, iterations: &[usize]) -> Result<Vec<Snapshot>, PlotError> {
        iterations.iter()
        .map(|&i| self.row(i).map(|temps| Snapshot::new(i, temps)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn table() -> LayerTable {
        LayerTable::new(array![
            [549.396, 548.986, 548.932, 548.928],
            [549.003, 548.093, 547.884, 547.845],
            [548.71, 547.332, 546.883, 546.778],
        ]).unwrap()
    }

    #[test]
    fn selected_rows_keep_order_and_labels() {
        let snaps = table().select(&[2, 0]).unwrap();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[0].label, "Iteration 2");
        assert_eq!(snaps[0].temps, [548.71, 547.332, 546.883, 546.778]);
        assert_eq!(snaps[1].label, "Iteration 0");
    }

    #[test]
    fn row_count_is_out_of_range() {
        let t = table();
        let err = t.select(&[0, t.rows()]).unwrap_err();
        assert!(matches!(err, PlotError::SnapshotOutOfRange { requested: 3, rows: 3 }));
    }

    #[test]
    fn wrong_layer_count_is_rejected() {
        let err = LayerTable::new(Array2::zeros((2, 3))).err().unwrap();
        assert!(matches!(err, PlotError::LengthMismatch { expected: 4, found: 3, .. }));
    }
}
