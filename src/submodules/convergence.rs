use log::debug;
use ndarray::{s, Array, Array1};
use serde::Serialize;

use super::{dataset::PicardDataset, deltas::{ReferenceSelector, SeriesDeltas}, errors::PlotError, normaliser::Normaliser, snapshots::Snapshot, type_lib::{NumericData, PCM}};

pub enum ConvergenceField {
    FuelTemperature,
    FuelTemperatureChange,
    KEff,
    KEffChangePcm,
}

impl ConvergenceField {
    pub fn to_str(&self) -> &str {
        match self {
            ConvergenceField::FuelTemperature => "fuel_temperature",
            ConvergenceField::FuelTemperatureChange => "fuel_temperature_change",
            ConvergenceField::KEff => "k_eff",
            ConvergenceField::KEffChangePcm => "k_eff_change_pcm",
        }
    }
}

/// Everything the figures need, derived from one dataset.
#[derive(Debug, Serialize)]
pub struct ConvergenceSeries {
    pub dataset: &'static str,
    pub iterations: Array1<NumericData>,
    pub fuel_series_offset: usize,
    pub fuel_average_temps: Array1<NumericData>,
    pub fuel_temp_deltas: SeriesDeltas,
    pub k_eff: Array1<NumericData>,
    pub k_eff_deltas: SeriesDeltas,
    pub snapshots: Vec<Snapshot>,
    pub fission_average: Option<Array1<NumericData>>,
}

impl ConvergenceSeries {
    pub fn analyse(dataset: &PicardDataset) -> Result<Self, PlotError> {
        dataset.validate()?;

        let n_iter = dataset.n_iterations();
        let iterations = Array::from_shape_fn(n_iter, |i| i as NumericData);

        let fuel_average_temps = Normaliser::zernike().normalise("fuel_average_coeffs", &dataset.fuel_average_coeffs)?;
        // fuel changes cover the first n_iter samples, the tail stays zero
        let fuel_temp_deltas = SeriesDeltas::compute("fuel_average_temps", &fuel_average_temps.slice(s![..n_iter]).to_owned(), ReferenceSelector::Current)?
            .zero_padded(fuel_average_temps.len());
        let k_eff_deltas = SeriesDeltas::compute("k_eff", &dataset.k_eff, ReferenceSelector::Previous)?;

        let mut snapshots = vec![Snapshot::new(0, dataset.inlet_temps)];
        snapshots.extend(dataset.fluid_layer_temps.select(&dataset.snapshot_iterations)?);

        let fission_average = dataset.fission_distribution.as_ref().map(|f| f.zeroth_order());

        debug!(
            "{}: {} iterations, {} fuel samples from offset {}, {} snapshots",
            dataset.name, n_iter, fuel_average_temps.len(), dataset.fuel_series_offset, snapshots.len()
        );
        debug!(
            "{}: fuel temperature change relative to the {} sample, k_eff change relative to the {} sample",
            dataset.name, fuel_temp_deltas.reference.to_str(), k_eff_deltas.reference.to_str()
        );

        Ok(ConvergenceSeries {
            dataset: dataset.name,
            iterations,
            fuel_series_offset: dataset.fuel_series_offset,
            fuel_average_temps,
            fuel_temp_deltas,
            k_eff: dataset.k_eff.clone(),
            k_eff_deltas,
            snapshots,
            fission_average,
        })
    }

    pub fn n_iterations(&self) -> usize {
        self.iterations.len()
    }

    /// (iteration, value) pairs for one plotted quantity. Changes start at
    /// iteration 1; the fuel series is shifted by its offset so that it lines
    /// up with the k_eff iterations.
    pub fn points(&self, field: &ConvergenceField) -> Vec<(NumericData, NumericData)> {
        let n = self.n_iterations();
        let off = self.fuel_series_offset;
        let points = match field {
            ConvergenceField::FuelTemperature => self.zip_from(0, self.fuel_average_temps.iter().skip(off).take(n).copied()),
            ConvergenceField::FuelTemperatureChange => self.zip_from(1, self.fuel_temp_deltas.relative.iter().skip(1).take(n - 1).copied()),
            ConvergenceField::KEff => self.zip_from(0, self.k_eff.iter().copied()),
            ConvergenceField::KEffChangePcm => self.zip_from(1, self.k_eff_deltas.absolute_scaled(PCM).iter().skip(1).copied()),
        };
        debug!("{}: {} points for {}", self.dataset, points.len(), field.to_str());
        points
    }

    fn zip_from<I: Iterator<Item = NumericData>>(&self, start: usize, values: I) -> Vec<(NumericData, NumericData)> {
        self.iterations.iter().skip(start).copied().zip(values).collect()
    }
}
