use log::info;

use crate::submodules::{convergence::ConvergenceSeries, dataset::PicardDataset, errors::PlotError, figures::{convergence_figures, emit}, input_params::PlotParams, output_files};

pub mod preliminary_results;
pub mod results;

/// Derives every series of `dataset`, writes them to `derived_series.json`
/// and renders the three figures. Stops at the first failure.
pub fn run(dataset: &PicardDataset, params: &PlotParams) -> Result<ConvergenceSeries, PlotError> {
    info!("processing dataset {}", dataset.name);
    let series = ConvergenceSeries::analyse(dataset)?;

    output_files::print(&series, &params.dump_path())?;

    for figure in convergence_figures(&series, &dataset.layout).iter() {
        emit(figure, params)?;
    }
    Ok(series)
}
