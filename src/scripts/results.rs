use ndarray::array;

use crate::submodules::{dataset::{FigureLayout, LegendCorner, PicardDataset}, snapshots::LayerTable};

/// The run reported in the paper: 13 Picard iterations.
pub fn dataset() -> PicardDataset {
    // BISON reports one extra leading coefficient, so iteration 0 is index 1
    let fuel_average_coeffs = array![1439.62, 1482.52, 1511.53, 1531.62, 1545.81, 1555.94, 1563.32,
        1568.77, 1572.89, 1576.12, 1578.65, 1580.67, 1582.34, 1583.81];

    // track-length estimator
    let k_eff = array![0.421938, 0.422131, 0.421846, 0.421886, 0.421681, 0.421513, 0.421467,
        0.421501, 0.421384, 0.421256, 0.421331, 0.421347, 0.421303];

    let fluid_layer_temps = array![
        [550.0, 550.0, 550.0, 500.0],
        [550.604, 551.014, 551.068, 551.072],
        [550.997, 551.907, 552.116, 552.155],
        [551.29, 552.668, 553.117, 553.222],
        [551.529, 553.328, 554.055, 554.258],
        [551.733, 553.914, 554.927, 555.252],
        [551.913, 554.44, 555.737, 556.197],
        [552.075, 554.918, 556.489, 557.088],
        [552.221, 555.356, 557.188, 557.925],
        [552.355, 555.758, 557.837, 558.708],
        [552.478, 556.13, 558.44, 559.439],
        [552.591, 556.473, 559.001, 560.12],
        [552.695, 556.792, 559.522, 560.755],
        [552.792, 557.087, 560.006, 561.345],
        [552.882, 557.361, 560.456, 561.895],
        [552.965, 557.615, 560.874, 562.406],
    ];

    PicardDataset {
        name: "results",
        fuel_average_coeffs,
        fuel_series_offset: 1,
        k_eff,
        fluid_layer_temps: LayerTable { temps: fluid_layer_temps },
        inlet_temps: [550.0; 4],
        snapshot_iterations: vec![5, 8, 10, 11, 12],
        fission_distribution: None,
        layout: FigureLayout {
            layer_centroid_range: 0.0..1.0,
            layer_temp_range: 548.0..564.0,
            layer_legend: LegendCorner::UpperLeft,
            temp_legend: LegendCorner::LowerLeft,
            k_eff_legend: LegendCorner::UpperRight,
        },
    }
}
