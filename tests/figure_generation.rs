use std::{error::Error, fs, io::ErrorKind, path::PathBuf};

use picard_plots::{
    scripts::{preliminary_results, results, run},
    submodules::{convergence::ConvergenceSeries, errors::PlotError, figures::{convergence_figures, emit}, input_params::PlotParams},
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("picard-plots-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn results_dataset_writes_three_figures_and_dump() {
    let dir = scratch_dir("results");
    let params = PlotParams::new().with_output_dir(&dir);

    let series = run(&results::dataset(), &params).unwrap();
    assert_eq!(series.n_iterations(), 13);

    for stem in ["layer_temps", "temp", "k_eff"] {
        let svg = fs::read_to_string(params.figure_path(stem)).unwrap();
        assert!(svg.contains("<svg"), "{} is not an svg document", stem);
    }
    let layer_svg = fs::read_to_string(params.figure_path("layer_temps")).unwrap();
    assert!(layer_svg.contains("Iteration 12"));

    let dump: serde_json::Value = serde_json::from_str(&fs::read_to_string(params.dump_path()).unwrap()).unwrap();
    assert_eq!(dump["dataset"], "results");
    assert_eq!(dump["snapshots"].as_array().unwrap().len(), 6);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn preliminary_dataset_writes_three_figures() {
    let dir = scratch_dir("preliminary");
    let params = PlotParams::new().with_output_dir(&dir);

    run(&preliminary_results::dataset(), &params).unwrap();
    for stem in ["layer_temps", "temp", "k_eff"] {
        assert!(params.figure_path(stem).is_file());
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn repeated_runs_produce_identical_derived_series() {
    let first = scratch_dir("determinism-a");
    let second = scratch_dir("determinism-b");
    let params_a = PlotParams::new().with_output_dir(&first);
    let params_b = PlotParams::new().with_output_dir(&second);

    run(&preliminary_results::dataset(), &params_a).unwrap();
    run(&preliminary_results::dataset(), &params_b).unwrap();

    let a = fs::read(params_a.dump_path()).unwrap();
    let b = fs::read(params_b.dump_path()).unwrap();
    assert_eq!(a, b);

    fs::remove_dir_all(&first).unwrap();
    fs::remove_dir_all(&second).unwrap();
}

#[test]
fn unwritable_output_keeps_the_io_error() {
    let missing = std::env::temp_dir().join(format!("picard-plots-missing-{}", std::process::id())).join("nested");
    let params = PlotParams::new().with_output_dir(&missing);
    let dataset = results::dataset();
    let series = ConvergenceSeries::analyse(&dataset).unwrap();
    let figures = convergence_figures(&series, &dataset.layout);

    let err = emit(&figures[0], &params).unwrap_err();
    assert!(matches!(&err, PlotError::FigureWrite { source, .. } if source.kind() == ErrorKind::NotFound));
    assert!(err.to_string().contains("layer_temps.svg"));
    let source = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
    assert_eq!(source.map(|io| io.kind()), Some(ErrorKind::NotFound));
}

#[test]
fn unwritable_dump_stops_the_run() {
    let missing = std::env::temp_dir().join(format!("picard-plots-nodump-{}", std::process::id())).join("nested");
    let params = PlotParams::new().with_output_dir(&missing);

    let err = run(&results::dataset(), &params).unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));
    assert!(!params.figure_path("layer_temps").exists());
}

#[test]
fn out_of_range_snapshot_aborts_before_rendering() {
    let dir = scratch_dir("bad-snapshot");
    let params = PlotParams::new().with_output_dir(&dir);
    let mut dataset = results::dataset();
    dataset.snapshot_iterations.push(dataset.fluid_layer_temps.rows());

    let err = run(&dataset, &params).unwrap_err();
    assert!(matches!(err, PlotError::SnapshotOutOfRange { requested: 16, rows: 16 }));
    assert!(!params.dump_path().exists());

    fs::remove_dir_all(&dir).unwrap();
}
