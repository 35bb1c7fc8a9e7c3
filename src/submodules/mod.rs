pub mod convergence;
pub mod dataset;
pub mod deltas;
pub mod errors;
pub mod figures;
pub mod input_params;
pub mod normaliser;
pub mod output_files;
pub mod snapshots;
pub mod type_lib;
