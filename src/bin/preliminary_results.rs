use picard_plots::{scripts::{preliminary_results, run}, submodules::input_params::PlotParams};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(&preliminary_results::dataset(), &PlotParams::new()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
