use std::path::{Path, PathBuf};

pub struct PlotParams {
    pub width: u32,
    pub height: u32,
    pub font_family: &'static str,
    pub legend_font_size: u32,
    pub axis_font_size: u32,
    pub tick_font_size: u32,
    pub output_dir: PathBuf,
    pub extension: &'static str,
}

impl PlotParams {
    pub fn new() -> Self {
        PlotParams {
            width: 800,
            height: 600,
            font_family: "sans-serif",
            legend_font_size: 16,
            axis_font_size: 18,
            tick_font_size: 15,
            output_dir: PathBuf::from("."),
            extension: "svg",
        }
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn figure_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, self.extension))
    }

    pub fn dump_path(&self) -> PathBuf {
        self.output_dir.join("derived_series.json")
    }
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams::new()
    }
}
