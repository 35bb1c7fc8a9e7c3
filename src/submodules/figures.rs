use std::{error::Error, ops::Range, path::{Path, PathBuf}};

use enum_dispatch::enum_dispatch;
use log::info;
use plotters::prelude::*;
use plotters_backend::DrawingErrorKind;

use super::{convergence::{ConvergenceField, ConvergenceSeries}, dataset::{FigureLayout, LegendCorner}, errors::PlotError, input_params::PlotParams, snapshots::Snapshot, type_lib::{LayerRow, NumericData, LAYER_CENTROIDS}};

const SNAPSHOT_COLORS: [RGBColor; 6] = [BLACK, RED, MAGENTA, BLUE, GREEN, CYAN];
const MARKER_SIZE: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickFormat {
    Fixed(usize),
    Scientific,
}

impl TickFormat {
    pub fn format(&self, value: NumericData) -> String {
        match self {
            TickFormat::Fixed(decimals) => format!("{:.*}", *decimals, value),
            TickFormat::Scientific => format!("{:.1e}", value),
        }
    }
}

fn legend_position(corner: LegendCorner) -> SeriesLabelPosition {
    match corner {
        LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
        LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

/// Data range widened by 5% on each side. Degenerate ranges get a unit-scaled
/// margin so the axis is never empty.
pub fn padded_range<I: IntoIterator<Item = NumericData>>(values: I) -> Range<NumericData> {
    let (lo, hi) = values.into_iter().fold((NumericData::INFINITY, NumericData::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span > 0.0 { 0.05 * span } else { (0.01 * lo.abs()).max(1e-12) };
    (lo - pad)..(hi + pad)
}

#[enum_dispatch]
pub trait FigureTrait {
    fn file_stem(&self) -> &str;
    fn draw(&self, path: &Path, params: &PlotParams) -> Result<(), Box<dyn Error>>;
}

#[enum_dispatch(FigureTrait)]
pub enum FigureKinds {
    SnapshotFigure(SnapshotFigure),
    DualAxisFigure(DualAxisFigure),
}

/// Layer temperature profiles at selected iterations.
pub struct SnapshotFigure {
    pub stem: &'static str,
    pub centroids: LayerRow,
    pub curves: Vec<Snapshot>,
    pub x_range: Range<NumericData>,
    pub y_range: Range<NumericData>,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub legend: LegendCorner,
}

impl FigureTrait for SnapshotFigure {
    fn file_stem(&self) -> &str {
        self.stem
    }

    fn draw(&self, path: &Path, params: &PlotParams) -> Result<(), Box<dyn Error>> {
        let root = SVGBackend::new(path, (params.width, params.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        chart.configure_mesh()
            .disable_mesh()
            .x_desc(self.x_desc)
            .y_desc(self.y_desc)
            .axis_desc_style((params.font_family, params.axis_font_size))
            .label_style((params.font_family, params.tick_font_size))
            .draw()?;

        for (curve, &color) in self.curves.iter().zip(SNAPSHOT_COLORS.iter().cycle()) {
            let points = self.centroids.iter().copied().zip(curve.temps.iter().copied()).collect::<Vec<_>>();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)).point_size(MARKER_SIZE))?
                .label(curve.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        chart
            .configure_series_labels()
            .position(legend_position(self.legend))
            .label_font((params.font_family, params.legend_font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

pub struct AxisSeries {
    pub label: &'static str,
    pub desc: &'static str,
    pub points: Vec<(NumericData, NumericData)>,
    pub color: RGBColor,
    pub ticks: TickFormat,
}

/// A quantity on the left axis and its per-iteration change on a twin right
/// axis, sharing the iteration axis.
pub struct DualAxisFigure {
    pub stem: &'static str,
    pub x_desc: &'static str,
    pub primary: AxisSeries,
    pub secondary: AxisSeries,
    pub legend: LegendCorner,
}

impl FigureTrait for DualAxisFigure {
    fn file_stem(&self) -> &str {
        self.stem
    }

    fn draw(&self, path: &Path, params: &PlotParams) -> Result<(), Box<dyn Error>> {
        let x_range = padded_range(self.primary.points.iter().chain(self.secondary.points.iter()).map(|p| p.0));
        let y_range = padded_range(self.primary.points.iter().map(|p| p.1));
        let y2_range = padded_range(self.secondary.points.iter().map(|p| p.1));

        let root = SVGBackend::new(path, (params.width, params.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .right_y_label_area_size(90)
            .build_cartesian_2d(x_range.clone(), y_range)?
            .set_secondary_coord(x_range, y2_range);

        let x_fmt = |x: &NumericData| TickFormat::Fixed(0).format(*x);
        let y_fmt = |y: &NumericData| self.primary.ticks.format(*y);
        let y2_fmt = |y: &NumericData| self.secondary.ticks.format(*y);

        chart.configure_mesh()
            .disable_mesh()
            .x_desc(self.x_desc)
            .y_desc(self.primary.desc)
            .axis_desc_style((params.font_family, params.axis_font_size))
            .x_label_style((params.font_family, params.tick_font_size))
            .y_label_style((params.font_family, f64::from(params.tick_font_size)).into_font().color(&self.primary.color))
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .draw()?;

        chart.configure_secondary_axes()
            .y_desc(self.secondary.desc)
            .axis_desc_style((params.font_family, params.axis_font_size))
            .label_style((params.font_family, f64::from(params.tick_font_size)).into_font().color(&self.secondary.color))
            .y_label_formatter(&y2_fmt)
            .draw()?;

        let primary_color = self.primary.color;
        chart
            .draw_series(self.primary.points.iter().map(|&p| Circle::new(p, MARKER_SIZE, primary_color.filled())))?
            .label(self.primary.label)
            .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, primary_color.filled()));

        let secondary_color = self.secondary.color;
        chart
            .draw_secondary_series(LineSeries::new(self.secondary.points.iter().copied(), secondary_color.stroke_width(2)).point_size(MARKER_SIZE))?
            .label(self.secondary.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], secondary_color.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(legend_position(self.legend))
            .label_font((params.font_family, params.legend_font_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

/// The three figures of one dataset: layer profiles, fuel temperature and k_eff.
pub fn convergence_figures(series: &ConvergenceSeries, layout: &FigureLayout) -> Vec<FigureKinds> {
    let layer_temps = SnapshotFigure {
        stem: "layer_temps",
        centroids: LAYER_CENTROIDS,
        curves: series.snapshots.clone(),
        x_range: layout.layer_centroid_range.clone(),
        y_range: layout.layer_temp_range.clone(),
        x_desc: "Layer centroid (cm)",
        y_desc: "Layer-averaged temperature (K)",
        legend: layout.layer_legend,
    };

    let temp = DualAxisFigure {
        stem: "temp",
        x_desc: "Picard iteration number",
        primary: AxisSeries {
            label: "value",
            desc: "Fuel average temperature (K)",
            points: series.points(&ConvergenceField::FuelTemperature),
            color: RED,
            ticks: TickFormat::Fixed(0),
        },
        secondary: AxisSeries {
            label: "relative change",
            desc: "Relative change",
            points: series.points(&ConvergenceField::FuelTemperatureChange),
            color: BLUE,
            ticks: TickFormat::Scientific,
        },
        legend: layout.temp_legend,
    };

    let k_eff = DualAxisFigure {
        stem: "k_eff",
        x_desc: "Picard iteration number",
        primary: AxisSeries {
            label: "value",
            desc: "Infinite multiplication factor",
            points: series.points(&ConvergenceField::KEff),
            color: RED,
            ticks: TickFormat::Fixed(5),
        },
        secondary: AxisSeries {
            label: "absolute change",
            desc: "Absolute change (pcm)",
            points: series.points(&ConvergenceField::KEffChangePcm),
            color: BLUE,
            ticks: TickFormat::Fixed(0),
        },
        legend: layout.k_eff_legend,
    };

    vec![layer_temps.into(), temp.into(), k_eff.into()]
}

/// Failures of the SVG backend's file write keep their `io::Error`; anything
/// else plotters reports is flattened into `Render`.
fn render_error(path: &Path, e: Box<dyn Error>) -> PlotError {
    let path = path.display().to_string();
    match e.downcast::<DrawingAreaErrorKind<std::io::Error>>() {
        Ok(kind) => match *kind {
            DrawingAreaErrorKind::BackendError(DrawingErrorKind::DrawingError(source)) => PlotError::FigureWrite { path, source },
            other => PlotError::Render { path, message: other.to_string() },
        },
        Err(e) => PlotError::Render { path, message: e.to_string() },
    }
}

/// Renders one figure into the output directory and returns where it went.
pub fn emit(figure: &FigureKinds, params: &PlotParams) -> Result<PathBuf, PlotError> {
    let path = params.figure_path(figure.file_stem());
    figure.draw(&path, params).map_err(|e| render_error(&path, e))?;
    info!("wrote {}", path.display());
    Ok(path)
}
