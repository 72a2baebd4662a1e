// Standard Library Imports
use std::path::Path;

// External Crate Imports
use miette::Diagnostic;
use plotters::{coord::Shift, drawing::DrawingAreaErrorKind, prelude::*};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use sifter::Peak;
use thiserror::Error;

// Constants ===========================================================================================================

const CHART_SIZE: (u32, u32) = (1200, 600);
const AXIS_HEADROOM: f64 = 1.1;
// NOTE: Each bar is this fraction of the full m/z axis wide
const BAR_WIDTH: f64 = 0.002;

// Public API ==========================================================================================================

#[derive(Debug, Diagnostic, Error)]
#[error("failed to draw the observed spectrum to {path}")]
pub struct PlotError {
    path: String,
    source: Box<dyn std::error::Error + Send + Sync>,
}

/// Draws peaks as an SVG bar chart of intensity against m/z, one bar per peak
pub fn draw_spectrum(path: &Path, title: &str, peaks: &[Peak]) -> Result<(), PlotError> {
    let to_plot_error = |source: DrawingAreaErrorKind<_>| PlotError {
        path: path.display().to_string(),
        source: Box::new(source),
    };

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_peaks(&root, title, peaks).map_err(to_plot_error)?;
    root.present().map_err(to_plot_error)
}

// Private Helper Functions ============================================================================================

fn draw_peaks<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
    peaks: &[Peak],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    // NOTE: Plotting is the only place where values are approximated as floats
    let bars: Vec<_> = peaks
        .iter()
        .map(|peak| (to_f64(peak.mz.value()), to_f64(peak.intensity)))
        .collect();
    let max_mz = axis_end(bars.iter().map(|&(mz, _)| mz));
    let max_intensity = axis_end(bars.iter().map(|&(_, intensity)| intensity));

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 25))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_mz, 0.0..max_intensity)?;
    chart
        .configure_mesh()
        .x_desc("m/z")
        .y_desc("Intensity")
        .draw()?;

    let half_width = max_mz * BAR_WIDTH / 2.0;
    chart.draw_series(bars.into_iter().map(|(mz, intensity)| {
        Rectangle::new(
            [(mz - half_width, 0.0), (mz + half_width, intensity)],
            BLUE.filled(),
        )
    }))?;

    Ok(())
}

fn axis_end(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 { max * AXIS_HEADROOM } else { 1.0 }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

// Module Tests ========================================================================================================
