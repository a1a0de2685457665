//! Chart rendering - loss series to a PNG line chart
//!
//! Output is a fixed-size bitmap with step index on the x axis and loss on
//! the y axis. Any stale artifact at the output path is removed first so a
//! failed render cannot leave a previous run's graph behind to be uploaded.

use std::fs;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::extract::LossSeries;
use crate::{Error, Result};

/// Pixel dimensions of the rendered chart.
pub const FIGURE_SIZE: (u32, u32) = (640, 480);

const TITLE: &str = "Training performance over fixed dataset";

fn to_render_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Axis ranges for a series. The y range is widened when the series is flat
/// so the backend never sees a zero-height plotting area.
fn plot_ranges(series: &LossSeries) -> (Range<f64>, Range<f64>) {
    #[allow(clippy::cast_precision_loss)]
    let x_max = (series.len() - 1).max(1) as f64;

    let mut y_min = series.min();
    let mut y_max = series.max();
    if (y_max - y_min).abs() < f64::EPSILON {
        y_min -= 0.5;
        y_max += 0.5;
    }

    (0.0..x_max, y_min..y_max)
}

/// Render the loss series as a PNG line chart at `outfile`.
///
/// # Errors
///
/// Returns [`Error::Io`] if a stale artifact cannot be removed, or
/// [`Error::Render`] if the chart backend fails.
pub fn render_graph(series: &LossSeries, outfile: &Path) -> Result<()> {
    if outfile.exists() {
        fs::remove_file(outfile)?;
    }

    let (x_range, y_range) = plot_ranges(series);

    let root = BitMapBackend::new(outfile, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(to_render_error)?;

    chart
        .configure_mesh()
        .x_desc("Steps")
        .y_desc("Loss")
        .draw()
        .map_err(to_render_error)?;

    #[allow(clippy::cast_precision_loss)]
    chart
        .draw_series(LineSeries::new(
            series
                .values()
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v)),
            &BLUE,
        ))
        .map_err(to_render_error)?;

    root.present().map_err(to_render_error)?;

    debug!(outfile = %outfile.display(), points = series.len(), "graph rendered");
    Ok(())
}
