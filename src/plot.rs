//! Plot rendering for sampled outstar trajectories.
//!
//! Draws the three history series (normalized activity, normalized
//! weights, target ratios) as time series with `plotters`, one line per
//! sink node, and persists the chart to an image file whose format is
//! chosen by the path extension (`.jpg` for the standard runs).

use crate::error::{OutstarError, Result};
use crate::integrator::History;
use crate::state::NUM_SINKS;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

/// Chart pixel dimensions.
const CHART_SIZE: (u32, u32) = (1200, 700);

const ACTIVITY_COLOR: RGBColor = RED;
const WEIGHT_COLOR: RGBColor = GREEN;
const THETA_COLOR: RGBColor = RGBColor(204, 170, 0);

/// Render a history to an image file.
///
/// Activity is drawn in red, weights in green, and the (constant) theta
/// targets in dark yellow, one line per sink index, against the sampled
/// step number. The file format follows the extension of `path`.
///
/// # Errors
///
/// Returns [`OutstarError::InvalidParameter`] for an empty history and
/// [`OutstarError::Plot`] when the backend fails (e.g. unwritable path).
pub fn render(history: &History, title: &str, path: &Path) -> Result<()> {
    let Some(&last_step) = history.steps.last() else {
        return Err(OutstarError::InvalidParameter(
            "cannot render an empty history".to_string(),
        ));
    };

    let x_max = last_step as f64;
    let y_max = series_max(history).max(1e-3) * 1.1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max.max(1.0), 0.0..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("step")
        .y_desc("normalized value")
        .x_labels(10)
        .draw()
        .map_err(plot_err)?;

    draw_family(&mut chart, history, &history.activity, ACTIVITY_COLOR, "X")?;
    draw_family(&mut chart, history, &history.weight, WEIGHT_COLOR, "W")?;
    draw_family(&mut chart, history, &history.theta, THETA_COLOR, "theta")?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "saved plot");

    Ok(())
}

/// Draw one line per sink index for a family of sampled 4-vectors.
///
/// Only the first line of each family carries a legend entry.
fn draw_family<'a, DB: DrawingBackend + 'a>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    history: &History,
    series: &[[f64; NUM_SINKS]],
    color: RGBColor,
    label: &str,
) -> Result<()> {
    for k in 0..NUM_SINKS {
        let line = history
            .steps
            .iter()
            .zip(series.iter())
            .map(|(&t, v)| (t as f64, v[k]));

        let drawn = chart
            .draw_series(LineSeries::new(line, color))
            .map_err(plot_err)?;

        if k == 0 {
            drawn.label(label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color)
            });
        }
    }
    Ok(())
}

fn series_max(history: &History) -> f64 {
    history
        .activity
        .iter()
        .chain(history.weight.iter())
        .chain(history.theta.iter())
        .flatten()
        .copied()
        .fold(0.0, f64::max)
}

fn plot_err<E: std::fmt::Display>(e: E) -> OutstarError {
    OutstarError::Plot(e.to_string())
}
