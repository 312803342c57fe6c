//! Pace bar chart rendering via plotters.

use crate::error::{RunError, RunResult};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1000, 600);
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Render the per-kilometer pace series as a PNG bar chart at `path`.
///
/// An empty series is a logged no-op: nothing is written and no error is
/// raised.
pub fn render_pace_chart(pace: &[f64], path: &Path, start_time_local: &str) -> RunResult<()> {
    if pace.is_empty() {
        info!("no 1 km lap data found to generate a chart");
        return Ok(());
    }

    let max_pace = pace.iter().copied().fold(0.0_f64, f64::max);
    let y_top = max_pace * 1.2;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Pace per Kilometer for Run on {start_time_local}"),
            ("sans-serif", 24),
        )
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d((1..pace.len() + 1).into_segmented(), 0.0..y_top)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (km)")
        .y_desc("Pace (min/km)")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(km) | SegmentValue::Exact(km) => format!("{km} km"),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(pace.iter().enumerate().map(|(i, &p)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i + 1), 0.0),
                    (SegmentValue::Exact(i + 2), p),
                ],
                BAR_COLOR.filled(),
            )
        }))
        .map_err(chart_err)?;

    // Annotate each bar with its pace to two decimals.
    chart
        .draw_series(pace.iter().enumerate().map(|(i, &p)| {
            Text::new(
                format!("{p:.2}"),
                (SegmentValue::CenterOf(i + 1), p + y_top * 0.02),
                ("sans-serif", 14),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> RunError {
    RunError::Chart(e.to_string())
}
