//! Chart rendering
//!
//! Presentation glue: draws one line per entity against the shared date
//! axis and writes a PNG. Consumes a finished dataset and the scenario's
//! entity colors; contributes nothing to the generated values.

use crate::config::EntitySpec;
use crate::dataset::Dataset;
use crate::{Error, Result};
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1400, 800);

/// Render the dataset as a line chart PNG at `path`.
///
/// Entities are looked up in `specs` by column name for their line color;
/// columns without a spec fall back to black.
///
/// # Errors
///
/// [`Error::Render`] on any drawing or backend failure.
pub fn render_chart(dataset: &Dataset, specs: &[EntitySpec], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    draw(dataset, specs, path).map_err(|e| Error::Render(e.to_string()))
}

fn draw(
    dataset: &Dataset,
    specs: &[EntitySpec],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let axis = dataset.axis();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "AI Assistant Popularity Index (Synthetic Weekly Series)",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(axis.first()..axis.last(), 0.0f64..105.0f64)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&|d| d.format("%b %Y").to_string())
        .y_desc("Search Interest (Relative Scale 0-100)")
        .x_desc("Date")
        .draw()?;

    for (entity, trajectory) in dataset.columns() {
        let color = specs
            .iter()
            .find(|s| s.name == entity)
            .map_or(RGBColor(0, 0, 0), |s| {
                RGBColor(s.color.0, s.color.1, s.color.2)
            });
        let points = axis
            .iter()
            .copied()
            .zip(trajectory.values().iter().copied());
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(entity.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
