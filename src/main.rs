//! Run binary: generate the scenario dataset, export CSV + manifest,
//! render the chart. Exits non-zero with a descriptive message on any
//! generation error; output-write failures retry once into the system
//! temp directory before giving up.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trendlab::axis::SampleAxis;
use trendlab::config::{self, Scenario};
use trendlab::dataset::Dataset;
use trendlab::export::{self, RunManifest};
use trendlab::render;
use trendlab::trajectory::EntityTrajectory;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scenario = config::scenario();
    let dataset = build_dataset(&scenario)?;
    info!(
        rows = dataset.num_rows(),
        entities = dataset.num_entities(),
        "dataset assembled"
    );

    let primary = Path::new("target/trends");
    if let Err(e) = emit_outputs(&dataset, &scenario, primary) {
        warn!(error = %e, dir = %primary.display(), "output failed, retrying in temp dir");
        let fallback = std::env::temp_dir().join("trendlab");
        emit_outputs(&dataset, &scenario, &fallback)
            .with_context(|| format!("fallback output to {} failed", fallback.display()))?;
    }

    Ok(())
}

/// Build the axis and generate every entity's trajectory in parallel, each
/// with its own seeded noise stream.
fn build_dataset(scenario: &Scenario) -> anyhow::Result<Dataset> {
    let axis = SampleAxis::build(scenario.start, scenario.end, scenario.interval_days)
        .context("sample axis configuration rejected")?;
    info!(
        points = axis.len(),
        start = %axis.first(),
        end = %axis.last(),
        "built weekly sample axis"
    );

    let columns: Vec<(String, EntityTrajectory)> = scenario
        .entities
        .par_iter()
        .map(|entity| {
            let mut rng = StdRng::seed_from_u64(scenario.entity_seed(entity.name));
            trendlab::trajectory::generate(entity.name, &axis, &entity.regimes, &mut rng)
                .map(|t| (entity.name.to_string(), t))
        })
        .collect::<trendlab::Result<_>>()
        .context("trajectory generation failed")?;

    Ok(Dataset::assemble(axis, columns)?)
}

fn emit_outputs(dataset: &Dataset, scenario: &Scenario, dir: &Path) -> trendlab::Result<()> {
    let csv_path = dir.join("trends.csv");
    export::write_csv(dataset, &csv_path)?;
    info!(path = %csv_path.display(), "wrote CSV export");

    let manifest = RunManifest::describe(dataset, scenario.base_seed);
    let manifest_path = dir.join("run_manifest.json");
    export::write_manifest(&manifest, &manifest_path)?;
    info!(path = %manifest_path.display(), "wrote run manifest");

    let chart_path = dir.join("trends.png");
    render::render_chart(dataset, &scenario.entities, &chart_path)?;
    info!(path = %chart_path.display(), "rendered chart");

    Ok(())
}
