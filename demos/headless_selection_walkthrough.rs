//! Walks the full selection cycle against the bundled fixture dataset with a
//! headless renderer, printing domains and frame shape after each switch.
//!
//! Run with: `cargo run --example headless_selection_walkthrough`

use scatter_rs::ScatterEngine;
use scatter_rs::api::ScatterEngineConfig;
use scatter_rs::core::Metric;
use scatter_rs::data::load_csv_path;
use scatter_rs::render::NullRenderer;
use scatter_rs::telemetry::init_default_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let fixture = format!(
        "{}/tests/fixtures/health_data.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    let dataset = load_csv_path(&fixture)?;
    println!("loaded {} states from {fixture}", dataset.len());

    let mut engine = ScatterEngine::new(
        NullRenderer::default(),
        dataset,
        ScatterEngineConfig::dashboard(),
    )?;
    engine.render()?;
    report(&engine, "initial");

    engine.select_x(Metric::Income)?;
    report(&engine, "after select_x(income)");

    engine.select_y(Metric::Obesity)?;
    report(&engine, "after select_y(obesity)");

    // Redundant request: no recompute, no render.
    engine.select_y(Metric::Obesity)?;
    report(&engine, "after redundant select_y(obesity)");

    println!("\nsnapshot contract:\n{}", engine.snapshot_json_contract_v1_pretty()?);
    Ok(())
}

fn report(engine: &ScatterEngine<NullRenderer>, label: &str) {
    let selection = engine.selection();
    println!(
        "{label}: x={} {:?}, y={} {:?}",
        selection.x_metric(),
        (engine.x_domain().min(), engine.x_domain().max()),
        selection.y_metric(),
        (engine.y_domain().min(), engine.y_domain().max()),
    );
}
