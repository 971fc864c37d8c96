//! Renders the bundled fixture dataset to a standalone SVG document on
//! stdout.
//!
//! Run with: `cargo run --example svg_scatter_dump --features svg-backend`

use scatter_rs::ScatterEngine;
use scatter_rs::api::ScatterEngineConfig;
use scatter_rs::core::Metric;
use scatter_rs::data::load_csv_path;
use scatter_rs::render::SvgRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = format!(
        "{}/tests/fixtures/health_data.csv",
        env!("CARGO_MANIFEST_DIR")
    );
    let dataset = load_csv_path(&fixture)?;

    let mut engine = ScatterEngine::new(
        SvgRenderer::new(),
        dataset,
        ScatterEngineConfig::dashboard(),
    )?;

    // Optional metric pair from argv, e.g. `-- age smokes`.
    let mut args = std::env::args().skip(1);
    if let Some(x) = args.next() {
        engine.select_x(x.parse::<Metric>()?)?;
    }
    if let Some(y) = args.next() {
        engine.select_y(y.parse::<Metric>()?)?;
    }
    engine.render()?;

    print!("{}", engine.into_renderer().document());
    Ok(())
}
