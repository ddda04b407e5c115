//! Scavo report demo — exports the two-page report for a sample
//! excavation, standing in for the UI caller.
//!
//! ```text
//! cargo run --example report            # writes Rapporto_Scavo_<date>.svg
//! ```

use scavo::{ExcavationDimensions, ExportReport, ScavoError, SurfaceColors};

fn main() -> Result<(), ScavoError> {
    // Default: WARN for everything, INFO for scavo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=scavo=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scavo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dims = ExcavationDimensions::new(4.0, 3.0, 2.5).with_sfido(0.2);
    let colors = SurfaceColors::default();

    let path = ExportReport::new(&dims, &colors).save(std::path::Path::new("."))?;
    println!("report written to {}", path.display());
    Ok(())
}
