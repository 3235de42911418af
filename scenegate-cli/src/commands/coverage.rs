//! Coverage command - summarize the DEM coverage map.

use std::path::PathBuf;

use crate::error::CliError;
use crate::runner::{CliRunner, GlobalOptions};

/// Run the coverage command.
pub fn run(options: &GlobalOptions, file: Option<PathBuf>) -> Result<(), CliError> {
    let mut runner = CliRunner::new(options)?;
    runner.log_startup("coverage");

    if let Some(path) = file {
        runner.config_mut().coverage.file = Some(path);
    }
    let source = match &runner.config().coverage.file {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    };

    let map = runner.load_coverage()?;

    println!("DEM coverage map ({})", source);
    println!("  Polygons: {}", map.len());
    if let Some(bounds) = map.bounding_rect() {
        println!(
            "  Bounds:   lon {:.3} to {:.3}, lat {:.3} to {:.3}",
            bounds.min().x,
            bounds.max().x,
            bounds.min().y,
            bounds.max().y
        );
    }
    println!("  Area:     {:.1} square degrees", map.area());
    Ok(())
}
