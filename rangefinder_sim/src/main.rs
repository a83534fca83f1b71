// rangefinder_sim/src/main.rs

use anyhow::Result;
use clap::Parser;
use rangefinder_sim::prelude::*;
use rangefinder_sim::simulation::logging::init_logging;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    info!(version = env!("CARGO_PKG_VERSION"), "rangefinder starting");

    let result = load_scenario(&cli.scenario).and_then(|config| run_scenario(&config, cli.map_ds));
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "scenario failed");
            return Err(e.into());
        }
    };

    println!("{:>12} {:>12}", "heading_deg", "distance_m");
    for reading in &report.scan.readings {
        println!(
            "{:>12.2} {:>12.3}",
            reading.heading.to_degrees(),
            reading.distance
        );
    }
    if let Some(points) = &report.map_points {
        info!(points = points.len(), "obstacle point map ready");
    }
    Ok(())
}
