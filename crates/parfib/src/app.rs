//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;

use parfib_orchestration::{fib_range, resolve_degree};

use crate::config::AppConfig;
use crate::output::{format_duration, format_series, write_to_file};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let degree = resolve_degree(config.degree);

    let start_time = Instant::now();
    let values = fib_range(config.start, config.count, degree)?;
    let elapsed = start_time.elapsed();

    let line = format_series(&values);
    println!("{line}");

    if let Some(ref path) = config.output {
        write_to_file(path, &line)?;
    }

    if config.verbose {
        eprintln!(
            "Computed {} values (degree {}) in {}",
            values.len(),
            degree,
            format_duration(elapsed)
        );
    }

    Ok(())
}
