//! Application configuration from CLI flags and environment.

use clap::Parser;

use parfib_core::constants::DEFAULT_DEGREE;

/// ParFib — parallel closed-form Fibonacci range calculator.
#[derive(Parser, Debug)]
#[command(name = "parfib", version, about)]
pub struct AppConfig {
    /// First Fibonacci index to compute.
    #[arg(short, long, default_value_t = 1, env = "PARFIB_START")]
    pub start: u64,

    /// How many consecutive indices to compute.
    #[arg(short, long, default_value_t = 50, env = "PARFIB_COUNT")]
    pub count: usize,

    /// Degree of parallelism (0 selects the default).
    #[arg(short, long, default_value_t = DEFAULT_DEGREE, env = "PARFIB_DEGREE")]
    pub degree: usize,

    /// Also write the result line to a file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print a timing summary to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
