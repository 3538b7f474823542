//! Profile histogram of a noisy straight line
//!
//! The noise grows with |x|, so the rms bars widen away from the origin
//! while the fitted line stays close to `y = 5x + 3.5`.
//!
//! Run with: cargo run --example noisy_linear [output.png ...]
//! Set RUST_LOG=debug to see bin and fit details.

use anyhow::Result;
use profile_core::numeric::linspace;
use profile_stats::prelude::*;
use rand::prelude::*;
use rand_distr::StandardNormal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut outputs: Vec<String> = std::env::args().skip(1).collect();
    if outputs.is_empty() {
        outputs.push("Profile-Histogram.png".to_string());
    }

    let mut rng = StdRng::seed_from_u64(2024);
    let x = linspace(-10.0, 10.0, 50);
    let y: Vec<f64> = x
        .iter()
        .map(|&v| {
            let noise: f64 = rng.sample(StandardNormal);
            5.0 * v + 3.5 + ((v / 2.0).abs() + 1.0) * 10.0 * noise
        })
        .collect();

    let report = ProfileHistogramBuilder::new()
        .bins(BinRule::Auto)
        .x_label("x")
        .y_label("y")
        .title("Noisy linear trend")
        .output(outputs)
        .build(&x, &y)?;

    let analysis = &report.analysis;
    println!("Bins kept: {}", analysis.histogram.len());
    for bin in analysis.histogram.bins() {
        println!("  {bin}");
    }
    println!("Fit: {}", analysis.regression);
    for path in &report.written {
        println!("Saved {}", path.display());
    }
    Ok(())
}
