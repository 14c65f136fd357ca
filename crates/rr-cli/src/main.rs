//! ringroad — run the traffic simulation from the command line.
//!
//! ```text
//! ringroad <vehicles> <signals> <iterations> <road_length>
//!          [--delay 0] [--cycle 9] [--mode combined|sequential]
//!          [--seed <u64>] [--threads <n>]
//! ```
//!
//! Per-tick state goes to stdout; logs go to stderr, filtered by `RUST_LOG`.

mod cli;
mod render;

#[cfg(test)]
mod tests;

use std::io::{self, BufWriter};
use std::process;
use std::time::Instant;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{info, warn};

use rr_core::SimConfig;
use rr_sim::SimBuilder;

use cli::Cli;
use render::ConsoleObserver;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.to_config();
    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }

    print_header(&config);

    let mut sim = SimBuilder::new(config).build()?;
    let mut obs = ConsoleObserver::new(BufWriter::new(io::stdout().lock()));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    if let Some(e) = obs.take_error() {
        warn!(error = %e, "console output failed");
        return Err(e.into());
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn print_header(config: &SimConfig) {
    let threads = match config.num_threads {
        Some(n) => n.to_string(),
        None    => "dynamic".to_owned(),
    };
    println!("Ring-road traffic simulation");
    println!(
        "Vehicles: {} | Signals: {} | Iterations: {} | Road: {} | Threads: {threads}",
        config.vehicle_count, config.signal_count, config.total_ticks, config.road_length,
    );
    println!(
        "Mode: {} | Delay: {} s | Signal cycle: {} ticks | Seed: {}",
        config.policy, config.tick_delay_secs, config.cycle_length, config.seed,
    );
}
