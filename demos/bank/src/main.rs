//! bank: one run of the bank queueing model, optionally followed by a batch
//! of seeded replications.
//!
//! ```text
//! bank                   # built-in defaults: 2 tellers, 60-unit horizon
//! bank scenario.json     # override any BankConfig field, plus "replications"
//! RUST_LOG=debug bank    # engine-level logging
//! ```

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use qs_core::BankConfig;
use qs_sim::{BankSim, TracingObserver, run_replications};
use qs_stats::Summary;

// ── Scenario file ─────────────────────────────────────────────────────────────

/// On-disk scenario: every `BankConfig` field at the top level, plus the
/// number of extra replications to run after the traced one.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Scenario {
    #[serde(flatten)]
    bank:         BankConfig,
    replications: usize,
}

fn load_scenario() -> Result<Scenario> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Scenario::default());
    };
    let file = File::open(&path).with_context(|| format!("opening scenario {path}"))?;
    let scenario: Scenario = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scenario {path}"))?;
    Ok(scenario)
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_replications(seeds: &[u64], summaries: &[Summary]) {
    println!();
    println!("{:>6}  {:>8}  {:>9}  {:>10}  {:>9}  {:>9}", "seed", "arrivals", "mean wait", "mean queue", "util", "tw util");
    for (seed, s) in seeds.iter().zip(summaries) {
        println!(
            "{:>6}  {:>8}  {:>9.2}  {:>10.2}  {:>9.2}  {:>9.2}",
            seed, s.arrivals, s.mean_wait_time, s.mean_queue_length, s.utilization, s.time_weighted_utilization,
        );
    }

    let n = summaries.len() as f64;
    let mean_wait = summaries.iter().map(|s| s.mean_wait_time).sum::<f64>() / n;
    let mean_util = summaries.iter().map(|s| s.utilization).sum::<f64>() / n;
    println!("across {} replications: mean wait {mean_wait:.2}, utilization {mean_util:.2}", summaries.len());
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let scenario = load_scenario()?;
    let config = scenario.bank;
    info!(
        seed = config.random_seed,
        tellers = config.teller_count,
        horizon = config.simulation_horizon,
        policy = %config.horizon_policy,
        "starting bank simulation"
    );

    let mut sim = BankSim::from_config(config.clone()).context("building simulation")?;
    sim.run(&mut TracingObserver).context("running simulation")?;

    println!();
    println!("{}", sim.summary());

    if scenario.replications > 0 {
        let seeds: Vec<u64> = (0..scenario.replications as u64)
            .map(|i| config.random_seed.wrapping_add(i + 1))
            .collect();
        let summaries = run_replications(&config, &seeds).context("running replications")?;
        print_replications(&seeds, &summaries);
    }

    Ok(())
}
