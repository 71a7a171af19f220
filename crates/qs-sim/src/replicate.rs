//! Independent replications of one configuration under different seeds.

use qs_core::BankConfig;
use qs_stats::Summary;
use tracing::debug;

use crate::{BankSim, NoopObserver, SimResult};

/// Run one simulation per seed and return their summaries in seed order.
///
/// Every replication gets its own `BankSim` and its own RNG, so the result
/// for a given seed does not depend on which other seeds run alongside it.
/// With the `parallel` Cargo feature the replications run on Rayon's thread
/// pool.
pub fn run_replications(config: &BankConfig, seeds: &[u64]) -> SimResult<Vec<Summary>> {
    config.validate()?;
    debug!(replications = seeds.len(), "running replications");

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(config, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(config, seed)).collect()
    }
}

fn run_one(config: &BankConfig, seed: u64) -> SimResult<Summary> {
    let mut sim = BankSim::from_config(config.with_seed(seed))?;
    sim.run(&mut NoopObserver)?;
    Ok(sim.summary())
}
