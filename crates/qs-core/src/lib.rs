//! `qs-core`: foundational types for the `queue_sim` bank simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no `qs-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `ordered-float`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`                                          |
//! | [`time`]        | `SimTime`                                             |
//! | [`config`]      | `BankConfig`, `HorizonPolicy`                         |
//! | [`rng`]         | `SimRng`, `DurationSource`, `ExpDurations`            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BankConfig, HorizonPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::CustomerId;
pub use rng::{DurationSource, ExpDurations, SimRng, next_positive};
pub use time::SimTime;
