//! `qs-stats`: statistics collection for the `queue_sim` bank simulator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`stream`]     | `Sample`, `SampleStream` (append-only)            |
//! | [`collector`]  | `StatsCollector` - record + aggregate             |
//! | [`summary`]    | `Summary` - plain aggregate row for one run       |
//!
//! The collector never touches simulation state.  The engine pushes samples
//! into it; everything else only reads.  All aggregate methods take `&self`,
//! so computing them any number of times yields the same values.

pub mod collector;
pub mod stream;
pub mod summary;

#[cfg(test)]
mod tests;

pub use collector::StatsCollector;
pub use stream::{Sample, SampleStream};
pub use summary::Summary;
