//! `qs-sim`: discrete-event engine for the `queue_sim` bank simulator.
//!
//! # Event loop
//!
//! ```text
//! build:   schedule first Arrival after one inter-arrival draw
//! loop:    pop earliest event (FIFO among equal times), set now, fire it
//!   Arrival          → spawn customer, schedule next Arrival, request teller
//!                        granted → start service, schedule ServiceComplete
//!                        busy    → join the waiting line
//!   WalkIn           → spawn customer, request teller (no reschedule)
//!   ServiceComplete  → release teller; head of line (if any) starts service
//! stop:    next event past the horizon
//! drain:   (HorizonPolicy::Drain) arrivals closed, in-flight customers finish
//! ```
//!
//! A customer's suspension points (waiting in line, being served) are not
//! blocked threads: the process value itself moves into the teller pool's
//! waiting line or into a scheduled `ServiceComplete` event, and is moved
//! back out when the clock or the pool resumes it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | [`run_replications`] uses Rayon's thread pool.         |
//! | `serde`    | Serde derives on configuration and summary types.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use qs_core::BankConfig;
//! use qs_sim::{BankSim, TracingObserver};
//!
//! let mut sim = BankSim::from_config(BankConfig::default())?;
//! sim.run(&mut TracingObserver)?;
//! println!("{}", sim.summary());
//! ```

pub mod arrivals;
pub mod builder;
pub mod clock;
pub mod customer;
pub mod error;
pub mod observer;
pub mod replicate;
pub mod resource;
pub mod sim;
pub mod wake_queue;


pub use arrivals::ArrivalGenerator;
pub use builder::SimBuilder;
pub use clock::SimClock;
pub use customer::{CustomerProcess, CustomerRecord, CustomerState};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use replicate::run_replications;
pub use resource::{Permit, Requested, Resource};
pub use sim::{BankEvent, BankSim};
pub use wake_queue::WakeQueue;
