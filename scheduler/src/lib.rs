//! A CPU scheduling library.
//!
//! This library computes completion, waiting and turnaround times for a
//! fixed set of processes under First-Come-First-Served, preemptive
//! Shortest-Remaining-Time-First and Round-Robin scheduling.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use scheduler::{round_robin, Pid, Process, Scheduler};
//!
//! let procs = vec![
//!     Process::new(Pid::new(1), 5, 0).unwrap(),
//!     Process::new(Pid::new(2), 2, 1).unwrap(),
//! ];
//! let outcome = round_robin(NonZeroUsize::new(2).unwrap()).run(&procs);
//! assert_eq!(outcome.procs()[1].completion_time().unwrap().get(), 4);
//! ```

use std::num::NonZeroUsize;

mod schedulers;
pub use schedulers::{FcfsScheduler, RequeuePolicy, RoundRobinScheduler, SrtfScheduler, Stepping};

mod scheduler;
pub use crate::scheduler::Scheduler;

mod common_types;
pub use crate::common_types::{Pid, Timestamp};

mod process_control_block;
pub use crate::process_control_block::{
    is_sorted_by_arrival, sort_by_arrival, Process, MAX_TIME,
};

mod timeline;
pub use crate::timeline::{Burst, Timeline};

mod collector;
pub use crate::collector::{Outcome, Summary};

mod error;
pub use crate::error::SchedError;

mod policy;
pub use crate::policy::Policy;

pub mod workload;

#[cfg(test)]
mod fixtures;

/// Returns a structure that implements the `Scheduler` trait with a first come first
/// served policy
///
/// Processes run to completion in the order they are given, so they should be
/// sorted by arrival time beforehand.
pub fn fcfs() -> impl Scheduler {
    FcfsScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with a preemptive
/// shortest remaining time first policy, re-deciding after every unit of time
pub fn srtf() -> impl Scheduler {
    SrtfScheduler::new()
}

/// Returns a structure that implements the `Scheduler` trait with the same policy
/// as [`srtf`], but that only re-decides when a process arrives or completes
pub fn srtf_event_driven() -> impl Scheduler {
    SrtfScheduler::event_driven()
}

/// Returns a structure that implements the `Scheduler` trait with a round robin
/// scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is preempted
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobinScheduler::new(quantum)
}
