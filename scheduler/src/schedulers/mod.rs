//! The scheduling disciplines, one per file

mod fcfs;
pub use fcfs::FcfsScheduler;

mod srtf;
pub use srtf::{SrtfScheduler, Stepping};

mod round_robin;
pub use round_robin::{RequeuePolicy, RoundRobinScheduler};
