use crate::{Process, Scheduler, Timeline, Timestamp};

/// First-Come-First-Served, non-preemptive.
///
/// Processes are dispatched in the order they are given; the caller sorts
/// them by arrival time if that is what it wants.
#[derive(Clone, Copy, Debug, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    pub fn new() -> FcfsScheduler {
        FcfsScheduler
    }
}

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, procs: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = Timestamp::ZERO;

        for proc in procs.iter_mut() {
            proc.reset();

            let start = clock.max(proc.arrival_time());
            let end = start + proc.burst_time();
            log::debug!("{}: dispatch pid {} at {} until {}", self.name(), proc.pid(), start, end);

            proc.dispatch(start);
            proc.complete(end);
            timeline.record(proc.pid(), start, end);

            clock = end;
        }

        timeline
    }
}
