use crate::{Outcome, Process, Timeline};

/// A scheduling discipline over a fixed set of processes.
///
/// Implementations keep all simulation bookkeeping (remaining times, ready
/// queues, the clock) local to one call, so the same value can be used any
/// number of times, from any thread.
pub trait Scheduler {
    /// Short name used in reports and logs
    fn name(&self) -> &'static str;

    /// Schedules `procs` in place and returns the dispatch timeline.
    ///
    /// Timings left by an earlier run are cleared first. Input order matters:
    /// it is the tie-break for every discipline and the dispatch order for
    /// FCFS.
    fn schedule(&self, procs: &mut [Process]) -> Timeline;

    /// Schedules an independent copy of `procs`, leaving the input untouched
    fn run(&self, procs: &[Process]) -> Outcome {
        let mut procs = procs.to_vec();
        let timeline = self.schedule(&mut procs);

        log::info!(
            "{}: scheduled {} processes, makespan {}",
            self.name(),
            procs.len(),
            timeline.end()
        );

        Outcome::new(self.name(), procs, timeline)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn schedule(&self, procs: &mut [Process]) -> Timeline {
        (**self).schedule(procs)
    }
}
