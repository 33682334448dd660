use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::{Process, SchedError, Scheduler, Timeline, Timestamp};

/// Where a process that used up its quantum goes back into the ready queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequeuePolicy {
    /// Behind every process that arrived up to the end of its slice
    #[default]
    ArrivalsFirst,
    /// Wherever its input index falls in the next admission scan
    IndexOrder,
}

/// Round-Robin with a fixed quantum.
///
/// Every step scans the processes in input order and admits the ones that
/// have arrived and are neither finished nor already queued, then runs the
/// front of the queue for at most one quantum.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobinScheduler {
    /// The maximum time a process can run before being preempted
    quanta: NonZeroUsize,
    requeue: RequeuePolicy,
}

impl RoundRobinScheduler {
    pub fn new(quanta: NonZeroUsize) -> RoundRobinScheduler {
        RoundRobinScheduler {
            quanta,
            requeue: RequeuePolicy::ArrivalsFirst,
        }
    }

    /// Validates a quantum that came from outside the program
    ///
    /// * `quanta` - must be at least 1
    pub fn try_new(quanta: i64) -> Result<RoundRobinScheduler, SchedError> {
        usize::try_from(quanta)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(RoundRobinScheduler::new)
            .ok_or(SchedError::InvalidQuantum(quanta))
    }

    pub fn with_requeue(mut self, requeue: RequeuePolicy) -> RoundRobinScheduler {
        self.requeue = requeue;
        self
    }

    pub fn quanta(&self) -> NonZeroUsize {
        self.quanta
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, procs: &mut [Process]) -> Timeline {
        let mut remaining: Vec<usize> = procs
            .iter_mut()
            .map(|proc| {
                proc.reset();
                proc.burst_time()
            })
            .collect();
        let mut queued = vec![false; procs.len()];
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut preempted: Option<usize> = None;

        let mut timeline = Timeline::new();
        let mut clock = Timestamp::ZERO;

        loop {
            let mut done = true;
            for idx in 0..procs.len() {
                if remaining[idx] == 0 {
                    continue;
                }
                done = false;

                if !queued[idx] && preempted != Some(idx) && procs[idx].arrival_time() <= clock {
                    log::trace!("{}: admit pid {} at {}", self.name(), procs[idx].pid(), clock);
                    ready.push_back(idx);
                    queued[idx] = true;
                }
            }

            if let Some(idx) = preempted.take() {
                ready.push_back(idx);
                queued[idx] = true;
            }

            if done {
                break;
            }

            let Some(idx) = ready.pop_front() else {
                log::trace!("{}: idle at {}", self.name(), clock);
                clock = clock + 1;
                continue;
            };
            queued[idx] = false;

            let slice = remaining[idx].min(self.quanta.get());
            log::debug!(
                "{}: dispatch pid {} at {} for {}",
                self.name(),
                procs[idx].pid(),
                clock,
                slice
            );

            procs[idx].dispatch(clock);
            timeline.record(procs[idx].pid(), clock, clock + slice);
            remaining[idx] -= slice;
            clock = clock + slice;

            if remaining[idx] == 0 {
                procs[idx].complete(clock);
            } else if self.requeue == RequeuePolicy::ArrivalsFirst {
                preempted = Some(idx);
            }
        }

        timeline
    }
}
