use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{Process, Scheduler, Timeline, Timestamp};

/// How the SRTF simulation advances its clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Stepping {
    /// Re-decide after every unit of time
    #[default]
    Tick,
    /// Re-decide only on arrivals and completions
    Event,
}

/// Shortest-Remaining-Time-First, preemptive.
///
/// The ready process with the least remaining time runs; equal remaining
/// times go to the process that comes first in the input. Both steppings
/// produce the same timings and the same timeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct SrtfScheduler {
    stepping: Stepping,
}

impl SrtfScheduler {
    pub fn new() -> SrtfScheduler {
        SrtfScheduler {
            stepping: Stepping::Tick,
        }
    }

    pub fn event_driven() -> SrtfScheduler {
        SrtfScheduler {
            stepping: Stepping::Event,
        }
    }

    fn schedule_ticks(&self, procs: &mut [Process], remaining: &mut [usize]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = Timestamp::ZERO;
        let mut completed = 0;
        let mut running: Option<usize> = None;

        while completed < procs.len() {
            let Some(idx) = shortest_ready(procs, remaining, clock) else {
                log::trace!("{}: idle at {}", self.name(), clock);
                clock = clock + 1;
                continue;
            };

            if running != Some(idx) {
                log::debug!("{}: dispatch pid {} at {}", self.name(), procs[idx].pid(), clock);
                running = Some(idx);
            }

            procs[idx].dispatch(clock);
            timeline.extend(procs[idx].pid(), clock, clock + 1);
            remaining[idx] -= 1;
            clock = clock + 1;

            if remaining[idx] == 0 {
                procs[idx].complete(clock);
                completed += 1;
                running = None;
            }
        }

        timeline
    }

    fn schedule_events(&self, procs: &mut [Process], remaining: &mut [usize]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = Timestamp::ZERO;

        let mut order: Vec<usize> = (0..procs.len()).collect();
        order.sort_by_key(|&idx| (procs[idx].arrival_time(), idx));
        let mut arrivals = order.into_iter().peekable();

        // min-heap on (remaining, input index)
        let mut ready: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();

        loop {
            while let Some(&idx) = arrivals.peek() {
                if procs[idx].arrival_time() > clock {
                    break;
                }
                log::trace!("{}: pid {} ready at {}", self.name(), procs[idx].pid(), clock);
                ready.push(Reverse((remaining[idx], idx)));
                arrivals.next();
            }

            let next_arrival = arrivals.peek().map(|&idx| procs[idx].arrival_time());

            let Some(Reverse((_, idx))) = ready.pop() else {
                match next_arrival {
                    Some(time) => {
                        log::trace!("{}: idle from {} to {}", self.name(), clock, time);
                        clock = time;
                        continue;
                    }
                    None => break,
                }
            };

            let slice = match next_arrival {
                Some(time) => remaining[idx].min(time - clock),
                None => remaining[idx],
            };
            log::debug!(
                "{}: dispatch pid {} at {} for {}",
                self.name(),
                procs[idx].pid(),
                clock,
                slice
            );

            procs[idx].dispatch(clock);
            timeline.extend(procs[idx].pid(), clock, clock + slice);
            remaining[idx] -= slice;
            clock = clock + slice;

            if remaining[idx] == 0 {
                procs[idx].complete(clock);
            } else {
                ready.push(Reverse((remaining[idx], idx)));
            }
        }

        timeline
    }
}

/// Index of the arrived, unfinished process with the least remaining time.
/// `min_by_key` keeps the first of equal minimums, so input order breaks ties.
fn shortest_ready(procs: &[Process], remaining: &[usize], clock: Timestamp) -> Option<usize> {
    procs
        .iter()
        .zip(remaining)
        .enumerate()
        .filter(|(_, (proc, left))| **left > 0 && proc.arrival_time() <= clock)
        .min_by_key(|(_, (_, left))| **left)
        .map(|(idx, _)| idx)
}

impl Scheduler for SrtfScheduler {
    fn name(&self) -> &'static str {
        match self.stepping {
            Stepping::Tick => "SRTF",
            Stepping::Event => "SRTF (event-driven)",
        }
    }

    fn schedule(&self, procs: &mut [Process]) -> Timeline {
        let mut remaining: Vec<usize> = procs
            .iter_mut()
            .map(|proc| {
                proc.reset();
                proc.burst_time()
            })
            .collect();

        match self.stepping {
            Stepping::Tick => self.schedule_ticks(procs, &mut remaining),
            Stepping::Event => self.schedule_events(procs, &mut remaining),
        }
    }
}
