use crate::{Pid, SchedError, Timestamp};

/// Largest accepted burst or arrival time. Keeps every completion time of a
/// workload well inside `usize` on 64-bit targets.
pub const MAX_TIME: usize = u32::MAX as usize;

/// A process record: the immutable description supplied by the caller and
/// the timings a scheduler fills in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    /// The pid of the process
    pid: Pid,
    /// Total CPU time the process needs
    burst_time: usize,
    /// The time when the process becomes ready
    arrival_time: Timestamp,
    /// The time of the first dispatch
    start_time: Option<Timestamp>,
    /// The time when the remaining burst reached zero
    completion_time: Option<Timestamp>,
    /// Time spent ready but not running
    waiting_time: usize,
    /// Time from arrival to completion
    turnaround_time: usize,
}

impl Process {
    /// Creates a new process record with no timings
    ///
    /// * `pid` - caller assigned identifier
    /// * `burst_time` - units of CPU time needed, in `1..=MAX_TIME`
    /// * `arrival_time` - the time when the process becomes ready, at most `MAX_TIME`
    pub fn new(pid: Pid, burst_time: usize, arrival_time: usize) -> Result<Process, SchedError> {
        if burst_time == 0 {
            return Err(SchedError::ZeroBurst { pid });
        }
        if burst_time > MAX_TIME {
            return Err(SchedError::TooLarge {
                pid,
                field: "burst time",
                value: burst_time,
            });
        }
        if arrival_time > MAX_TIME {
            return Err(SchedError::TooLarge {
                pid,
                field: "arrival time",
                value: arrival_time,
            });
        }

        Ok(Process {
            pid,
            burst_time,
            arrival_time: Timestamp::new(arrival_time),
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        })
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<Timestamp> {
        self.completion_time
    }

    pub fn waiting_time(&self) -> usize {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> usize {
        self.turnaround_time
    }

    /// Time between arrival and the first dispatch
    pub fn response_time(&self) -> Option<usize> {
        self.start_time.map(|start| start - self.arrival_time)
    }

    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Forgets every timing left by a previous run
    pub fn reset(&mut self) {
        self.start_time = None;
        self.completion_time = None;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }

    /// Marks a dispatch at `time`; only the first one is kept as start time
    pub(crate) fn dispatch(&mut self, time: Timestamp) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
    }

    /// Records the completion at `time` and derives turnaround and waiting time
    pub(crate) fn complete(&mut self, time: Timestamp) {
        debug_assert!(time >= self.arrival_time + self.burst_time);

        self.completion_time = Some(time);
        self.turnaround_time = time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

/// Stable sort by arrival time, equal arrivals keep their relative order
pub fn sort_by_arrival(procs: &mut [Process]) {
    procs.sort_by_key(|proc| proc.arrival_time);
}

pub fn is_sorted_by_arrival(procs: &[Process]) -> bool {
    procs
        .windows(2)
        .all(|pair| pair[0].arrival_time <= pair[1].arrival_time)
}
