use crate::{Pid, Timestamp};

/// One uninterrupted stretch of CPU time given to a process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Burst {
    pub pid: Pid,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Burst {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The order in which a scheduler handed out the CPU.
///
/// Gaps between bursts are idle time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    bursts: Vec<Burst>,
}

impl Timeline {
    pub fn new() -> Timeline {
        Timeline { bursts: Vec::new() }
    }

    /// Appends a dispatch as its own burst
    pub(crate) fn record(&mut self, pid: Pid, start: Timestamp, end: Timestamp) {
        debug_assert!(start < end);
        debug_assert!(self.end() <= start);

        self.bursts.push(Burst { pid, start, end });
    }

    /// Appends a dispatch, merging it into the last burst when the same
    /// process simply kept the CPU
    pub(crate) fn extend(&mut self, pid: Pid, start: Timestamp, end: Timestamp) {
        if let Some(last) = self.bursts.last_mut() {
            if last.pid == pid && last.end == start {
                last.end = end;
                return;
            }
        }

        self.record(pid, start, end);
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    /// Total CPU time given to `pid`
    pub fn executed(&self, pid: Pid) -> usize {
        self.bursts
            .iter()
            .filter(|burst| burst.pid == pid)
            .map(Burst::len)
            .sum()
    }

    /// Pids in dispatch order, one entry per burst
    pub fn dispatch_order(&self) -> Vec<Pid> {
        self.bursts.iter().map(|burst| burst.pid).collect()
    }

    /// End of the last burst
    pub fn end(&self) -> Timestamp {
        self.bursts.last().map_or(Timestamp::ZERO, |burst| burst.end)
    }

    /// Time in `[0, end)` during which no process was running
    pub fn idle_time(&self) -> usize {
        let busy: usize = self.bursts.iter().map(Burst::len).sum();
        self.end().get() - busy
    }
}
