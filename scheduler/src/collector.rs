use crate::{Pid, Process, Timeline, Timestamp};

/// The result of one scheduler run over its own copy of a workload
#[derive(Clone, Debug)]
pub struct Outcome {
    scheduler: &'static str,
    procs: Vec<Process>,
    timeline: Timeline,
}

impl Outcome {
    pub fn new(scheduler: &'static str, procs: Vec<Process>, timeline: Timeline) -> Outcome {
        Outcome {
            scheduler,
            procs,
            timeline,
        }
    }

    /// Name of the scheduler that produced this outcome
    pub fn scheduler(&self) -> &'static str {
        self.scheduler
    }

    /// The scheduled processes, in input order
    pub fn procs(&self) -> &[Process] {
        &self.procs
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.procs.iter().find(|proc| proc.pid() == pid)
    }

    pub fn summary(&self) -> Summary {
        Summary::collect(&self.procs, &self.timeline)
    }
}

/// Averages over a scheduled workload
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// `None` when there are no processes
    pub avg_waiting_time: Option<f64>,
    pub avg_turnaround_time: Option<f64>,
    pub avg_response_time: Option<f64>,
    pub makespan: Timestamp,
}

impl Summary {
    pub fn collect(procs: &[Process], timeline: &Timeline) -> Summary {
        Summary {
            count: procs.len(),
            avg_waiting_time: mean(procs.iter().map(Process::waiting_time)),
            avg_turnaround_time: mean(procs.iter().map(Process::turnaround_time)),
            avg_response_time: mean(procs.iter().filter_map(Process::response_time)),
            makespan: timeline.end(),
        }
    }
}

fn mean(values: impl Iterator<Item = usize>) -> Option<f64> {
    let (sum, count) = values.fold((0usize, 0usize), |(sum, count), value| {
        (sum + value, count + 1)
    });

    if count == 0 {
        return None;
    }

    Some(sum as f64 / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_none() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1, 2, 4].into_iter()), Some(7.0 / 3.0));
    }

    #[test]
    fn summary_of_empty_workload() {
        let summary = Summary::collect(&[], &Timeline::new());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_waiting_time, None);
        assert_eq!(summary.avg_turnaround_time, None);
        assert_eq!(summary.avg_response_time, None);
        assert_eq!(summary.makespan, Timestamp::ZERO);
    }
}
