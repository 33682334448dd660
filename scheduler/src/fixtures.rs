//! Workloads shared by the unit tests

use crate::{Pid, Process};

pub fn proc(pid: usize, burst: usize, arrival: usize) -> Process {
    Process::new(Pid::new(pid), burst, arrival).unwrap()
}

/// `(pid, burst, arrival)`: (1,10,0) (2,1,2) (3,2,4) (4,3,1) (5,4,3)
pub fn canonical() -> Vec<Process> {
    vec![
        proc(1, 10, 0),
        proc(2, 1, 2),
        proc(3, 2, 4),
        proc(4, 3, 1),
        proc(5, 4, 3),
    ]
}

/// A handful of irregular workloads, including idle gaps and equal bursts
pub fn assorted() -> Vec<Vec<Process>> {
    vec![
        canonical(),
        vec![proc(1, 3, 0), proc(2, 3, 0)],
        vec![proc(1, 2, 2), proc(2, 4, 0)],
        vec![proc(1, 1, 3), proc(2, 2, 10), proc(3, 5, 10)],
        vec![proc(7, 6, 0), proc(3, 2, 1), proc(9, 2, 1), proc(4, 8, 2), proc(1, 1, 9)],
        vec![proc(1, 5, 4)],
    ]
}

/// Checks the timing identities every scheduler must produce
pub fn assert_consistent(procs: &[Process], timeline: &crate::Timeline) {
    for proc in procs {
        let end = proc.completion_time().expect("process never completed");
        assert_eq!(proc.turnaround_time(), end - proc.arrival_time());
        assert_eq!(proc.waiting_time() + proc.burst_time(), proc.turnaround_time());
        assert_eq!(timeline.executed(proc.pid()), proc.burst_time());
        assert!(proc.start_time().unwrap() >= proc.arrival_time());
    }
}
