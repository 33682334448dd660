use std::fmt::Write;

use scheduler::{Outcome, Timeline};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ProcessRow {
    #[tabled(rename = "PID")]
    pid: usize,
    #[tabled(rename = "AT")]
    arrival: usize,
    #[tabled(rename = "BT")]
    burst: usize,
    #[tabled(rename = "CT")]
    completion: String,
    #[tabled(rename = "WT")]
    waiting: usize,
    #[tabled(rename = "TAT")]
    turnaround: usize,
    #[tabled(rename = "RT")]
    response: String,
}

fn or_dash(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

/// Renders one scheduler run: the per-process table followed by the averages
pub fn format_outcome(outcome: &Outcome) -> String {
    let mut out = format!("{} Scheduling:\n", outcome.scheduler());

    let summary = outcome.summary();
    let (Some(avg_wt), Some(avg_tat)) = (summary.avg_waiting_time, summary.avg_turnaround_time)
    else {
        out.push_str("no processes to report\n");
        return out;
    };

    let rows: Vec<ProcessRow> = outcome
        .procs()
        .iter()
        .map(|proc| ProcessRow {
            pid: proc.pid().get(),
            arrival: proc.arrival_time().get(),
            burst: proc.burst_time(),
            completion: or_dash(proc.completion_time().map(|time| time.get())),
            waiting: proc.waiting_time(),
            turnaround: proc.turnaround_time(),
            response: or_dash(proc.response_time()),
        })
        .collect();

    // writing into a String cannot fail
    let _ = writeln!(out, "{}", Table::new(rows));
    let _ = writeln!(out, "Average waiting time = {:.2}", avg_wt);
    let _ = writeln!(out, "Average turnaround time = {:.2}", avg_tat);

    out
}

/// One `[start-end] P<pid>` entry per burst, with idle gaps spelled out
pub fn format_timeline(timeline: &Timeline) -> String {
    let mut out = String::new();
    let mut clock = 0;

    for burst in timeline.bursts() {
        if burst.start.get() > clock {
            let _ = write!(out, "[{}-{}] idle ", clock, burst.start);
        }
        let _ = write!(out, "[{}-{}] P{} ", burst.start, burst.end, burst.pid);
        clock = burst.end.get();
    }

    out.trim_end().to_owned()
}
