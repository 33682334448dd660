use std::num::NonZeroUsize;

use scheduler::workload::parse_workload;

use super::*;

#[test]
fn default_workload_matches_fixture_file() {
    let text = "# pid burst arrival\n1 10 0\n2 1 2\n3 2 4\n4 3 1\n5 4 3\n";
    assert_eq!(default_workload().unwrap(), parse_workload(text).unwrap());
}

#[test]
fn schedspec_validator() {
    for spec in ["F", "S", "E", "R", "R4", "R12"] {
        assert!(valid_schedspec(spec.to_owned()).is_ok(), "{}", spec);
    }
    for spec in ["", "L", "FS", "R-1", "r4", "P2:3"] {
        assert!(valid_schedspec(spec.to_owned()).is_err(), "{}", spec);
    }
}

#[test]
fn bare_round_robin_takes_quantum() {
    let policies = resolve_policies(&DEFAULT_SPECS, "3").unwrap();
    assert_eq!(
        policies,
        vec![
            Policy::Fcfs,
            Policy::Srtf,
            Policy::RoundRobin(NonZeroUsize::new(3).unwrap())
        ]
    );

    let policies = resolve_policies(&["R7", "R"], "2").unwrap();
    assert_eq!(
        policies,
        vec![
            Policy::RoundRobin(NonZeroUsize::new(7).unwrap()),
            Policy::RoundRobin(NonZeroUsize::new(2).unwrap())
        ]
    );
}

#[test]
fn zero_quantum_is_rejected() {
    assert!(matches!(
        resolve_policies(&["R"], "0"),
        Err(SchedError::InvalidQuantum(0))
    ));
    assert!(matches!(
        resolve_policies(&["R"], "x"),
        Err(SchedError::UnknownPolicy(_))
    ));
}

#[test]
fn report_for_default_workload() {
    let procs = default_workload().unwrap();
    let outcome = Policy::Srtf.scheduler().run(&procs);
    let text = format_outcome(&outcome);

    assert!(text.starts_with("SRTF Scheduling:\n"));
    assert!(text.contains("PID"));
    assert!(text.contains("TAT"));
    assert!(text.contains("Average waiting time = 3.20\n"));
    assert!(text.ends_with("Average turnaround time = 7.20\n"));
}

#[test]
fn report_for_empty_workload() {
    let outcome = Policy::Fcfs.scheduler().run(&[]);
    assert_eq!(
        format_outcome(&outcome),
        "FCFS Scheduling:\nno processes to report\n"
    );
}

#[test]
fn timeline_shows_idle_gaps() {
    let procs = parse_workload("1 2 1\n2 1 5\n").unwrap();
    let outcome = Policy::Fcfs.scheduler().run(&procs);

    assert_eq!(
        format_timeline(outcome.timeline()),
        "[0-1] idle [1-3] P1 [3-5] idle [5-6] P2"
    );
}

#[test]
fn every_policy_agrees_on_totals() {
    let procs = default_workload().unwrap();

    for spec in ["F", "S", "E", "R1", "R4"] {
        let policy: Policy = spec.parse().unwrap();
        let outcome = policy.scheduler().run(&procs);

        for proc in outcome.procs() {
            assert_eq!(outcome.timeline().executed(proc.pid()), proc.burst_time());
        }
        // the CPU never idles on this workload, so all disciplines finish together
        assert_eq!(outcome.summary().makespan.get(), 20);
    }
}
