use std::error::Error;

use clap::{App, Arg};
use regex::Regex;
use scheduler::workload::read_workload_file;
use scheduler::{is_sorted_by_arrival, sort_by_arrival, Pid, Policy, Process, SchedError, Scheduler};

mod logger;
mod report;
use report::{format_outcome, format_timeline};

/// Quantum used by a bare `R` specification
const DEFAULT_QUANTUM: &str = "4";

/// Scheduler specifications run when none is given
const DEFAULT_SPECS: [&str; 3] = ["F", "S", "R"];

fn main() -> Result<(), Box<dyn Error>> {
    logger::init()?;

    let matches = App::new("Scheduler algorithms for OS")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes waiting and turnaround times under FCFS, SRTF and Round-Robin")
        .arg(
            Arg::with_name("inputfile")
                .long("inputfile")
                .takes_value(true)
                .help("Process list, one 'pid burst arrival' per line (default: built-in set)"),
        )
        .arg(
            Arg::with_name("schedspec")
                .short("s")
                .long("schedspec")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .validator(valid_schedspec)
                .help("Scheduler specification (F, S, E, R or R<num>), may be repeated"),
        )
        .arg(
            Arg::with_name("quantum")
                .short("q")
                .long("quantum")
                .takes_value(true)
                .default_value(DEFAULT_QUANTUM)
                .help("Quantum for a bare R specification"),
        )
        .arg(
            Arg::with_name("sort")
                .long("sort")
                .help("Sort processes by arrival time before scheduling"),
        )
        .arg(
            Arg::with_name("timeline")
                .short("t")
                .long("timeline")
                .help("Also print the dispatch timeline"),
        )
        .get_matches();

    let mut procs = match matches.value_of("inputfile") {
        Some(path) => read_workload_file(path)?,
        None => default_workload()?,
    };

    if matches.is_present("sort") {
        sort_by_arrival(&mut procs);
    } else if !is_sorted_by_arrival(&procs) {
        log::warn!("processes are not sorted by arrival time, FCFS runs them in the given order");
    }

    let specs: Vec<&str> = match matches.values_of("schedspec") {
        Some(values) => values.collect(),
        None => DEFAULT_SPECS.to_vec(),
    };
    let quantum = matches.value_of("quantum").unwrap_or(DEFAULT_QUANTUM);
    let policies = resolve_policies(&specs, quantum)?;

    let show_timeline = matches.is_present("timeline");
    let mut first = true;
    for policy in policies {
        let outcome = policy.scheduler().run(&procs);

        if !first {
            println!();
        }
        first = false;

        print!("{}", format_outcome(&outcome));
        if show_timeline {
            println!("Timeline: {}", format_timeline(outcome.timeline()));
        }
    }

    Ok(())
}

fn valid_schedspec(value: String) -> Result<(), String> {
    let re = Regex::new(r"^([FSE]|R\d*)$").map_err(|err| err.to_string())?;
    if !re.is_match(&value) {
        Err(format!(
            "Invalid scheduler specification: {}. Must be one of F, S, E, R or R<num>",
            value
        ))
    } else {
        Ok(())
    }
}

/// Turns command line specifications into policies, a bare `R` takes `quantum`
fn resolve_policies(specs: &[&str], quantum: &str) -> Result<Vec<Policy>, SchedError> {
    specs
        .iter()
        .map(|spec| match *spec {
            "R" => format!("R{}", quantum).parse(),
            spec => spec.parse(),
        })
        .collect()
}

/// The process set used when no input file is given, as `(pid, burst, arrival)`
fn default_workload() -> Result<Vec<Process>, SchedError> {
    [(1, 10, 0), (2, 1, 2), (3, 2, 4), (4, 3, 1), (5, 4, 3)]
        .into_iter()
        .map(|(pid, burst, arrival)| Process::new(Pid::new(pid), burst, arrival))
        .collect()
}

#[cfg(test)]
mod tests;
