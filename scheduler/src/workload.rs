//! Reading a process list from text.
//!
//! Each line holds `pid burst_time arrival_time` separated by whitespace.
//! Lines starting with `#` and blank lines are ignored. Burst and arrival
//! times above [`MAX_TIME`](crate::MAX_TIME) are rejected.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::{Pid, Process, SchedError, MAX_TIME};

pub fn read_workload_file<P: AsRef<Path>>(path: P) -> Result<Vec<Process>, SchedError> {
    let contents = fs::read_to_string(path)?;
    parse_workload(&contents)
}

pub fn parse_workload(contents: &str) -> Result<Vec<Process>, SchedError> {
    let mut procs = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let pid = next_number(&mut fields, line_no, "pid")?;
        let burst = next_number(&mut fields, line_no, "burst time")?;
        let arrival = next_number(&mut fields, line_no, "arrival time")?;

        if let Some(extra) = fields.next() {
            return Err(SchedError::Parse {
                line: line_no,
                reason: format!("unexpected trailing field '{}'", extra),
            });
        }

        procs.push(Process::new(Pid::new(pid), burst, arrival)?);
    }

    check_unique_pids(&procs)?;
    log::debug!("parsed a workload of {} processes", procs.len());

    Ok(procs)
}

/// Fails on the first pid that appears twice
pub fn check_unique_pids(procs: &[Process]) -> Result<(), SchedError> {
    let mut seen = HashSet::new();

    for proc in procs {
        if !seen.insert(proc.pid()) {
            return Err(SchedError::DuplicatePid(proc.pid()));
        }
    }

    Ok(())
}

fn next_number<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    field: &'static str,
) -> Result<usize, SchedError> {
    let raw = fields.next().ok_or_else(|| SchedError::Parse {
        line,
        reason: format!("missing {}", field),
    })?;

    let value: i64 = raw.parse().map_err(|_| SchedError::Parse {
        line,
        reason: format!("{} '{}' is not an integer", field, raw),
    })?;

    let value = usize::try_from(value).map_err(|_| SchedError::Negative { line, field, value })?;
    if field != "pid" && value > MAX_TIME {
        return Err(SchedError::Parse {
            line,
            reason: format!("{} {} is larger than {}", field, value, MAX_TIME),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Timestamp;

    #[test]
    fn parses_comments_and_blanks() {
        let text = "# pid burst arrival\n1 10 0\n\n  2 1 2\n# trailing comment\n";
        let procs = parse_workload(text).unwrap();

        assert_eq!(procs.len(), 2);
        assert_eq!(procs[1].pid(), Pid::new(2));
        assert_eq!(procs[1].burst_time(), 1);
        assert_eq!(procs[1].arrival_time(), Timestamp::new(2));
    }

    #[test]
    fn empty_text_is_an_empty_workload() {
        assert!(parse_workload("").unwrap().is_empty());
        assert!(parse_workload("# nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn rejects_negative_numbers() {
        let err = parse_workload("1 4 0\n2 3 -1\n").unwrap_err();
        assert!(matches!(
            err,
            SchedError::Negative { line: 2, field: "arrival time", value: -1 }
        ));

        let err = parse_workload("1 -4 0\n").unwrap_err();
        assert!(matches!(err, SchedError::Negative { line: 1, field: "burst time", .. }));
    }

    #[test]
    fn rejects_zero_burst() {
        let err = parse_workload("5 0 0\n").unwrap_err();
        assert!(matches!(err, SchedError::ZeroBurst { pid } if pid == Pid::new(5)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            parse_workload("1 2\n").unwrap_err(),
            SchedError::Parse { line: 1, .. }
        ));
        assert!(matches!(
            parse_workload("1 2 3 4\n").unwrap_err(),
            SchedError::Parse { line: 1, .. }
        ));
        assert!(matches!(
            parse_workload("\n1 two 3\n").unwrap_err(),
            SchedError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn rejects_oversized_times() {
        let text = format!("1 {} 0\n2 {} 0\n", i64::MAX, i64::MAX);
        assert!(matches!(
            parse_workload(&text).unwrap_err(),
            SchedError::Parse { line: 1, .. }
        ));

        let text = format!("1 1 0\n2 1 {}\n", MAX_TIME + 1);
        assert!(matches!(
            parse_workload(&text).unwrap_err(),
            SchedError::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_pids() {
        let err = parse_workload("1 2 0\n1 3 1\n").unwrap_err();
        assert!(matches!(err, SchedError::DuplicatePid(pid) if pid == Pid::new(1)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_workload_file("/nonexistent/workload.txt").unwrap_err();
        assert!(matches!(err, SchedError::Io(_)));
    }
}
