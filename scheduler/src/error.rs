use std::error::Error;
use std::fmt;
use std::io;

use crate::Pid;

/// Everything that can be rejected at the boundary of the engine.
///
/// The scheduling algorithms themselves never fail: once a workload and a
/// quantum made it through validation they run to completion.
#[derive(Debug)]
pub enum SchedError {
    /// A process with a burst time of zero
    ZeroBurst { pid: Pid },
    /// A burst or arrival time above `MAX_TIME`
    TooLarge {
        pid: Pid,
        field: &'static str,
        value: usize,
    },
    /// A negative number where a burst or arrival time was expected
    Negative {
        line: usize,
        field: &'static str,
        value: i64,
    },
    /// A Round-Robin quantum lower than one
    InvalidQuantum(i64),
    /// The same pid used twice in one workload
    DuplicatePid(Pid),
    /// A workload line that could not be read
    Parse { line: usize, reason: String },
    /// A scheduler specification that names no known policy
    UnknownPolicy(String),
    /// The workload file could not be read
    Io(io::Error),
}

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SchedError::ZeroBurst { pid } => {
                write!(f, "process {} has a burst time of zero", pid)
            }
            SchedError::TooLarge { pid, field, value } => {
                write!(
                    f,
                    "process {}: {} {} is larger than {}",
                    pid,
                    field,
                    value,
                    crate::MAX_TIME
                )
            }
            SchedError::Negative { line, field, value } => {
                write!(f, "line {}: {} must not be negative, got {}", line, field, value)
            }
            SchedError::InvalidQuantum(quantum) => {
                write!(f, "quantum must be at least 1, got {}", quantum)
            }
            SchedError::DuplicatePid(pid) => write!(f, "pid {} is used more than once", pid),
            SchedError::Parse { line, reason } => write!(f, "line {}: {}", line, reason),
            SchedError::UnknownPolicy(spec) => {
                write!(f, "unknown scheduler specification: {}", spec)
            }
            SchedError::Io(err) => write!(f, "failed to read workload: {}", err),
        }
    }
}

impl Error for SchedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SchedError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SchedError {
    fn from(err: io::Error) -> Self {
        SchedError::Io(err)
    }
}
