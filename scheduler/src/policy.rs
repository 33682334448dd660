use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::{FcfsScheduler, RoundRobinScheduler, SchedError, Scheduler, SrtfScheduler};

/// A scheduling discipline picked by name, as in `F`, `S`, `E` or `R4`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Srtf,
    /// SRTF that only re-decides on arrivals and completions
    SrtfEvents,
    RoundRobin(NonZeroUsize),
}

impl Policy {
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match *self {
            Policy::Fcfs => Box::new(FcfsScheduler::new()),
            Policy::Srtf => Box::new(SrtfScheduler::new()),
            Policy::SrtfEvents => Box::new(SrtfScheduler::event_driven()),
            Policy::RoundRobin(quanta) => Box::new(RoundRobinScheduler::new(quanta)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "F"),
            Policy::Srtf => write!(f, "S"),
            Policy::SrtfEvents => write!(f, "E"),
            Policy::RoundRobin(quanta) => write!(f, "R{}", quanta),
        }
    }
}

impl FromStr for Policy {
    type Err = SchedError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec {
            "F" => Ok(Policy::Fcfs),
            "S" => Ok(Policy::Srtf),
            "E" => Ok(Policy::SrtfEvents),
            _ => {
                let quanta = spec
                    .strip_prefix('R')
                    .and_then(|digits| digits.parse::<i64>().ok())
                    .ok_or_else(|| SchedError::UnknownPolicy(spec.to_owned()))?;

                let rr = RoundRobinScheduler::try_new(quanta)?;
                Ok(Policy::RoundRobin(rr.quanta()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_policy() {
        assert_eq!("F".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("S".parse::<Policy>().unwrap(), Policy::Srtf);
        assert_eq!("E".parse::<Policy>().unwrap(), Policy::SrtfEvents);
        assert_eq!(
            "R4".parse::<Policy>().unwrap(),
            Policy::RoundRobin(NonZeroUsize::new(4).unwrap())
        );
    }

    #[test]
    fn display_round_trips() {
        for spec in ["F", "S", "E", "R12"] {
            assert_eq!(spec.parse::<Policy>().unwrap().to_string(), spec);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("X".parse::<Policy>(), Err(SchedError::UnknownPolicy(_))));
        assert!(matches!("R".parse::<Policy>(), Err(SchedError::UnknownPolicy(_))));
        assert!(matches!("R0".parse::<Policy>(), Err(SchedError::InvalidQuantum(0))));
        assert!(matches!("R-2".parse::<Policy>(), Err(SchedError::InvalidQuantum(-2))));
    }

    #[test]
    fn scheduler_names() {
        assert_eq!(Policy::Fcfs.scheduler().name(), "FCFS");
        assert_eq!(Policy::SrtfEvents.scheduler().name(), "SRTF (event-driven)");
        assert_eq!("R2".parse::<Policy>().unwrap().scheduler().name(), "RR");
    }
}
