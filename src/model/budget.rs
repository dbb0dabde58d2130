//! Bounded effort for iterative routines.
//!
//! Every loop in the crate (power iteration, Jacobi sweeps, greedy selection)
//! is capped by an iteration count and, optionally, a wall-clock deadline that
//! is checked between iterations. Running out of either is not an error: the
//! routine returns its last iterate together with a [`Termination`] that the
//! caller turns into a [`SummaryWarning`].

use std::time::{Duration, Instant};

use crate::error::SummaryWarning;

/// Optional wall-clock deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Deadline(None)
    }

    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Deadline(Instant::now().checked_add(timeout))
    }

    /// A deadline `millis` milliseconds from now, or none.
    pub fn from_millis(millis: Option<u64>) -> Self {
        millis.map_or_else(Self::none, |ms| Self::after(Duration::from_millis(ms)))
    }

    /// True once the deadline has passed.
    pub fn expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }

    /// True when a deadline is set.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Why an iterative routine stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The convergence criterion was met.
    Converged,
    /// The iteration cap was reached first.
    IterationCap,
    /// The deadline elapsed first.
    Deadline,
}

impl Termination {
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged)
    }

    /// Warning describing an early stop, if any.
    pub fn warning(&self, routine: &str, iterations: usize, delta: f64) -> Option<SummaryWarning> {
        match self {
            Termination::Converged => None,
            Termination::IterationCap => Some(SummaryWarning::NonConvergence {
                routine: routine.to_string(),
                iterations,
                delta,
            }),
            Termination::Deadline => Some(SummaryWarning::DeadlineExceeded {
                routine: routine.to_string(),
                iterations,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline() {
        assert!(!Deadline::none().expired());
        assert!(!Deadline::none().is_set());
        assert!(Deadline::after(Duration::ZERO).expired());
        assert!(!Deadline::after(Duration::from_secs(3600)).expired());
        assert!(Deadline::from_millis(Some(0)).expired());
        assert!(!Deadline::from_millis(None).is_set());
    }

    #[test]
    fn test_termination_warning() {
        assert!(Termination::Converged.warning("svd", 3, 0.0).is_none());

        let warning = Termination::IterationCap.warning("svd", 60, 1e-3).unwrap();
        assert_eq!(
            warning,
            SummaryWarning::NonConvergence {
                routine: "svd".to_string(),
                iterations: 60,
                delta: 1e-3,
            }
        );

        let warning = Termination::Deadline.warning("power_iteration", 7, 0.1).unwrap();
        assert_eq!(warning.routine(), "power_iteration");
        assert!(matches!(
            warning,
            SummaryWarning::DeadlineExceeded { iterations: 7, .. }
        ));
    }
}
