//! Run-policy configuration
//!
//! Fixed at boot; there is no runtime reconfiguration path.

use crate::series::Algorithm;

/// Which engines advance each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineSchedule {
    /// Both engines run continuously; switching the displayed algorithm
    /// never disturbs either computation.
    BothRun,
    /// Only the active engine steps. A suspended engine still drains
    /// its pending commands each tick and discards them, so a command
    /// given while inactive never replays on re-activation.
    ActiveOnly,
}

impl EngineSchedule {
    /// Whether the engine for `own` advances a tick while `active` is
    /// the displayed algorithm
    pub fn runs(self, own: Algorithm, active: Algorithm) -> bool {
        match self {
            EngineSchedule::BothRun => true,
            EngineSchedule::ActiveOnly => own == active,
        }
    }
}

/// What a reset does to the elapsed-time bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerResetPolicy {
    /// Reset immediately zeroes the elapsed time and re-stamps the
    /// start tick, even while stopped.
    OnReset,
    /// Reset leaves the elapsed display untouched; the next start
    /// re-stamps the clock.
    OnNextStart,
}

/// Boot-time run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunConfig {
    pub schedule: EngineSchedule,
    pub timer_reset: TimerResetPolicy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            schedule: EngineSchedule::BothRun,
            timer_reset: TimerResetPolicy::OnReset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.schedule, EngineSchedule::BothRun);
        assert_eq!(config.timer_reset, TimerResetPolicy::OnReset);
    }

    #[test]
    fn test_both_run_schedules_every_engine() {
        for own in [Algorithm::Leibniz, Algorithm::Nilkantha] {
            for active in [Algorithm::Leibniz, Algorithm::Nilkantha] {
                assert!(EngineSchedule::BothRun.runs(own, active));
            }
        }
    }

    #[test]
    fn test_active_only_schedules_just_the_active_engine() {
        for own in [Algorithm::Leibniz, Algorithm::Nilkantha] {
            for active in [Algorithm::Leibniz, Algorithm::Nilkantha] {
                assert_eq!(EngineSchedule::ActiveOnly.runs(own, active), own == active);
            }
        }
    }
}
