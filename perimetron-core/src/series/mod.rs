//! Pi approximation series
//!
//! Two historical alternating series for π: the Leibniz series
//! (slow, linear convergence) and the Nilkantha series (fast, cubic
//! convergence). Both are advanced one term per engine tick.

mod engine;

pub use engine::{PendingCommands, SeriesEngine};

/// Convergence threshold against π
pub const ACCURACY_THRESHOLD: f64 = 1e-5;

/// The constant both series approximate
pub const TARGET: f64 = core::f64::consts::PI;

/// Series algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Algorithm {
    /// 4 * (1 - 1/3 + 1/5 - 1/7 + ...)
    Leibniz,
    /// 3 + 4/(2*3*4) - 4/(4*5*6) + 4/(6*7*8) - ...
    Nilkantha,
}

impl Algorithm {
    /// Starting value of the partial sum before any term is added
    pub const fn initial_value(self) -> f64 {
        match self {
            Algorithm::Leibniz => 0.0,
            // The leading closed-form term of the Nilkantha series
            Algorithm::Nilkantha => 3.0,
        }
    }

    /// The n-th series term, including the alternating sign
    pub fn term(self, iteration: u32, sign: f64) -> f64 {
        match self {
            Algorithm::Leibniz => sign * 4.0 / (2 * iteration as u64 + 1) as f64,
            Algorithm::Nilkantha => {
                let n = (2 * iteration as u64) as f64;
                sign * 4.0 / ((n + 2.0) * (n + 3.0) * (n + 4.0))
            }
        }
    }

    /// Name shown on the display's title row
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Leibniz => "Leibniz Series",
            Algorithm::Nilkantha => "Nilkantha Method",
        }
    }

    /// The other algorithm (switch-algorithm command)
    pub const fn toggled(self) -> Self {
        match self {
            Algorithm::Leibniz => Algorithm::Nilkantha,
            Algorithm::Nilkantha => Algorithm::Leibniz,
        }
    }

    /// Stable index for atomic storage across tasks
    pub const fn index(self) -> u8 {
        match self {
            Algorithm::Leibniz => 0,
            Algorithm::Nilkantha => 1,
        }
    }

    /// Inverse of [`Algorithm::index`]; unknown values decode as Leibniz
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => Algorithm::Nilkantha,
            _ => Algorithm::Leibniz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        assert_eq!(Algorithm::Leibniz.initial_value(), 0.0);
        assert_eq!(Algorithm::Nilkantha.initial_value(), 3.0);
    }

    #[test]
    fn test_first_terms() {
        // Leibniz: 4/1, -4/3
        assert_eq!(Algorithm::Leibniz.term(0, 1.0), 4.0);
        assert_eq!(Algorithm::Leibniz.term(1, -1.0), -4.0 / 3.0);

        // Nilkantha: 4/(2*3*4), -4/(4*5*6)
        assert_eq!(Algorithm::Nilkantha.term(0, 1.0), 4.0 / 24.0);
        assert_eq!(Algorithm::Nilkantha.term(1, -1.0), -4.0 / 120.0);
    }

    #[test]
    fn test_toggle_roundtrip() {
        for algorithm in [Algorithm::Leibniz, Algorithm::Nilkantha] {
            assert_ne!(algorithm.toggled(), algorithm);
            assert_eq!(algorithm.toggled().toggled(), algorithm);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for algorithm in [Algorithm::Leibniz, Algorithm::Nilkantha] {
            assert_eq!(Algorithm::from_index(algorithm.index()), algorithm);
        }
        // Unknown values fall back to Leibniz
        assert_eq!(Algorithm::from_index(0xFF), Algorithm::Leibniz);
    }

    #[test]
    fn test_display_names_fit_screen() {
        for algorithm in [Algorithm::Leibniz, Algorithm::Nilkantha] {
            assert!(algorithm.display_name().len() <= 20);
        }
    }
}
