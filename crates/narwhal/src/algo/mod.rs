pub mod kamada_kawai;

use crate::error::{Error, Result};
use crate::graph::Canvas;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KamadaKawaiOptions {
    /// Numerator of the stiffness matrix: `K[i][j] = spring_constant / D[i][j]^2`.
    pub spring_constant: f64,
    /// The outer loop stops once epsilon drops to or below this value.
    pub min_epsilon: f64,
    /// Newton steps allowed across the whole run before stopping early.
    pub max_passes: usize,
    /// A sweep must lower the largest gradient magnitude by more than this to continue.
    pub stall_threshold: f64,
    /// Fraction of epsilon removed after every outer iteration, in `[f64::EPSILON, 1]`.
    pub epsilon_decay: f64,
    pub canvas: Canvas,
}

impl Default for KamadaKawaiOptions {
    fn default() -> Self {
        Self {
            spring_constant: 1.0,
            min_epsilon: 1.0,
            max_passes: 1000,
            stall_threshold: 0.1,
            epsilon_decay: 0.25,
            canvas: Canvas::default(),
        }
    }
}

impl KamadaKawaiOptions {
    pub fn validate(&self) -> Result<()> {
        let invalid = |option: &'static str, value: f64| -> Result<()> {
            Err(Error::InvalidOption { option, value })
        };
        if !(self.spring_constant.is_finite() && self.spring_constant >= 0.0) {
            return invalid("spring_constant", self.spring_constant);
        }
        if !(self.min_epsilon.is_finite() && self.min_epsilon > 0.0) {
            return invalid("min_epsilon", self.min_epsilon);
        }
        if !(self.stall_threshold.is_finite() && self.stall_threshold >= 0.0) {
            return invalid("stall_threshold", self.stall_threshold);
        }
        // Smaller decays can round to a no-op and leave epsilon where it is.
        if !(self.epsilon_decay >= f64::EPSILON && self.epsilon_decay <= 1.0) {
            return invalid("epsilon_decay", self.epsilon_decay);
        }
        self.canvas.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(KamadaKawaiOptions::default().validate().is_ok());
    }

    #[test]
    fn decay_outside_unit_interval_is_rejected() {
        for decay in [0.0, -0.5, 1.5, 1e-300, f64::EPSILON / 2.0, f64::NAN] {
            let opts = KamadaKawaiOptions {
                epsilon_decay: decay,
                ..Default::default()
            };
            assert!(
                matches!(
                    opts.validate(),
                    Err(Error::InvalidOption {
                        option: "epsilon_decay",
                        ..
                    })
                ),
                "decay {decay}"
            );
        }
    }

    #[test]
    fn smallest_accepted_decay_still_shrinks_epsilon() {
        let opts = KamadaKawaiOptions {
            epsilon_decay: f64::EPSILON,
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
        let epsilon: f64 = 1234.5;
        assert!(epsilon - epsilon * opts.epsilon_decay < epsilon);
    }

    #[test]
    fn non_positive_min_epsilon_is_rejected() {
        let opts = KamadaKawaiOptions {
            min_epsilon: 0.0,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }
}
