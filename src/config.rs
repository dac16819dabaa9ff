//! Parameter validation at the caller boundary.
//!
//! The integrator itself is total over floating-point input: it rejects
//! nothing and lets NaN/Inf propagate. All invalid-parameter policy lives
//! here, before the core is invoked: reject non-finite values and
//! non-positive lengths, masses, steps and horizons, then build the system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pendulum::{Pendulum, DEFAULT_LENGTH, DEFAULT_MASS, STANDARD_GRAVITY};
use crate::system::CoupledPendulums;

/// A rejected simulation parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The named parameter was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name as spelled in [`SimulationConfig`].
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The named parameter must be strictly positive.
    #[error("{name} must be > 0, got {value}")]
    NonPositive {
        /// Parameter name as spelled in [`SimulationConfig`].
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Full parameter set for one simulation run.
///
/// `kappa` may be negative (it inverts the interaction sign); only
/// non-finite values are rejected for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Initial angle of pendulum 1, radians.
    pub theta1_0: f64,
    /// Initial angular velocity of pendulum 1, rad/s.
    pub omega1_0: f64,
    /// Initial angle of pendulum 2, radians.
    pub theta2_0: f64,
    /// Initial angular velocity of pendulum 2, rad/s.
    pub omega2_0: f64,
    /// Gravitational acceleration shared by both pendulums, m/s².
    pub g: f64,
    /// Arm length shared by both pendulums, meters. Must be > 0.
    pub length: f64,
    /// Bob mass shared by both pendulums, kilograms. Must be > 0.
    pub mass: f64,
    /// Coupling strength.
    pub kappa: f64,
    /// Simulation horizon, seconds. Must be > 0.
    pub tmax: f64,
    /// Fixed integration step, seconds. Must be > 0.
    pub dt: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            theta1_0: 0.3,
            omega1_0: 0.0,
            theta2_0: 0.0,
            omega2_0: 0.0,
            g: STANDARD_GRAVITY,
            length: DEFAULT_LENGTH,
            mass: DEFAULT_MASS,
            kappa: 1.0,
            tmax: 20.0,
            dt: 0.01,
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("theta1_0", self.theta1_0),
            ("omega1_0", self.omega1_0),
            ("theta2_0", self.theta2_0),
            ("omega2_0", self.omega2_0),
            ("g", self.g),
            ("length", self.length),
            ("mass", self.mass),
            ("kappa", self.kappa),
            ("tmax", self.tmax),
            ("dt", self.dt),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        let positive = [
            ("length", self.length),
            ("mass", self.mass),
            ("tmax", self.tmax),
            ("dt", self.dt),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Validates, then builds the coupled system these parameters describe.
    pub fn build(&self) -> Result<CoupledPendulums, ConfigError> {
        self.validate()?;
        let p1 = Pendulum::with_physical(self.theta1_0, self.omega1_0, self.g, self.length, self.mass);
        let p2 = Pendulum::with_physical(self.theta2_0, self.omega2_0, self.g, self.length, self.mass);
        Ok(CoupledPendulums::new(p1, p2, self.kappa))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_step_rejected() {
        let config = SimulationConfig {
            dt: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "dt",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_length_rejected() {
        let config = SimulationConfig {
            length: -1.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "length", .. })
        ));
    }

    #[test]
    fn nan_kappa_rejected_but_negative_allowed() {
        let nan = SimulationConfig {
            kappa: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NonFinite { name: "kappa", .. })
        ));

        let negative = SimulationConfig {
            kappa: -2.0,
            ..SimulationConfig::default()
        };
        assert_eq!(negative.validate(), Ok(()));
    }

    #[test]
    fn build_applies_every_field() {
        let config = SimulationConfig {
            theta1_0: 0.1,
            omega1_0: -0.2,
            theta2_0: 0.3,
            omega2_0: -0.4,
            g: 1.62,
            length: 2.0,
            mass: 0.5,
            kappa: 0.25,
            ..SimulationConfig::default()
        };
        let sys = config.build().unwrap();
        assert_eq!(sys.p1().theta, 0.1);
        assert_eq!(sys.p1().omega, -0.2);
        assert_eq!(sys.p2().theta, 0.3);
        assert_eq!(sys.p2().omega, -0.4);
        assert_eq!(sys.p1().g, 1.62);
        assert_eq!(sys.p2().l, 2.0);
        assert_eq!(sys.p1().m, 0.5);
        assert_eq!(sys.kappa(), 0.25);
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let err = SimulationConfig {
            tmax: -5.0,
            ..SimulationConfig::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "tmax must be > 0, got -5");
    }
}
