//! Single-pendulum state and parameters.

/// Gravitational acceleration applied by [`Pendulum::new`], in m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Arm length applied by [`Pendulum::new`], in meters.
pub const DEFAULT_LENGTH: f64 = 1.0;

/// Bob mass applied by [`Pendulum::new`], in kilograms.
pub const DEFAULT_MASS: f64 = 1.0;

/// One simple pendulum: angular state plus physical constants.
///
/// `theta` and `omega` are advanced in place by the stepping operation;
/// `g`, `l` and `m` are fixed after construction. Construction never fails;
/// positivity of `l` and `m` is the caller's contract, enforced upstream by
/// [`crate::config::SimulationConfig`], never here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    /// Angular displacement from the vertical, in radians.
    pub theta: f64,
    /// Angular velocity, in radians per second.
    pub omega: f64,
    /// Local gravitational acceleration, in m/s².
    pub g: f64,
    /// Arm length, in meters. Expected > 0.
    pub l: f64,
    /// Bob mass, in kilograms. Expected > 0.
    pub m: f64,
}

impl Pendulum {
    /// Creates a pendulum with the default constants
    /// ([`STANDARD_GRAVITY`], [`DEFAULT_LENGTH`], [`DEFAULT_MASS`]).
    pub fn new(theta0: f64, omega0: f64) -> Self {
        Self::with_physical(theta0, omega0, STANDARD_GRAVITY, DEFAULT_LENGTH, DEFAULT_MASS)
    }

    /// Creates a pendulum with explicit physical constants, stored verbatim.
    pub fn with_physical(theta0: f64, omega0: f64, g: f64, l: f64, m: f64) -> Self {
        Self {
            theta: theta0,
            omega: omega0,
            g,
            l,
            m,
        }
    }

    /// Kinetic energy ½·m·l²·ω².
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.l * self.l * self.omega * self.omega
    }

    /// Gravitational potential energy m·g·l·(1 − cos θ), referenced to the
    /// lowest point of the swing.
    pub fn potential_energy(&self) -> f64 {
        self.m * self.g * self.l * (1.0 - self.theta.cos())
    }

    /// Mechanical energy of this pendulum alone, kinetic plus gravitational.
    ///
    /// Excludes any share of the coupling term; useful for inspecting energy
    /// transfer between the two pendulums of a coupled system.
    pub fn mechanical_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
