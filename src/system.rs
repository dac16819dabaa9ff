//! Two pendulums joined by a restoring interaction: derivative law,
//! fixed-step RK4 advancement and energy accounting.
//!
//! The state vector is `[θ1, ω1, θ2, ω2]`:
//!
//! ```text
//! dθ1/dt = ω1        dω1/dt = -(g1/l1)·sin θ1 - κ·(θ1-θ2)²
//! dθ2/dt = ω2        dω2/dt = -(g2/l2)·sin θ2 - κ·(θ2-θ1)²
//! ```
//!
//! The interaction torque is quadratic in the angle difference and therefore
//! loses its sign: it is *not* the gradient of the quadratic coupling energy
//! reported by [`CoupledPendulums::coupling_energy`]. With κ ≠ 0 and unequal
//! angles, [`CoupledPendulums::total_energy`] drifts far beyond integrator
//! truncation error. That drift is a property of the force law, not of the
//! integrator, and is pinned by tests; see DESIGN.md before changing either
//! side of the mismatch.

use crate::pendulum::Pendulum;

/// Two pendulums and a coupling strength, advanced as one 4-component state.
///
/// The pendulums are owned by value and mutated only through
/// [`CoupledPendulums::rk4_step`]; every other method is a read-only probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoupledPendulums {
    p1: Pendulum,
    p2: Pendulum,
    kappa: f64,
}

impl CoupledPendulums {
    /// Creates the coupled system from two pendulums and a coupling strength.
    ///
    /// `kappa` is expected ≥ 0; a negative value is accepted and inverts the
    /// sign of the interaction torque.
    pub fn new(p1: Pendulum, p2: Pendulum, kappa: f64) -> Self {
        Self { p1, p2, kappa }
    }

    /// First pendulum.
    pub fn p1(&self) -> &Pendulum {
        &self.p1
    }

    /// Second pendulum.
    pub fn p2(&self) -> &Pendulum {
        &self.p2
    }

    /// Coupling strength.
    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    /// Potential energy stored in the coupling, ½·κ·(θ1 − θ2)².
    ///
    /// A property of the system's two angles, not of either pendulum alone.
    pub fn coupling_energy(&self) -> f64 {
        0.5 * self.kappa * (self.p1.theta - self.p2.theta).powi(2)
    }

    /// Total mechanical energy: both kinetic terms, both gravitational terms
    /// and the coupling term.
    ///
    /// Not a conserved quantity of the force law when κ ≠ 0 and the angles
    /// differ (see the module docs); with κ = 0 it is conserved to within
    /// integrator truncation error.
    pub fn total_energy(&self) -> f64 {
        self.p1.kinetic_energy()
            + self.p2.kinetic_energy()
            + self.p1.potential_energy()
            + self.p2.potential_energy()
            + self.coupling_energy()
    }

    /// Evaluate the right-hand side of the ODE system, dy/dt = f(y).
    ///
    /// `y` and `dydt` are ordered `[θ1, ω1, θ2, ω2]`. The law is autonomous,
    /// so no time argument is taken.
    fn rhs(&self, y: &[f64; 4], dydt: &mut [f64; 4]) {
        let [theta1, omega1, theta2, omega2] = *y;

        dydt[0] = omega1;
        dydt[1] =
            -(self.p1.g / self.p1.l) * theta1.sin() - self.kappa * (theta1 - theta2).powi(2);
        dydt[2] = omega2;
        dydt[3] =
            -(self.p2.g / self.p2.l) * theta2.sin() - self.kappa * (theta2 - theta1).powi(2);
    }

    fn state(&self) -> [f64; 4] {
        [self.p1.theta, self.p1.omega, self.p2.theta, self.p2.omega]
    }

    fn set_state(&mut self, y: &[f64; 4]) {
        self.p1.theta = y[0];
        self.p1.omega = y[1];
        self.p2.theta = y[2];
        self.p2.omega = y[3];
    }

    /// Advance both pendulums by one classical RK4 step of size `dt`.
    ///
    /// All four stage derivatives are evaluated from the pre-step state (at
    /// the stage points t, t+dt/2, t+dt/2, t+dt) and combined with the
    /// standard weights (1, 2, 2, 1)/6; the updated state is written back in
    /// one go, so observers never see a partially advanced system.
    ///
    /// Any `dt` is accepted; there are no error paths. A step large enough
    /// to destabilize the scheme produces NaN/Inf state that propagates
    /// silently through later steps and energy probes; preventing that is the
    /// caller's responsibility (see [`crate::config::SimulationConfig`]).
    pub fn rk4_step(&mut self, dt: f64) {
        let y = self.state();
        let mut y_temp = [0.0; 4];

        let mut k1 = [0.0; 4];
        self.rhs(&y, &mut k1);

        for n in 0..4 {
            y_temp[n] = y[n] + 0.5 * dt * k1[n];
        }
        let mut k2 = [0.0; 4];
        self.rhs(&y_temp, &mut k2);

        for n in 0..4 {
            y_temp[n] = y[n] + 0.5 * dt * k2[n];
        }
        let mut k3 = [0.0; 4];
        self.rhs(&y_temp, &mut k3);

        for n in 0..4 {
            y_temp[n] = y[n] + dt * k3[n];
        }
        let mut k4 = [0.0; 4];
        self.rhs(&y_temp, &mut k4);

        let mut y_new = [0.0; 4];
        for n in 0..4 {
            y_new[n] = y[n] + (dt / 6.0) * (k1[n] + 2.0 * k2[n] + 2.0 * k3[n] + k4[n]);
        }
        self.set_state(&y_new);
    }
}
