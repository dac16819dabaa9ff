//! Simulation driver: a lazy, finite sequence of sampled rows.
//!
//! The driver produces [`Sample`] rows; it knows nothing about files or
//! formatting. Callers pick a sink: collect into memory, stream into a
//! callback via [`CoupledPendulums::simulate`], or hand the iterator to one
//! of the writers in [`crate::output`].

use serde::Serialize;

use crate::system::CoupledPendulums;

/// Relative slack when comparing accumulated time against the horizon.
///
/// Time advances by repeated `t += dt`, so after n steps the sum carries up
/// to ~n·ε(tmax) of rounding. Treating `t ≥ tmax·(1 − slop)` as "reached"
/// keeps a horizon that is an exact multiple of `dt` from spilling into one
/// extra step, while leaving genuine overshoot (non-commensurate `dt`)
/// bounded by a single step.
const TIME_SLOP: f64 = 1e-12;

/// One emitted row: time, both pendulums' angular state and the derived
/// energy diagnostics, in the fixed column order
/// `t θ1 ω1 θ2 ω2 KE1 PE1 KE2 PE2 E_total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Accumulated simulation time, in seconds.
    pub t: f64,
    /// Angle of pendulum 1, radians.
    pub theta1: f64,
    /// Angular velocity of pendulum 1, rad/s.
    pub omega1: f64,
    /// Angle of pendulum 2, radians.
    pub theta2: f64,
    /// Angular velocity of pendulum 2, rad/s.
    pub omega2: f64,
    /// Kinetic energy of pendulum 1, joules.
    pub ke1: f64,
    /// Gravitational potential energy of pendulum 1, joules.
    pub pe1: f64,
    /// Kinetic energy of pendulum 2, joules.
    pub ke2: f64,
    /// Gravitational potential energy of pendulum 2, joules.
    pub pe2: f64,
    /// Total mechanical energy of the system, coupling term included.
    pub e_total: f64,
}

/// Lazy, finite iterator over the samples of one run.
///
/// The first item is the t = 0 sample of the untouched initial state. Every
/// later item advances the borrowed system by one RK4 step, accumulates
/// `t += dt` and yields the new row, until the accumulated time reaches the
/// horizon (see [`CoupledPendulums::trajectory`]). Times are non-decreasing;
/// the final row may overshoot `tmax` by at most one step.
pub struct Trajectory<'a> {
    system: &'a mut CoupledPendulums,
    tmax: f64,
    dt: f64,
    t: f64,
    started: bool,
}

impl CoupledPendulums {
    /// Captures the current state and energies as a row stamped with time `t`.
    pub fn sample_at(&self, t: f64) -> Sample {
        Sample {
            t,
            theta1: self.p1().theta,
            omega1: self.p1().omega,
            theta2: self.p2().theta,
            omega2: self.p2().omega,
            ke1: self.p1().kinetic_energy(),
            pe1: self.p1().potential_energy(),
            ke2: self.p2().kinetic_energy(),
            pe2: self.p2().potential_energy(),
            e_total: self.total_energy(),
        }
    }

    /// Returns the lazy sample sequence for a run of `tmax` seconds at fixed
    /// step `dt`, advancing `self` in place as the iterator is consumed.
    ///
    /// Elapsed time accumulates by repeated addition of `dt` (not `n·dt`),
    /// so the stopping time carries the expected floating-point drift; the
    /// iteration ends once `t` has reached `tmax` to within that drift, and
    /// may overshoot by up to one step when the horizon is not a multiple of
    /// `dt`. A fresh system constructed from the same values yields a
    /// bit-identical sequence.
    ///
    /// Both parameters are expected strictly positive; this is the caller's
    /// contract (see [`crate::config::SimulationConfig`]). A non-positive
    /// `dt` degenerates to an empty or unbounded iteration.
    pub fn trajectory(&mut self, tmax: f64, dt: f64) -> Trajectory<'_> {
        Trajectory {
            system: self,
            tmax,
            dt,
            t: 0.0,
            started: false,
        }
    }

    /// Runs the full horizon, handing every sample (the t = 0 row included)
    /// to `sink` in time order.
    pub fn simulate<F: FnMut(&Sample)>(&mut self, tmax: f64, dt: f64, mut sink: F) {
        for sample in self.trajectory(tmax, dt) {
            sink(&sample);
        }
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if !self.started {
            self.started = true;
            return Some(self.system.sample_at(self.t));
        }
        if self.t < self.tmax * (1.0 - TIME_SLOP) {
            self.system.rk4_step(self.dt);
            self.t += self.dt;
            return Some(self.system.sample_at(self.t));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pendulum::Pendulum;

    fn demo_system() -> CoupledPendulums {
        CoupledPendulums::new(
            Pendulum::new(0.3, 0.0),
            Pendulum::new(0.0, 0.0),
            1.0,
        )
    }

    #[test]
    fn unit_horizon_emits_eleven_samples() {
        let mut sys = demo_system();
        let samples: Vec<Sample> = sys.trajectory(1.0, 0.1).collect();

        assert_eq!(samples.len(), 11);
        for (i, s) in samples.iter().enumerate() {
            assert!((s.t - 0.1 * i as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn first_sample_is_the_initial_state() {
        let mut sys = demo_system();
        let initial = *sys.p1();
        let first = sys.trajectory(1.0, 0.1).next().unwrap();

        assert_eq!(first.t, 0.0);
        assert_eq!(first.theta1, initial.theta);
        assert_eq!(first.omega1, initial.omega);
        assert_eq!(first.theta2, 0.0);
        assert_eq!(first.ke1, 0.0);
        assert!((first.pe1 - 0.43814904167780533).abs() < 1e-15);
        assert!((first.e_total - 0.48314904167780531).abs() < 1e-15);
    }

    #[test]
    fn twenty_second_run_emits_2001_samples() {
        let mut sys = demo_system();
        assert_eq!(sys.trajectory(20.0, 0.01).count(), 2001);
    }

    #[test]
    fn non_commensurate_horizon_overshoots_by_one_step() {
        let mut sys = demo_system();
        let samples: Vec<Sample> = sys.trajectory(1.0, 0.3).collect();

        // t = 0, 0.3, 0.6, 0.9, 1.2: the last row crosses the horizon.
        assert_eq!(samples.len(), 5);
        let last = samples.last().unwrap().t;
        assert!(last >= 1.0 && last < 1.3, "last t = {last}");
    }

    #[test]
    fn times_are_non_decreasing() {
        let mut sys = demo_system();
        let samples: Vec<Sample> = sys.trajectory(2.0, 0.05).collect();
        for pair in samples.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn sink_sees_the_same_rows_as_the_iterator() {
        let mut a = demo_system();
        let collected: Vec<Sample> = a.trajectory(1.0, 0.1).collect();

        let mut b = demo_system();
        let mut sunk = Vec::new();
        b.simulate(1.0, 0.1, |s| sunk.push(*s));

        assert_eq!(collected, sunk);
        // Both drivers leave the stepped system in the same final state.
        assert_eq!(a, b);
    }

    #[test]
    fn restarting_from_scratch_reproduces_the_sequence() {
        let first: Vec<Sample> = demo_system().trajectory(2.0, 0.01).collect();
        let second: Vec<Sample> = demo_system().trajectory(2.0, 0.01).collect();
        assert_eq!(first, second);
    }
}
