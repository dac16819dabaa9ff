//! # Coupled Pendulums
//!
//! Fixed-step simulation of two pendulums joined by a restoring interaction,
//! with per-step energy diagnostics for inspecting energy transfer between
//! the pendulums and energy conservation over time.
//!
//! ## Features
//!
//! - Classical fourth-order Runge-Kutta stepping of the full 4-component
//!   state `[θ1, ω1, θ2, ω2]`
//! - Pure, bit-reproducible energy probes: kinetic, gravitational,
//!   coupling and total
//! - A lazy, finite [`Trajectory`] iterator decoupling the stepping loop
//!   from any output sink
//! - Text serialization of sample rows ([`write_dat`], [`write_jsonl`])
//! - Parameter validation at the boundary ([`SimulationConfig`]); the core
//!   itself is total over floating-point input
//!
//! ## Basic Usage
//!
//! ```rust
//! use coupled_pendulums::{CoupledPendulums, Pendulum};
//!
//! // Two identical 1 m pendulums, the first displaced by 0.3 rad.
//! let mut system = CoupledPendulums::new(
//!     Pendulum::new(0.3, 0.0),
//!     Pendulum::new(0.0, 0.0),
//!     1.0,
//! );
//!
//! // One sample at t = 0 plus one per 0.1 s step.
//! let samples: Vec<_> = system.trajectory(1.0, 0.1).collect();
//! assert_eq!(samples.len(), 11);
//! assert!(samples[0].e_total > 0.0);
//! ```
//!
//! ## Writing a trajectory file
//!
//! ```rust
//! use coupled_pendulums::{write_dat, CoupledPendulums, Pendulum};
//!
//! let mut system = CoupledPendulums::new(
//!     Pendulum::new(0.3, 0.0),
//!     Pendulum::new(0.0, 0.0),
//!     0.5,
//! );
//!
//! let mut buf = Vec::new();
//! write_dat(&mut buf, system.trajectory(2.0, 0.01))?;
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Energy bookkeeping caveat
//!
//! The interaction torque is quadratic in the angle difference, κ·(Δθ)²,
//! while the coupling energy is the quadratic potential ½·κ·(Δθ)². The
//! torque is not the gradient of that potential, so with κ ≠ 0 and unequal
//! angles the reported total energy drifts well beyond integrator error.
//! The drift is a property of the force law and is preserved deliberately;
//! see [`system`] and DESIGN.md.
//!
//! ## References
//!
//! 1. Hairer, E., Nørsett, S.P., & Wanner, G. (1993). "Solving Ordinary
//!    Differential Equations I: Nonstiff Problems". Springer.
//! 2. Goldstein, H., Poole, C., & Safko, J. (2002). "Classical Mechanics",
//!    3rd ed., ch. 6 (coupled oscillations). Addison-Wesley.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod output;
pub mod pendulum;
pub mod system;
pub mod trajectory;

pub use config::{ConfigError, SimulationConfig};
pub use output::{write_dat, write_jsonl, DAT_HEADER};
pub use pendulum::{Pendulum, DEFAULT_LENGTH, DEFAULT_MASS, STANDARD_GRAVITY};
pub use system::CoupledPendulums;
pub use trajectory::{Sample, Trajectory};
