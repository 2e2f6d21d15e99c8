//! The `drift_core` crate is a fixed-step ODE integration engine.
//! It is generic over the state element: real (`f64`) and complex
//! (`Complex<f64>`) states run through the same stepping code.
//!
//! Key components:
//! - **Traits**: `Scalar` (time type), `StateElement` (element arithmetic), `DynamicalSystem` (ODE right-hand side), `Steppable` (Solvers).
//! - **Solvers**: Classical Runge-Kutta 4 (`RK4`).
//! - **Integrate**: `integrate_fixed` / `integrate_n_steps` drivers feeding an `Observer`.
//! - **Models**: the Stuart-Landau oscillator.

pub mod error;
pub mod integrate;
pub mod models;
pub mod observer;
pub mod solvers;
pub mod system;
pub mod traits;

pub use error::{IntegrationError, IntegrationResult};
pub use integrate::{integrate_fixed, integrate_n_steps, step_count, IntegrationSettings};
pub use models::StuartLandau;
pub use observer::{Columns, Observer, StreamingObserver, Trajectory};
pub use solvers::RK4;
pub use system::FnSystem;
pub use traits::{DynamicalSystem, Scalar, StateElement, Steppable};
