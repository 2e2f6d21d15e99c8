use crate::error::{IntegrationError, IntegrationResult};
use crate::observer::Observer;
use crate::traits::{DynamicalSystem, Scalar, StateElement, Steppable};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Relative slack, in machine epsilons, applied to `(t_end - t_start) / dt`
/// before flooring. An interval that is a whole number of steps up to
/// rounding gets that whole number of steps.
const STEP_COUNT_SLACK_EPS: f64 = 4.0;

/// Time window and step size for a fixed-step run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationSettings<R = f64> {
    pub t_start: R,
    pub t_end: R,
    pub dt: R,
}

impl Default for IntegrationSettings<f64> {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: 10.0,
            dt: 0.1,
        }
    }
}

impl<R: Scalar> IntegrationSettings<R> {
    pub fn new(t_start: R, t_end: R, dt: R) -> Self {
        Self { t_start, t_end, dt }
    }

    pub fn validate(&self) -> IntegrationResult<()> {
        validate_time_arguments(self.t_start, self.t_end, self.dt)
    }

    /// Number of steps the run will take.
    pub fn steps(&self) -> IntegrationResult<usize> {
        step_count(self.t_start, self.t_end, self.dt)
    }

    /// Number of observer calls, the initial sample included.
    pub fn sample_count(&self) -> IntegrationResult<usize> {
        Ok(self.steps()? + 1)
    }

    pub fn run<E, S, St, O>(
        &self,
        stepper: &mut St,
        system: S,
        state: &mut [E],
        observer: &mut O,
    ) -> IntegrationResult<usize>
    where
        E: StateElement<R>,
        S: DynamicalSystem<R, E>,
        St: Steppable<R, E>,
        O: Observer<R, E>,
    {
        integrate_fixed(
            stepper,
            system,
            state,
            self.t_start,
            self.t_end,
            self.dt,
            observer,
        )
    }
}

fn to_f64<R: Scalar>(value: R) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn validate_time_arguments<R: Scalar>(t_start: R, t_end: R, dt: R) -> IntegrationResult<()> {
    if !dt.is_finite() || dt <= R::zero() {
        return Err(IntegrationError::InvalidStepSize { dt: to_f64(dt) });
    }
    if !t_start.is_finite() || !t_end.is_finite() {
        return Err(IntegrationError::NonFiniteBounds {
            t_start: to_f64(t_start),
            t_end: to_f64(t_end),
        });
    }
    Ok(())
}

fn validate_dimensions<R, E, S, St>(
    stepper: &St,
    system: &S,
    state: &[E],
) -> IntegrationResult<()>
where
    R: Scalar,
    E: StateElement<R>,
    S: DynamicalSystem<R, E>,
    St: Steppable<R, E>,
{
    if system.dimension() != state.len() {
        return Err(IntegrationError::DimensionMismatch {
            what: "system",
            expected: system.dimension(),
            actual: state.len(),
        });
    }
    if stepper.dimension() != state.len() {
        return Err(IntegrationError::DimensionMismatch {
            what: "stepper",
            expected: stepper.dimension(),
            actual: state.len(),
        });
    }
    Ok(())
}

/// Number of whole steps of size `dt` that fit in `[t_start, t_end]`.
///
/// A reversed interval yields zero. No partial final step is ever counted.
pub fn step_count<R: Scalar>(t_start: R, t_end: R, dt: R) -> IntegrationResult<usize> {
    validate_time_arguments(t_start, t_end, dt)?;
    if t_end <= t_start {
        return Ok(0);
    }

    let slack = R::epsilon() * R::from_f64(STEP_COUNT_SLACK_EPS).unwrap_or_else(R::one);
    let ratio = (t_end - t_start) / dt;
    let steps = (ratio * (R::one() + slack)).floor();
    steps
        .to_usize()
        .ok_or(IntegrationError::TooManySteps {
            steps: to_f64(steps),
        })
}

fn run_steps<R, E, S, St, O>(
    stepper: &mut St,
    system: &S,
    state: &mut [E],
    t_start: R,
    dt: R,
    steps: usize,
    observer: &mut O,
) -> R
where
    R: Scalar,
    E: StateElement<R>,
    S: DynamicalSystem<R, E>,
    St: Steppable<R, E>,
    O: Observer<R, E>,
{
    let mut t = t_start;
    observer.observe(t, state);

    for step in 0..steps {
        stepper.step(system, &mut t, state, dt);
        trace!(step, t = ?t, "step accepted");
        observer.observe(t, state);
    }

    t
}

/// Integrates `system` from `t_start` to `t_end` with a constant step `dt`.
///
/// The observer sees the initial state at `t_start`, then the state after each
/// of the `step_count(t_start, t_end, dt)` steps. If the interval is not a
/// whole number of steps the last sample falls short of `t_end` by less than
/// `dt`. Returns the number of steps taken.
pub fn integrate_fixed<R, E, S, St, O>(
    stepper: &mut St,
    system: S,
    state: &mut [E],
    t_start: R,
    t_end: R,
    dt: R,
    observer: &mut O,
) -> IntegrationResult<usize>
where
    R: Scalar,
    E: StateElement<R>,
    S: DynamicalSystem<R, E>,
    St: Steppable<R, E>,
    O: Observer<R, E>,
{
    let steps = step_count(t_start, t_end, dt)?;
    validate_dimensions::<R, E, S, St>(stepper, &system, state)?;

    debug!(
        t_start = ?t_start,
        t_end = ?t_end,
        dt = ?dt,
        steps,
        dimension = state.len(),
        "starting fixed-step integration"
    );
    let t_final = run_steps(stepper, &system, state, t_start, dt, steps, observer);
    debug!(steps, t_final = ?t_final, "fixed-step integration finished");

    Ok(steps)
}

/// Takes exactly `steps` steps of size `dt` starting at `t_start`.
/// Returns the time of the last sample.
pub fn integrate_n_steps<R, E, S, St, O>(
    stepper: &mut St,
    system: S,
    state: &mut [E],
    t_start: R,
    dt: R,
    steps: usize,
    observer: &mut O,
) -> IntegrationResult<R>
where
    R: Scalar,
    E: StateElement<R>,
    S: DynamicalSystem<R, E>,
    St: Steppable<R, E>,
    O: Observer<R, E>,
{
    validate_time_arguments(t_start, t_start, dt)?;
    validate_dimensions::<R, E, S, St>(stepper, &system, state)?;

    debug!(t_start = ?t_start, dt = ?dt, steps, "starting n-step integration");
    let t_final = run_steps(stepper, &system, state, t_start, dt, steps, observer);
    debug!(t_final = ?t_final, "n-step integration finished");

    Ok(t_final)
}
