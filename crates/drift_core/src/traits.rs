use num_traits::{Float, FromPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// A trait for real types used for time and step size.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Element of a state vector.
///
/// Steppers only ever add elements together and scale them by a real factor,
/// so both `f64` and `Complex<f64>` qualify without any special casing.
pub trait StateElement<R: Scalar>:
    Copy + Debug + Zero + Add<Output = Self> + Mul<R, Output = Self>
{
}

impl<R, E> StateElement<R> for E
where
    R: Scalar,
    E: Copy + Debug + Zero + Add<Output = E> + Mul<R, Output = E>,
{
}

/// Represents a system of ordinary differential equations.
pub trait DynamicalSystem<R: Scalar, E: StateElement<R>> {
    /// Returns the dimension of the state space.
    fn dimension(&self) -> usize;

    /// Evaluates the vector field.
    /// t: current time
    /// x: current state
    /// out: buffer to write dx/dt into
    fn apply(&self, t: R, x: &[E], out: &mut [E]);
}

impl<R, E, S> DynamicalSystem<R, E> for &S
where
    R: Scalar,
    E: StateElement<R>,
    S: DynamicalSystem<R, E> + ?Sized,
{
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn apply(&self, t: R, x: &[E], out: &mut [E]) {
        (**self).apply(t, x, out)
    }
}

/// A trait for solvers that can step a system forward.
pub trait Steppable<R: Scalar, E: StateElement<R>> {
    /// Length of the state this stepper was allocated for.
    fn dimension(&self) -> usize;

    /// Performs one step of size dt.
    /// t: current time (updated after step)
    /// state: current state (updated after step)
    /// dt: step size
    fn step(&mut self, system: &impl DynamicalSystem<R, E>, t: &mut R, state: &mut [E], dt: R);
}
