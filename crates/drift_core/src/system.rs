use crate::traits::{DynamicalSystem, Scalar, StateElement};
use std::fmt;
use std::marker::PhantomData;

/// A `DynamicalSystem` backed by a closure.
///
/// Parameters are whatever the closure captures; they are fixed once the
/// system is built.
pub struct FnSystem<R, E, F> {
    dimension: usize,
    rhs: F,
    _marker: PhantomData<fn(R, &[E])>,
}

impl<R, E, F> FnSystem<R, E, F>
where
    R: Scalar,
    E: StateElement<R>,
    F: Fn(R, &[E], &mut [E]),
{
    pub fn new(dimension: usize, rhs: F) -> Self {
        Self {
            dimension,
            rhs,
            _marker: PhantomData,
        }
    }
}

impl<R, E, F> DynamicalSystem<R, E> for FnSystem<R, E, F>
where
    R: Scalar,
    E: StateElement<R>,
    F: Fn(R, &[E], &mut [E]),
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn apply(&self, t: R, x: &[E], out: &mut [E]) {
        (self.rhs)(t, x, out)
    }
}

impl<R, E, F> fmt::Debug for FnSystem<R, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSystem")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}
