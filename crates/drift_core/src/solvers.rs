use crate::traits::{DynamicalSystem, Scalar, StateElement, Steppable};
use num_traits::Zero;

/// Classic Runge-Kutta 4th Order Solver
///
/// Holds only scratch buffers; nothing about the trajectory survives a call
/// to `step`, so one instance can be reused across runs of the same dimension.
#[derive(Debug, Clone)]
pub struct RK4<E> {
    k1: Vec<E>,
    k2: Vec<E>,
    k3: Vec<E>,
    k4: Vec<E>,
    tmp: Vec<E>,
}

impl<E> RK4<E> {
    pub const ORDER: usize = 4;
    pub const STAGES: usize = 4;
}

impl<E: Copy + Zero> RK4<E> {
    pub fn new(dim: usize) -> Self {
        Self {
            k1: vec![E::zero(); dim],
            k2: vec![E::zero(); dim],
            k3: vec![E::zero(); dim],
            k4: vec![E::zero(); dim],
            tmp: vec![E::zero(); dim],
        }
    }
}

impl<R: Scalar, E: StateElement<R>> Steppable<R, E> for RK4<E> {
    fn dimension(&self) -> usize {
        self.tmp.len()
    }

    fn step(&mut self, system: &impl DynamicalSystem<R, E>, t: &mut R, state: &mut [E], dt: R) {
        let two = R::one() + R::one();
        let half_dt = dt / two;
        let sixth_dt = dt / (two * (two + R::one()));

        let t0 = *t;

        // k1 = f(t, y)
        system.apply(t0, state, &mut self.k1);

        // k2 = f(t + dt/2, y + dt*k1/2)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + self.k1[i] * half_dt;
        }
        system.apply(t0 + half_dt, &self.tmp, &mut self.k2);

        // k3 = f(t + dt/2, y + dt*k2/2)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + self.k2[i] * half_dt;
        }
        system.apply(t0 + half_dt, &self.tmp, &mut self.k3);

        // k4 = f(t + dt, y + dt*k3)
        for i in 0..state.len() {
            self.tmp[i] = state[i] + self.k3[i] * dt;
        }
        system.apply(t0 + dt, &self.tmp, &mut self.k4);

        // y_next = y + dt/6 * (k1 + 2k2 + 2k3 + k4)
        for i in 0..state.len() {
            state[i] = state[i]
                + (self.k1[i] + self.k2[i] * two + self.k3[i] * two + self.k4[i]) * sixth_dt;
        }

        *t = t0 + dt;
    }
}
