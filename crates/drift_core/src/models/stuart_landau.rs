use crate::traits::{DynamicalSystem, Scalar};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Stuart-Landau oscillator, the normal form of a supercritical Hopf
/// bifurcation, over a single complex amplitude:
///
/// dx/dt = (1 + eta*i) x + (1 + alpha*i) |x|^2 x
///
/// The system is autonomous; `t` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StuartLandau<R> {
    pub eta: R,
    pub alpha: R,
}

impl<R: Scalar> StuartLandau<R> {
    pub fn new(eta: R, alpha: R) -> Self {
        Self { eta, alpha }
    }
}

impl<R: Scalar> Default for StuartLandau<R> {
    fn default() -> Self {
        Self::new(R::one(), R::one())
    }
}

impl<R: Scalar> DynamicalSystem<R, Complex<R>> for StuartLandau<R> {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, _t: R, x: &[Complex<R>], out: &mut [Complex<R>]) {
        let linear = Complex::new(R::one(), self.eta);
        let cubic = Complex::new(R::one(), self.alpha);
        out[0] = linear * x[0] + cubic * x[0].norm_sqr() * x[0];
    }
}
