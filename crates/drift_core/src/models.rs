//! Reference systems built on the `DynamicalSystem` contract.

pub mod stuart_landau;

pub use stuart_landau::StuartLandau;
