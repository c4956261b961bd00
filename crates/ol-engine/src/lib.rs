//! # ol-engine
//!
//! Objects handed to the numerical optimization engine: search domains (in
//! native and reference families), covariance kernels, the Gaussian process
//! container, and optimizer parameter objects.

pub mod covariance;
pub mod domain;
pub mod gaussian_process;
pub mod optimizer;

pub use covariance::{
    default_hyperparameters, Covariance, CovarianceType, MaternNu1p5, MaternNu2p5,
    SquareExponential,
};
pub use domain::{Domain, DomainType};
pub use gaussian_process::GaussianProcess;
pub use optimizer::{
    GradientDescentParameters, NewtonParameters, NullParameters, OptimizerKind,
    OptimizerParameters, OptimizerType,
};
