//! Covariance (kernel) functions.
//!
//! All kernels here are stationary and share one hyperparameter layout:
//! `[alpha, l_1, ..., l_dim]`, the signal variance followed by one length scale
//! per dimension. Every entry must be strictly positive and finite.

use ol_types::CovarianceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic covariance kinds accepted in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CovarianceType {
    SquareExponential,
    MaternNu1p5,
    MaternNu2p5,
}

impl CovarianceType {
    pub const ALL: [CovarianceType; 3] = [
        CovarianceType::SquareExponential,
        CovarianceType::MaternNu1p5,
        CovarianceType::MaternNu2p5,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CovarianceType::SquareExponential => "square_exponential",
            CovarianceType::MaternNu1p5 => "matern_nu_1p5",
            CovarianceType::MaternNu2p5 => "matern_nu_2p5",
        }
    }
}

impl fmt::Display for CovarianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Covariance: fmt::Debug + Send + Sync {
    fn covariance_type(&self) -> CovarianceType;

    fn dim(&self) -> usize;

    fn hyperparameters(&self) -> &[f64];

    fn num_hyperparameters(&self) -> usize {
        self.hyperparameters().len()
    }

    /// Replace the hyperparameters; the new vector must fit the same dimension.
    fn set_hyperparameters(&mut self, hyperparameters: Vec<f64>) -> Result<(), CovarianceError>;

    /// Covariance between two points of dimension `dim`.
    fn covariance(&self, point_one: &[f64], point_two: &[f64]) -> f64;
}

/// Canonical default hyperparameters for `dim` dimensions: all ones.
pub fn default_hyperparameters(dim: usize) -> Result<Vec<f64>, CovarianceError> {
    Ok(vec![1.0; num_hyperparameters_for(dim)?])
}

/// `dim + 1`: the signal variance plus one length scale per dimension.
fn num_hyperparameters_for(dim: usize) -> Result<usize, CovarianceError> {
    dim.checked_add(1).ok_or(CovarianceError::DimensionTooLarge { dim })
}

fn check_hyperparameters(
    covariance_type: CovarianceType,
    dim: usize,
    hyperparameters: &[f64],
) -> Result<(), CovarianceError> {
    let invalid = |message: String| CovarianceError::InvalidHyperparameters {
        covariance_type: covariance_type.to_string(),
        message,
    };

    let expected = num_hyperparameters_for(dim)?;
    if hyperparameters.len() != expected {
        return Err(invalid(format!(
            "expected {} hyperparameters for dimension {}, got {}",
            expected,
            dim,
            hyperparameters.len()
        )));
    }
    if let Some((i, h)) = hyperparameters
        .iter()
        .enumerate()
        .find(|(_, h)| !(h.is_finite() && **h > 0.0))
    {
        return Err(invalid(format!("hyperparameter {i} must be positive and finite, got {h}")));
    }
    Ok(())
}

/// Squared distance scaled by per-dimension inverse squared length scales.
fn scaled_distance_squared(inv_length_sq: &[f64], point_one: &[f64], point_two: &[f64]) -> f64 {
    point_one
        .iter()
        .zip(point_two)
        .zip(inv_length_sq)
        .map(|((a, b), w)| (a - b) * (a - b) * w)
        .sum()
}

// ---------------------------------------------------------------------------
// Native kernels
// ---------------------------------------------------------------------------

/// Stationary kernel with precomputed inverse squared length scales.
#[derive(Debug, Clone, PartialEq)]
struct ScaledKernel {
    covariance_type: CovarianceType,
    hyperparameters: Vec<f64>,
    inv_length_sq: Vec<f64>,
}

impl ScaledKernel {
    fn new(
        covariance_type: CovarianceType,
        dim: usize,
        hyperparameters: Vec<f64>,
    ) -> Result<Self, CovarianceError> {
        check_hyperparameters(covariance_type, dim, &hyperparameters)?;
        let inv_length_sq = hyperparameters[1..].iter().map(|l| 1.0 / (l * l)).collect();
        Ok(Self {
            covariance_type,
            hyperparameters,
            inv_length_sq,
        })
    }

    fn dim(&self) -> usize {
        self.inv_length_sq.len()
    }

    fn alpha(&self) -> f64 {
        self.hyperparameters[0]
    }

    fn set_hyperparameters(&mut self, hyperparameters: Vec<f64>) -> Result<(), CovarianceError> {
        *self = Self::new(self.covariance_type, self.dim(), hyperparameters)?;
        Ok(())
    }

    fn distance_squared(&self, point_one: &[f64], point_two: &[f64]) -> f64 {
        scaled_distance_squared(&self.inv_length_sq, point_one, point_two)
    }
}

macro_rules! impl_scaled_covariance {
    ($name:ident, $kind:expr, |$kernel:ident, $r2:ident| $body:expr) => {
        impl $name {
            pub fn new(dim: usize, hyperparameters: Vec<f64>) -> Result<Self, CovarianceError> {
                Ok(Self(ScaledKernel::new($kind, dim, hyperparameters)?))
            }
        }

        impl Covariance for $name {
            fn covariance_type(&self) -> CovarianceType {
                $kind
            }

            fn dim(&self) -> usize {
                self.0.dim()
            }

            fn hyperparameters(&self) -> &[f64] {
                &self.0.hyperparameters
            }

            fn set_hyperparameters(
                &mut self,
                hyperparameters: Vec<f64>,
            ) -> Result<(), CovarianceError> {
                self.0.set_hyperparameters(hyperparameters)
            }

            fn covariance(&self, point_one: &[f64], point_two: &[f64]) -> f64 {
                let $kernel = &self.0;
                let $r2 = $kernel.distance_squared(point_one, point_two);
                $body
            }
        }
    };
}

/// `alpha * exp(-r^2 / 2)`
#[derive(Debug, Clone, PartialEq)]
pub struct SquareExponential(ScaledKernel);

impl_scaled_covariance!(SquareExponential, CovarianceType::SquareExponential, |kernel, r2| {
    kernel.alpha() * (-0.5 * r2).exp()
});

/// `alpha * (1 + sqrt(3) r) * exp(-sqrt(3) r)`
#[derive(Debug, Clone, PartialEq)]
pub struct MaternNu1p5(ScaledKernel);

impl_scaled_covariance!(MaternNu1p5, CovarianceType::MaternNu1p5, |kernel, r2| {
    let r = 3.0_f64.sqrt() * r2.sqrt();
    kernel.alpha() * (1.0 + r) * (-r).exp()
});

/// `alpha * (1 + sqrt(5) r + 5 r^2 / 3) * exp(-sqrt(5) r)`
#[derive(Debug, Clone, PartialEq)]
pub struct MaternNu2p5(ScaledKernel);

impl_scaled_covariance!(MaternNu2p5, CovarianceType::MaternNu2p5, |kernel, r2| {
    let r = 5.0_f64.sqrt() * r2.sqrt();
    kernel.alpha() * (1.0 + r + r * r / 3.0) * (-r).exp()
});

/// Reference kernels, written straight from the formulas.
pub mod reference {
    use super::*;

    /// Square exponential evaluated from the raw length scales.
    #[derive(Debug, Clone, PartialEq)]
    pub struct SquareExponential {
        hyperparameters: Vec<f64>,
    }

    impl SquareExponential {
        pub fn new(dim: usize, hyperparameters: Vec<f64>) -> Result<Self, CovarianceError> {
            check_hyperparameters(CovarianceType::SquareExponential, dim, &hyperparameters)?;
            Ok(Self { hyperparameters })
        }
    }

    impl Covariance for SquareExponential {
        fn covariance_type(&self) -> CovarianceType {
            CovarianceType::SquareExponential
        }

        fn dim(&self) -> usize {
            self.hyperparameters.len() - 1
        }

        fn hyperparameters(&self) -> &[f64] {
            &self.hyperparameters
        }

        fn set_hyperparameters(
            &mut self,
            hyperparameters: Vec<f64>,
        ) -> Result<(), CovarianceError> {
            check_hyperparameters(CovarianceType::SquareExponential, self.dim(), &hyperparameters)?;
            self.hyperparameters = hyperparameters;
            Ok(())
        }

        fn covariance(&self, point_one: &[f64], point_two: &[f64]) -> f64 {
            let alpha = self.hyperparameters[0];
            let lengths = &self.hyperparameters[1..];
            let mut norm = 0.0;
            for ((a, b), length) in point_one.iter().zip(point_two).zip(lengths) {
                let scaled = (a - b) / length;
                norm += scaled * scaled;
            }
            alpha * (-0.5 * norm).exp()
        }
    }
}
