//! Optimizer kinds and their parameter objects.
//!
//! An [`OptimizerKind`] names an optimizer without instantiating it: building
//! the optimizer itself needs the objective function and domain, which only the
//! caller has. Parameter structs carry `num_multistarts` as an explicit field
//! that is always set from the request's top-level value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Symbolic optimizer kinds accepted in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerType {
    Null,
    GradientDescent,
    Newton,
}

impl OptimizerType {
    pub const ALL: [OptimizerType; 3] = [
        OptimizerType::Null,
        OptimizerType::GradientDescent,
        OptimizerType::Newton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizerType::Null => "null",
            OptimizerType::GradientDescent => "gradient_descent",
            OptimizerType::Newton => "newton",
        }
    }
}

impl fmt::Display for OptimizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optimizer implementation to instantiate once runtime context is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizerKind {
    /// Evaluates the starting points only; no steps are taken.
    NullOptimizer,
    GradientDescentOptimizer,
    NewtonOptimizer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NullParameters {
    #[serde(skip_deserializing)]
    pub num_multistarts: usize,
}

/// Restarted gradient descent with a decaying step size
/// `pre_mult * (step + 1)^(-gamma)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientDescentParameters {
    #[serde(skip_deserializing)]
    pub num_multistarts: usize,
    pub max_num_steps: usize,
    pub max_num_restarts: usize,
    /// Number of trailing iterates averaged into the result (0 disables).
    pub num_steps_averaged: usize,
    pub gamma: f64,
    pub pre_mult: f64,
    pub max_relative_change: f64,
    pub tolerance: f64,
}

impl Default for GradientDescentParameters {
    fn default() -> Self {
        Self {
            num_multistarts: 0,
            max_num_steps: 500,
            max_num_restarts: 4,
            num_steps_averaged: 0,
            gamma: 0.6,
            pre_mult: 1.0,
            max_relative_change: 1.0,
            tolerance: 1.0e-7,
        }
    }
}

/// Newton's method with a diagonal time-step regularization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewtonParameters {
    #[serde(skip_deserializing)]
    pub num_multistarts: usize,
    pub max_num_steps: usize,
    pub gamma: f64,
    pub time_factor: f64,
    pub max_relative_change: f64,
    pub tolerance: f64,
}

impl Default for NewtonParameters {
    fn default() -> Self {
        Self {
            num_multistarts: 0,
            max_num_steps: 100,
            gamma: 1.01,
            time_factor: 1.0e-2,
            max_relative_change: 1.0,
            tolerance: 1.0e-9,
        }
    }
}

/// Parameters for any registered optimizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "optimizer_type", rename_all = "snake_case")]
pub enum OptimizerParameters {
    Null(NullParameters),
    GradientDescent(GradientDescentParameters),
    Newton(NewtonParameters),
}

impl OptimizerParameters {
    pub fn num_multistarts(&self) -> usize {
        match self {
            OptimizerParameters::Null(p) => p.num_multistarts,
            OptimizerParameters::GradientDescent(p) => p.num_multistarts,
            OptimizerParameters::Newton(p) => p.num_multistarts,
        }
    }

    pub fn optimizer_type(&self) -> OptimizerType {
        match self {
            OptimizerParameters::Null(_) => OptimizerType::Null,
            OptimizerParameters::GradientDescent(_) => OptimizerType::GradientDescent,
            OptimizerParameters::Newton(_) => OptimizerType::Newton,
        }
    }
}

/// Parse `body` into `T` and stamp the multistart count on the result.
///
/// Keys absent from `body` keep `T`'s defaults and keys `T` does not know are
/// rejected. A `num_multistarts` key in `body` is ignored.
pub fn parse_parameters<T>(
    num_multistarts: usize,
    body: &Map<String, Value>,
    set_multistarts: impl FnOnce(&mut T, usize),
) -> Result<T, serde_json::Error>
where
    T: for<'de> Deserialize<'de>,
{
    let mut body = body.clone();
    body.remove("num_multistarts");
    let mut parameters = T::deserialize(&Value::Object(body))?;
    set_multistarts(&mut parameters, num_multistarts);
    Ok(parameters)
}
