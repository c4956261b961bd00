//! Historical observations of the objective function.

use serde::{Deserialize, Serialize};

use crate::errors::DataError;

/// One observed evaluation of the objective function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Coordinates of the sampled point.
    pub point: Vec<f64>,
    /// Observed objective value.
    pub value: f64,
    /// Observation noise variance (>= 0).
    pub value_var: f64,
}

impl SamplePoint {
    pub fn new(point: Vec<f64>, value: f64, value_var: f64) -> Self {
        Self {
            point,
            value,
            value_var,
        }
    }
}

/// Ordered set of sample points sharing one dimension.
///
/// Point order is the canonical index used by everything downstream, so it is
/// never rearranged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalData {
    dim: usize,
    points_sampled: Vec<SamplePoint>,
}

impl HistoricalData {
    pub fn new(dim: usize, points_sampled: Vec<SamplePoint>) -> Result<Self, DataError> {
        validate_points(dim, 0, &points_sampled)?;
        Ok(Self {
            dim,
            points_sampled,
        })
    }

    /// Data set with no observations yet.
    pub fn empty(dim: usize) -> Self {
        Self {
            dim,
            points_sampled: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn num_sampled(&self) -> usize {
        self.points_sampled.len()
    }

    pub fn points_sampled(&self) -> &[SamplePoint] {
        &self.points_sampled
    }

    pub fn points_sampled_value(&self) -> Vec<f64> {
        self.points_sampled.iter().map(|p| p.value).collect()
    }

    pub fn points_sampled_noise_variance(&self) -> Vec<f64> {
        self.points_sampled.iter().map(|p| p.value_var).collect()
    }

    /// Append new observations after the existing ones. Nothing is appended if
    /// any of them is invalid.
    pub fn append_sample_points(&mut self, points: Vec<SamplePoint>) -> Result<(), DataError> {
        validate_points(self.dim, self.points_sampled.len(), &points)?;
        self.points_sampled.extend(points);
        Ok(())
    }

    pub fn append_historical_data(&mut self, other: &HistoricalData) -> Result<(), DataError> {
        self.append_sample_points(other.points_sampled.clone())
    }

    pub fn to_list_of_sample_points(&self) -> Vec<SamplePoint> {
        self.points_sampled.clone()
    }
}

/// Check every point against `dim`; reported indices start at `offset`.
fn validate_points(dim: usize, offset: usize, points: &[SamplePoint]) -> Result<(), DataError> {
    for (i, sample) in points.iter().enumerate() {
        let index = offset + i;
        if sample.point.len() != dim {
            return Err(DataError::DimensionMismatch {
                index,
                expected: dim,
                actual: sample.point.len(),
            });
        }
        if !sample.value.is_finite()
            || !sample.value_var.is_finite()
            || sample.point.iter().any(|x| !x.is_finite())
        {
            return Err(DataError::NonFiniteValue { index });
        }
        if sample.value_var < 0.0 {
            return Err(DataError::InvalidNoiseVariance {
                index,
                value: sample.value_var,
            });
        }
    }
    Ok(())
}
