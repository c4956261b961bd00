//! Gaussian process container: a covariance paired with its training data.

use ol_types::{DataError, HistoricalData, SamplePoint};

use crate::covariance::Covariance;

#[derive(Debug)]
pub struct GaussianProcess {
    covariance: Box<dyn Covariance>,
    historical_data: HistoricalData,
}

impl GaussianProcess {
    pub fn new(
        covariance: Box<dyn Covariance>,
        historical_data: HistoricalData,
    ) -> Result<Self, DataError> {
        if covariance.dim() != historical_data.dim() {
            return Err(DataError::CovarianceDimensionMismatch {
                covariance_dim: covariance.dim(),
                data_dim: historical_data.dim(),
            });
        }
        Ok(Self {
            covariance,
            historical_data,
        })
    }

    pub fn dim(&self) -> usize {
        self.historical_data.dim()
    }

    pub fn num_sampled(&self) -> usize {
        self.historical_data.num_sampled()
    }

    pub fn covariance(&self) -> &dyn Covariance {
        self.covariance.as_ref()
    }

    pub fn historical_data(&self) -> &HistoricalData {
        &self.historical_data
    }

    pub fn add_sampled_points(&mut self, points: Vec<SamplePoint>) -> Result<(), DataError> {
        self.historical_data.append_sample_points(points)
    }

    /// Lowest observed objective value (the process models minimization).
    pub fn best_so_far(&self) -> Option<f64> {
        self.historical_data
            .points_sampled()
            .iter()
            .map(|p| p.value)
            .min_by(|a, b| a.total_cmp(b))
    }
}
