//! Gaussian process builder.

use ol_engine::GaussianProcess;
use ol_types::{HistoricalData, OlResult, ParamMap, SamplePoint};
use serde_json::Value;
use tracing::debug;

use crate::covariance::covariance_from_info;

/// Build a Gaussian process from a request carrying `gp_historical_info`,
/// `domain_info` and `covariance_info`.
pub fn build_gaussian_process(params: &Value) -> OlResult<GaussianProcess> {
    gaussian_process_from_params(&ParamMap::root(params)?, "domain_info")
}

pub(crate) fn gaussian_process_from_params(
    params: &ParamMap<'_>,
    domain_info_key: &str,
) -> OlResult<GaussianProcess> {
    let gp_historical_info = params.child("gp_historical_info")?;
    let domain_info = params.child(domain_info_key)?;
    let covariance_info = params.child("covariance_info")?;

    let covariance = covariance_from_info(&covariance_info, &domain_info)?;
    let dim: usize = domain_info.required("dim")?;

    let points = gp_historical_info
        .children("points_sampled")?
        .iter()
        .map(|point| -> OlResult<SamplePoint> {
            Ok(SamplePoint::new(
                point.required("point")?,
                point.required("value")?,
                point.required("value_var")?,
            ))
        })
        .collect::<OlResult<Vec<_>>>()?;

    debug!(dim, num_sampled = points.len(), "building gaussian process");
    let historical_data = HistoricalData::new(dim, points)?;
    Ok(GaussianProcess::new(covariance, historical_data)?)
}
