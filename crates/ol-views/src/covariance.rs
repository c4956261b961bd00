//! Covariance builder.

use ol_engine::Covariance;
use ol_linkers::covariance_links;
use ol_types::{OlResult, ParamMap, ParameterError};
use serde_json::Value;
use tracing::debug;

/// Largest `dim` a request may declare.
pub const MAX_DIM: usize = 1 << 16;

/// Build the covariance described by `covariance_info` over the domain in
/// `domain_info`. Always uses the native kernel.
pub fn build_covariance(
    covariance_info: &Value,
    domain_info: &Value,
) -> OlResult<Box<dyn Covariance>> {
    covariance_from_info(
        &ParamMap::at("covariance_info", covariance_info)?,
        &ParamMap::at("domain_info", domain_info)?,
    )
}

pub(crate) fn covariance_from_info(
    covariance_info: &ParamMap<'_>,
    domain_info: &ParamMap<'_>,
) -> OlResult<Box<dyn Covariance>> {
    let covariance_type: String = covariance_info.required("covariance_type")?;
    let links = covariance_links().get(&covariance_type)?;
    let dim: usize = domain_info.required("dim")?;
    if dim > MAX_DIM {
        return Err(ParameterError::Invalid {
            key: domain_info.key_path("dim"),
            message: format!("dimension {dim} exceeds the limit of {MAX_DIM}"),
        }
        .into());
    }

    let explicit = covariance_info.optional::<Vec<f64>>("hyperparameters")?;
    let (hyperparameters, defaulted) = match explicit {
        Some(hyperparameters) => (hyperparameters, false),
        None => ((links.make_default_hyperparameters)(dim)?, true),
    };

    debug!(
        covariance_type = %links.covariance_type,
        dim,
        default_hyperparameters = defaulted,
        "building covariance"
    );
    Ok((links.native)(dim, hyperparameters)?)
}
