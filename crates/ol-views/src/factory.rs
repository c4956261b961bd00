//! Request-level entry point running the builders against a full request.

use ol_engine::{Covariance, Domain, GaussianProcess};
use ol_types::{BanditHistoricalData, OlResult, ParamMap};
use serde_json::Value;
use tracing::debug;

use crate::bandit::bandit_history_from_params;
use crate::config::BuildOptions;
use crate::covariance::covariance_from_info;
use crate::domain::domain_from_info;
use crate::gaussian_process::gaussian_process_from_params;
use crate::optimizer::{optimizer_from_info, OptimizerSelection};

/// Builds engine objects from complete request mappings.
///
/// Each method takes the whole request and picks out the section it needs, so
/// a single factory can serve endpoints that keep their domain under a
/// non-default key.
#[derive(Debug, Clone, Default)]
pub struct RequestFactory {
    options: BuildOptions,
}

impl RequestFactory {
    pub fn new(options: BuildOptions) -> Self {
        debug!(
            domain_info_key = %options.domain_info_key,
            use_reference_impl = options.use_reference_impl,
            "request factory configured"
        );
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn domain(&self, request: &Value) -> OlResult<Box<dyn Domain>> {
        let request = ParamMap::root(request)?;
        domain_from_info(
            &request.child(&self.options.domain_info_key)?,
            self.options.use_reference_impl,
        )
    }

    pub fn covariance(&self, request: &Value) -> OlResult<Box<dyn Covariance>> {
        let request = ParamMap::root(request)?;
        covariance_from_info(
            &request.child("covariance_info")?,
            &request.child(&self.options.domain_info_key)?,
        )
    }

    pub fn optimizer(&self, request: &Value) -> OlResult<OptimizerSelection> {
        optimizer_from_info(&ParamMap::root(request)?.child("optimizer_info")?)
    }

    pub fn gaussian_process(&self, request: &Value) -> OlResult<GaussianProcess> {
        gaussian_process_from_params(&ParamMap::root(request)?, &self.options.domain_info_key)
    }

    pub fn bandit_history(&self, request: &Value) -> OlResult<BanditHistoricalData> {
        bandit_history_from_params(&ParamMap::root(request)?)
    }
}
