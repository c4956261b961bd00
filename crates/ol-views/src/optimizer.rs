//! Optimizer parameter builder.

use ol_engine::{OptimizerKind, OptimizerParameters};
use ol_linkers::optimizer_methods;
use ol_types::{OlResult, ParamMap, ParameterError};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Everything the engine needs to set up an optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizerSelection {
    /// Which optimizer to instantiate. Construction needs runtime context
    /// (domain, objective) that is not part of the request.
    pub optimizer: OptimizerKind,
    pub parameters: OptimizerParameters,
    pub num_random_samples: usize,
}

/// Build the optimizer selection described by `optimizer_info`.
pub fn build_optimizer(optimizer_info: &Value) -> OlResult<OptimizerSelection> {
    optimizer_from_info(&ParamMap::at("optimizer_info", optimizer_info)?)
}

pub(crate) fn optimizer_from_info(optimizer_info: &ParamMap<'_>) -> OlResult<OptimizerSelection> {
    let optimizer_type: String = optimizer_info.required("optimizer_type")?;
    let method = optimizer_methods().get(&optimizer_type)?;
    let num_multistarts: usize = optimizer_info.required("num_multistarts")?;
    let num_random_samples: usize = optimizer_info.required("num_random_samples")?;

    let empty = Map::new();
    let body = if optimizer_info.contains("optimizer_parameters") {
        optimizer_info.child("optimizer_parameters")?.as_map()
    } else {
        &empty
    };

    let parameters = (method.make_parameters)(num_multistarts, body).map_err(|e| {
        ParameterError::Invalid {
            key: optimizer_info.key_path("optimizer_parameters"),
            message: e.to_string(),
        }
    })?;

    debug!(
        optimizer_type = %method.optimizer_type,
        num_multistarts,
        num_random_samples,
        "building optimizer parameters"
    );
    Ok(OptimizerSelection {
        optimizer: method.optimizer,
        parameters,
        num_random_samples,
    })
}
