//! Bandit history builder.

use std::collections::BTreeMap;

use ol_types::{BanditHistoricalData, OlResult, ParamMap, SampleArm};
use serde_json::Value;
use tracing::debug;

/// Build per-arm history from `historical_info.arms_sampled`.
pub fn build_bandit_history(params: &Value) -> OlResult<BanditHistoricalData> {
    bandit_history_from_params(&ParamMap::root(params)?)
}

pub(crate) fn bandit_history_from_params(params: &ParamMap<'_>) -> OlResult<BanditHistoricalData> {
    let arms_sampled = params.child("historical_info")?.child("arms_sampled")?;

    let mut sample_arms = BTreeMap::new();
    for (name, arm) in arms_sampled.entries()? {
        let sample_arm = SampleArm::new(
            arm.required("win")?,
            arm.required("loss")?,
            arm.required("total")?,
        );
        sample_arms.insert(name.to_string(), sample_arm);
    }

    debug!(num_arms = sample_arms.len(), "building bandit history");
    BanditHistoricalData::new(sample_arms)
}
