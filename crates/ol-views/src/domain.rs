//! Domain builder.

use ol_engine::Domain;
use ol_linkers::domain_links;
use ol_types::{ClosedInterval, DomainError, OlResult, ParamMap};
use serde_json::Value;
use tracing::debug;

/// Build the domain described by `domain_info`.
///
/// `domain_bounds` defaults to no bounds. When `dim` is given it must match
/// the number of bounds.
pub fn build_domain(domain_info: &Value, use_reference_impl: bool) -> OlResult<Box<dyn Domain>> {
    domain_from_info(&ParamMap::at("domain_info", domain_info)?, use_reference_impl)
}

pub(crate) fn domain_from_info(
    domain_info: &ParamMap<'_>,
    use_reference_impl: bool,
) -> OlResult<Box<dyn Domain>> {
    let domain_bounds = if domain_info.contains("domain_bounds") {
        domain_info
            .children("domain_bounds")?
            .iter()
            .enumerate()
            .map(|(index, bound)| -> OlResult<ClosedInterval> {
                Ok(ClosedInterval::new(index, bound.required("min")?, bound.required("max")?)?)
            })
            .collect::<OlResult<Vec<_>>>()?
    } else {
        Vec::new()
    };

    let domain_type: String = domain_info.required("domain_type")?;
    let links = domain_links().get(&domain_type)?;

    if let Some(dim) = domain_info.optional::<usize>("dim")? {
        if dim != domain_bounds.len() {
            return Err(DomainError::DimensionMismatch {
                expected: dim,
                actual: domain_bounds.len(),
            }
            .into());
        }
    }

    debug!(
        domain_type = %links.domain_type,
        dim = domain_bounds.len(),
        use_reference_impl,
        "building domain"
    );
    (links.constructor(use_reference_impl))(domain_bounds)
}
