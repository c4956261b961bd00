//! # ol-linkers
//!
//! Process-wide registries that resolve the symbolic type names found in
//! requests (`"tensor_product"`, `"square_exponential"`, `"gradient_descent"`,
//! ...) to implementation descriptors. Registries are built once and never
//! mutated, so they can be read from any number of threads.

mod linkers;
mod registry;

pub use linkers::{
    covariance_links, domain_links, optimizer_methods, CovarianceConstructor, CovarianceLinks,
    DomainConstructor, DomainLinks, OptimizerMethod, ParametersConstructor,
};
pub use registry::Registry;
