//! # ol-views
//!
//! Builders that turn already-deserialized request payloads into the
//! objects consumed by the optimization engine:
//!
//! - [`build_domain`]: `domain_info` to a [`Domain`](ol_engine::Domain)
//! - [`build_covariance`]: `covariance_info` to a [`Covariance`](ol_engine::Covariance)
//! - [`build_optimizer`]: `optimizer_info` to an [`OptimizerSelection`]
//! - [`build_gaussian_process`]: historical points, domain and covariance to a
//!   [`GaussianProcess`](ol_engine::GaussianProcess)
//! - [`build_bandit_history`]: `historical_info` to a
//!   [`BanditHistoricalData`](ol_types::BanditHistoricalData)
//!
//! Payloads are assumed schema-validated upstream, but every builder still
//! reports missing and ill-typed keys with their full path.
//!
//! ## Example
//!
//! ```
//! use ol_views::build_domain;
//! use serde_json::json;
//!
//! let domain_info = json!({
//!     "domain_type": "tensor_product",
//!     "dim": 2,
//!     "domain_bounds": [{"min": 0.0, "max": 1.0}, {"min": -1.0, "max": 1.0}],
//! });
//! let domain = build_domain(&domain_info, false).unwrap();
//! assert_eq!(domain.dim(), 2);
//! ```

pub mod bandit;
pub mod config;
pub mod covariance;
pub mod domain;
pub mod factory;
pub mod gaussian_process;
pub mod optimizer;

pub use bandit::build_bandit_history;
pub use config::BuildOptions;
pub use covariance::build_covariance;
pub use domain::build_domain;
pub use factory::RequestFactory;
pub use gaussian_process::build_gaussian_process;
pub use optimizer::{build_optimizer, OptimizerSelection};
