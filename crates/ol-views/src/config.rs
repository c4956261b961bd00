//! Builder configuration.

use serde::{Deserialize, Serialize};

/// Options shared by every builder the [`RequestFactory`](crate::RequestFactory) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Request key holding the domain description. Some endpoints carry
    /// several domains side by side under different keys.
    pub domain_info_key: String,

    /// Build domains from the reference family instead of the native one.
    pub use_reference_impl: bool,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain_info_key(mut self, key: impl Into<String>) -> Self {
        self.domain_info_key = key.into();
        self
    }

    pub fn with_reference_impl(mut self, use_reference_impl: bool) -> Self {
        self.use_reference_impl = use_reference_impl;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            domain_info_key: "domain_info".to_string(),
            use_reference_impl: false,
        }
    }
}
