use thiserror::Error;

/// Main error type for the optimal-learning request layer
#[derive(Error, Debug)]
pub enum OlError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Covariance error: {0}")]
    Covariance(#[from] CovarianceError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type-registry lookup errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown {registry} type: {key}")]
    UnknownType { key: String, registry: String },
}

/// Domain construction and sampling errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid bounds at dimension {index}: min {min} is greater than max {max}")]
    InvalidBounds { index: usize, min: f64, max: f64 },

    #[error("Domain dimension mismatch: declared {expected}, got {actual} bounds")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Domain is empty: {message}")]
    Empty { message: String },

    #[error("No feasible point found after {attempts} attempts")]
    NoFeasiblePoint { attempts: usize },
}

/// Covariance construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CovarianceError {
    #[error("Invalid hyperparameters for {covariance_type}: {message}")]
    InvalidHyperparameters {
        covariance_type: String,
        message: String,
    },

    #[error("Covariance dimension {dim} is too large")]
    DimensionTooLarge { dim: usize },
}

/// Historical-data errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Point {index} has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Point {index} has negative noise variance {value}")]
    InvalidNoiseVariance { index: usize, value: f64 },

    #[error("Point {index} contains a non-finite value")]
    NonFiniteValue { index: usize },

    #[error("Covariance dimension {covariance_dim} does not match data dimension {data_dim}")]
    CovarianceDimensionMismatch {
        covariance_dim: usize,
        data_dim: usize,
    },
}

/// Request-parameter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Missing required parameter: {key}")]
    Missing { key: String },

    #[error("Invalid parameter: {key}, message: {message}")]
    Invalid { key: String, message: String },
}

/// Result type alias for optimal-learning operations
pub type OlResult<T> = Result<T, OlError>;

/// Macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::OlError::Validation(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::InvalidBounds {
            index: 1,
            min: 2.0,
            max: -1.0,
        };

        assert!(error.to_string().contains("Invalid bounds"));
        assert!(error.to_string().contains("dimension 1"));
        assert!(error.to_string().contains("-1"));
    }

    #[test]
    fn test_unknown_type_names_key_and_registry() {
        let error: OlError = RegistryError::UnknownType {
            key: "hyperbolic".to_string(),
            registry: "domain".to_string(),
        }
        .into();

        let message = error.to_string();
        assert!(message.contains("hyperbolic"));
        assert!(message.contains("domain"));
    }

    #[test]
    fn test_error_conversion() {
        let param_error = ParameterError::Missing {
            key: "domain_info.dim".to_string(),
        };
        let ol_error: OlError = param_error.into();

        match ol_error {
            OlError::Parameter(ParameterError::Missing { key }) => {
                assert_eq!(key, "domain_info.dim")
            }
            _ => panic!("Expected Parameter error"),
        }
    }

    #[test]
    fn test_validation_macro() {
        let err = validation_error!("arm {} has negative wins", "arm1");
        assert!(matches!(err, OlError::Validation(ref m) if m.contains("arm1")));
    }
}
