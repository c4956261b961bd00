//! Links from symbolic type names to implementations.
//!
//! Each registry is built once, on first use, from the exhaustive list of its
//! type enum, so adding an enum variant without a link fails to compile.

use ol_engine::covariance::{
    self, Covariance, CovarianceType, MaternNu1p5, MaternNu2p5, SquareExponential,
};
use ol_engine::domain::{native, reference, Domain, DomainType};
use ol_engine::optimizer::{
    parse_parameters, GradientDescentParameters, NewtonParameters, NullParameters, OptimizerKind,
    OptimizerParameters, OptimizerType,
};
use ol_types::{ClosedInterval, CovarianceError, OlResult};
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::registry::Registry;

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

pub type DomainConstructor = fn(Vec<ClosedInterval>) -> OlResult<Box<dyn Domain>>;

/// Native and reference constructors for one domain type.
#[derive(Debug, Clone, Copy)]
pub struct DomainLinks {
    pub domain_type: DomainType,
    pub native: DomainConstructor,
    pub reference: DomainConstructor,
}

impl DomainLinks {
    fn for_type(domain_type: DomainType) -> Self {
        let (native, reference): (DomainConstructor, DomainConstructor) = match domain_type {
            DomainType::TensorProduct => (native_tensor_product, reference_tensor_product),
            DomainType::SimplexIntersectTensorProduct => (native_simplex, reference_simplex),
        };
        Self {
            domain_type,
            native,
            reference,
        }
    }

    pub fn constructor(&self, use_reference_impl: bool) -> DomainConstructor {
        if use_reference_impl {
            self.reference
        } else {
            self.native
        }
    }
}

fn native_tensor_product(bounds: Vec<ClosedInterval>) -> OlResult<Box<dyn Domain>> {
    Ok(Box::new(native::TensorProductDomain::new(bounds)))
}

fn reference_tensor_product(bounds: Vec<ClosedInterval>) -> OlResult<Box<dyn Domain>> {
    Ok(Box::new(reference::TensorProductDomain::new(bounds)))
}

fn native_simplex(bounds: Vec<ClosedInterval>) -> OlResult<Box<dyn Domain>> {
    Ok(Box::new(native::SimplexIntersectTensorProductDomain::new(bounds)?))
}

fn reference_simplex(bounds: Vec<ClosedInterval>) -> OlResult<Box<dyn Domain>> {
    Ok(Box::new(reference::SimplexIntersectTensorProductDomain::new(bounds)?))
}

static DOMAIN_TYPES_TO_DOMAIN_LINKS: LazyLock<Registry<DomainLinks>> = LazyLock::new(|| {
    Registry::new(
        "domain",
        DomainType::ALL.map(|t| (t.as_str(), DomainLinks::for_type(t))),
    )
});

pub fn domain_links() -> &'static Registry<DomainLinks> {
    &DOMAIN_TYPES_TO_DOMAIN_LINKS
}

// ---------------------------------------------------------------------------
// Covariances
// ---------------------------------------------------------------------------

pub type CovarianceConstructor =
    fn(usize, Vec<f64>) -> Result<Box<dyn Covariance>, CovarianceError>;

#[derive(Debug, Clone, Copy)]
pub struct CovarianceLinks {
    pub covariance_type: CovarianceType,
    pub native: CovarianceConstructor,
    /// Not every kernel has a reference transcription.
    pub reference: Option<CovarianceConstructor>,
    pub make_default_hyperparameters: fn(usize) -> Result<Vec<f64>, CovarianceError>,
}

impl CovarianceLinks {
    fn for_type(covariance_type: CovarianceType) -> Self {
        let (native, reference): (CovarianceConstructor, Option<CovarianceConstructor>) =
            match covariance_type {
                CovarianceType::SquareExponential => {
                    (native_square_exponential, Some(reference_square_exponential))
                }
                CovarianceType::MaternNu1p5 => (native_matern_nu_1p5, None),
                CovarianceType::MaternNu2p5 => (native_matern_nu_2p5, None),
            };
        Self {
            covariance_type,
            native,
            reference,
            make_default_hyperparameters: covariance::default_hyperparameters,
        }
    }
}

fn native_square_exponential(
    dim: usize,
    hyperparameters: Vec<f64>,
) -> Result<Box<dyn Covariance>, CovarianceError> {
    Ok(Box::new(SquareExponential::new(dim, hyperparameters)?))
}

fn reference_square_exponential(
    dim: usize,
    hyperparameters: Vec<f64>,
) -> Result<Box<dyn Covariance>, CovarianceError> {
    Ok(Box::new(covariance::reference::SquareExponential::new(dim, hyperparameters)?))
}

fn native_matern_nu_1p5(
    dim: usize,
    hyperparameters: Vec<f64>,
) -> Result<Box<dyn Covariance>, CovarianceError> {
    Ok(Box::new(MaternNu1p5::new(dim, hyperparameters)?))
}

fn native_matern_nu_2p5(
    dim: usize,
    hyperparameters: Vec<f64>,
) -> Result<Box<dyn Covariance>, CovarianceError> {
    Ok(Box::new(MaternNu2p5::new(dim, hyperparameters)?))
}

static COVARIANCE_TYPES_TO_CLASSES: LazyLock<Registry<CovarianceLinks>> = LazyLock::new(|| {
    Registry::new(
        "covariance",
        CovarianceType::ALL.map(|t| (t.as_str(), CovarianceLinks::for_type(t))),
    )
});

pub fn covariance_links() -> &'static Registry<CovarianceLinks> {
    &COVARIANCE_TYPES_TO_CLASSES
}

// ---------------------------------------------------------------------------
// Optimizers
// ---------------------------------------------------------------------------

/// Builds a parameter object from the multistart count and the request's
/// `optimizer_parameters` body.
pub type ParametersConstructor =
    fn(usize, &Map<String, Value>) -> Result<OptimizerParameters, serde_json::Error>;

#[derive(Debug, Clone, Copy)]
pub struct OptimizerMethod {
    pub optimizer_type: OptimizerType,
    pub optimizer: OptimizerKind,
    pub make_parameters: ParametersConstructor,
}

impl OptimizerMethod {
    fn for_type(optimizer_type: OptimizerType) -> Self {
        let (optimizer, make_parameters): (OptimizerKind, ParametersConstructor) =
            match optimizer_type {
                OptimizerType::Null => (OptimizerKind::NullOptimizer, null_parameters),
                OptimizerType::GradientDescent => {
                    (OptimizerKind::GradientDescentOptimizer, gradient_descent_parameters)
                }
                OptimizerType::Newton => (OptimizerKind::NewtonOptimizer, newton_parameters),
            };
        Self {
            optimizer_type,
            optimizer,
            make_parameters,
        }
    }
}

fn null_parameters(
    num_multistarts: usize,
    body: &Map<String, Value>,
) -> Result<OptimizerParameters, serde_json::Error> {
    parse_parameters(num_multistarts, body, |p: &mut NullParameters, n| p.num_multistarts = n)
        .map(OptimizerParameters::Null)
}

fn gradient_descent_parameters(
    num_multistarts: usize,
    body: &Map<String, Value>,
) -> Result<OptimizerParameters, serde_json::Error> {
    parse_parameters(num_multistarts, body, |p: &mut GradientDescentParameters, n| {
        p.num_multistarts = n
    })
    .map(OptimizerParameters::GradientDescent)
}

fn newton_parameters(
    num_multistarts: usize,
    body: &Map<String, Value>,
) -> Result<OptimizerParameters, serde_json::Error> {
    parse_parameters(num_multistarts, body, |p: &mut NewtonParameters, n| p.num_multistarts = n)
        .map(OptimizerParameters::Newton)
}

static OPTIMIZER_TYPES_TO_OPTIMIZER_METHODS: LazyLock<Registry<OptimizerMethod>> =
    LazyLock::new(|| {
        Registry::new(
            "optimizer",
            OptimizerType::ALL.map(|t| (t.as_str(), OptimizerMethod::for_type(t))),
        )
    });

pub fn optimizer_methods() -> &'static Registry<OptimizerMethod> {
    &OPTIMIZER_TYPES_TO_OPTIMIZER_METHODS
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_types::{DomainError, OlError, RegistryError};
    use serde_json::json;

    fn unit_box(dim: usize) -> Vec<ClosedInterval> {
        vec![ClosedInterval::unit(); dim]
    }

    #[test]
    fn test_every_domain_type_linked() {
        for domain_type in DomainType::ALL {
            let links = domain_links().get(domain_type.as_str()).unwrap();
            assert_eq!(links.domain_type, domain_type);

            for use_reference_impl in [false, true] {
                let domain = (links.constructor(use_reference_impl))(unit_box(2)).unwrap();
                assert_eq!(domain.domain_type(), domain_type);
                assert_eq!(domain.dim(), 2);
            }
        }
        assert_eq!(
            domain_links().type_names(),
            vec!["simplex_intersect_tensor_product", "tensor_product"]
        );
    }

    #[test]
    fn test_domain_constructor_errors_propagate() {
        let links = domain_links().get("simplex_intersect_tensor_product").unwrap();
        let bounds = vec![ClosedInterval { min: 0.9, max: 1.0 }; 2];
        for use_reference_impl in [false, true] {
            let err = (links.constructor(use_reference_impl))(bounds.clone()).unwrap_err();
            assert!(matches!(err, OlError::Domain(DomainError::Empty { .. })));
        }
    }

    #[test]
    fn test_every_covariance_type_linked() {
        for covariance_type in CovarianceType::ALL {
            let links = covariance_links().get(covariance_type.as_str()).unwrap();
            let hyperparameters = (links.make_default_hyperparameters)(3).unwrap();
            assert_eq!(hyperparameters.len(), 4);

            let covariance = (links.native)(3, hyperparameters.clone()).unwrap();
            assert_eq!(covariance.covariance_type(), covariance_type);

            if let Some(reference) = links.reference {
                let reference = reference(3, hyperparameters).unwrap();
                assert_eq!(reference.covariance_type(), covariance_type);
            }
        }
    }

    #[test]
    fn test_every_optimizer_type_linked() {
        let body = Map::new();
        for optimizer_type in OptimizerType::ALL {
            let method = optimizer_methods().get(optimizer_type.as_str()).unwrap();
            let parameters = (method.make_parameters)(12, &body).unwrap();
            assert_eq!(parameters.optimizer_type(), optimizer_type);
            assert_eq!(parameters.num_multistarts(), 12);
        }
    }

    #[test]
    fn test_optimizer_parameters_from_body() {
        let method = optimizer_methods().get("newton").unwrap();
        assert_eq!(method.optimizer, OptimizerKind::NewtonOptimizer);

        let body = json!({"gamma": 1.2, "num_multistarts": 1}).as_object().cloned().unwrap();
        match (method.make_parameters)(30, &body).unwrap() {
            OptimizerParameters::Newton(p) => {
                assert_eq!(p.gamma, 1.2);
                assert_eq!(p.num_multistarts, 30);
            }
            other => panic!("unexpected parameters: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_types() {
        for (registry, key) in [
            (domain_links().get("hypersphere").err(), "hypersphere"),
            (covariance_links().get("periodic").err(), "periodic"),
            (optimizer_methods().get("l_bfgs_b").err(), "l_bfgs_b"),
        ] {
            match registry {
                Some(RegistryError::UnknownType { key: k, .. }) => assert_eq!(k, key),
                None => panic!("lookup of {key} should fail"),
            }
        }
    }
}
