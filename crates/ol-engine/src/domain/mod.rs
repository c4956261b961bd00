//! Search domains.
//!
//! Every domain type exists in two interchangeable families: [`native`], which
//! stores bounds as flat lower/upper arrays for the hot membership checks, and
//! [`reference`], which keeps the bounds as [`ClosedInterval`]s and mirrors the
//! mathematical definition directly. Both families satisfy the same
//! [`Domain`] contract and accept exactly the same inputs.

pub mod native;
pub mod reference;

use ol_types::{ClosedInterval, DomainError, OlResult};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic domain kinds accepted in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    /// Axis-aligned box.
    TensorProduct,
    /// Box intersected with the unit simplex `x_i >= 0, sum(x) <= 1`.
    SimplexIntersectTensorProduct,
}

impl DomainType {
    pub const ALL: [DomainType; 2] = [
        DomainType::TensorProduct,
        DomainType::SimplexIntersectTensorProduct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainType::TensorProduct => "tensor_product",
            DomainType::SimplexIntersectTensorProduct => "simplex_intersect_tensor_product",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common contract for all domain implementations.
pub trait Domain: fmt::Debug + Send + Sync {
    fn domain_type(&self) -> DomainType;

    fn dim(&self) -> usize;

    /// Smallest axis-aligned box containing the domain.
    fn bounding_box(&self) -> Vec<ClosedInterval>;

    fn check_point_inside(&self, point: &[f64]) -> bool;

    fn generate_random_point_in_domain(&self, rng: &mut dyn RngCore) -> OlResult<Vec<f64>>;

    /// `num_points` points spread over the domain.
    fn generate_uniform_random_points_in_domain(
        &self,
        num_points: usize,
        rng: &mut dyn RngCore,
    ) -> OlResult<Vec<Vec<f64>>>;
}

/// Slack on `sum(x) <= 1` so points on the simplex face are not rejected
/// through rounding.
pub const SIMPLEX_TOLERANCE: f64 = 1.0e-12;

/// Rejection-sampling budget for a single point in a simplex domain.
pub const MAX_REJECTION_ATTEMPTS: usize = 10_000;

/// Latin hypercube sample: each dimension is cut into `num_points` equal
/// strata and every stratum receives exactly one point.
pub(crate) fn latin_hypercube(
    bounds: &[ClosedInterval],
    num_points: usize,
    rng: &mut dyn RngCore,
) -> Vec<Vec<f64>> {
    let mut points = vec![Vec::with_capacity(bounds.len()); num_points];
    if num_points == 0 {
        return points;
    }

    let mut strata: Vec<usize> = (0..num_points).collect();
    for interval in bounds {
        let width = interval.length() / num_points as f64;
        strata.shuffle(rng);
        for (point, stratum) in points.iter_mut().zip(&strata) {
            let offset: f64 = rng.random();
            point.push(interval.min + (*stratum as f64 + offset) * width);
        }
    }
    points
}

/// Intersect `bounds` with the unit cube and check that the result still
/// meets the unit simplex.
pub(crate) fn restrict_to_unit_simplex(
    bounds: &[ClosedInterval],
) -> Result<Vec<ClosedInterval>, DomainError> {
    let mut restricted = Vec::with_capacity(bounds.len());
    for (index, interval) in bounds.iter().enumerate() {
        let min = interval.min.max(0.0);
        let max = interval.max.min(1.0);
        if min > max {
            return Err(DomainError::Empty {
                message: format!("bound {interval} at dimension {index} lies outside [0, 1]"),
            });
        }
        restricted.push(ClosedInterval { min, max });
    }

    let min_sum: f64 = restricted.iter().map(|b| b.min).sum();
    if min_sum > 1.0 + SIMPLEX_TOLERANCE {
        return Err(DomainError::Empty {
            message: format!("lower bounds sum to {min_sum}, which exceeds 1"),
        });
    }
    Ok(restricted)
}

/// Uniform draw from the unit simplex `x_i >= 0, sum(x) <= 1`: `dim + 1`
/// exponential spacings normalised to sum to one, the last being the slack.
pub(crate) fn sample_unit_simplex(dim: usize, rng: &mut dyn RngCore) -> Vec<f64> {
    let spacings: Vec<f64> = (0..=dim)
        .map(|_| -(1.0 - rng.random::<f64>()).ln())
        .collect();
    let total: f64 = spacings.iter().sum();
    spacings[..dim].iter().map(|e| e / total).collect()
}

/// Draw proposals until `accept` holds.
pub(crate) fn rejection_sample(
    rng: &mut dyn RngCore,
    mut propose: impl FnMut(&mut dyn RngCore) -> Vec<f64>,
    accept: impl Fn(&[f64]) -> bool,
) -> Result<Vec<f64>, DomainError> {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = propose(&mut *rng);
        if accept(&candidate) {
            return Ok(candidate);
        }
    }
    tracing::debug!("Rejection sampling exhausted {} attempts", MAX_REJECTION_ATTEMPTS);
    Err(DomainError::NoFeasiblePoint {
        attempts: MAX_REJECTION_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn interval(min: f64, max: f64) -> ClosedInterval {
        ClosedInterval { min, max }
    }

    #[test]
    fn test_domain_type_names() {
        assert_eq!(DomainType::TensorProduct.as_str(), "tensor_product");
        assert_eq!(
            serde_json::to_value(DomainType::SimplexIntersectTensorProduct).unwrap(),
            serde_json::json!("simplex_intersect_tensor_product")
        );
    }

    #[test]
    fn test_latin_hypercube_one_point_per_stratum() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = vec![interval(0.0, 10.0), interval(-1.0, 1.0)];
        let points = latin_hypercube(&bounds, 5, &mut rng);
        assert_eq!(points.len(), 5);

        for (dim, b) in bounds.iter().enumerate() {
            let width = b.length() / 5.0;
            let mut strata: Vec<usize> = points
                .iter()
                .map(|p| (((p[dim] - b.min) / width).floor() as usize).min(4))
                .collect();
            strata.sort_unstable();
            assert_eq!(strata, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_latin_hypercube_zero_points() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(latin_hypercube(&[interval(0.0, 1.0)], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_restrict_to_unit_simplex_clamps() {
        let restricted =
            restrict_to_unit_simplex(&[interval(-2.0, 0.5), interval(0.1, 3.0)]).unwrap();
        assert_eq!(restricted, vec![interval(0.0, 0.5), interval(0.1, 1.0)]);
    }

    #[test]
    fn test_restrict_to_unit_simplex_rejects_empty() {
        assert!(matches!(
            restrict_to_unit_simplex(&[interval(0.6, 1.0), interval(0.6, 1.0)]),
            Err(DomainError::Empty { .. })
        ));
        assert!(matches!(
            restrict_to_unit_simplex(&[interval(1.5, 2.0)]),
            Err(DomainError::Empty { .. })
        ));
    }

    #[test]
    fn test_unit_simplex_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        for dim in [0, 1, 2, 20, 50] {
            for _ in 0..100 {
                let point = sample_unit_simplex(dim, &mut rng);
                assert_eq!(point.len(), dim);
                assert!(point.iter().all(|x| *x >= 0.0));
                assert!(point.iter().sum::<f64>() <= 1.0 + SIMPLEX_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_unit_simplex_samples_spread_evenly() {
        // Each coordinate of a uniform point in the 2-simplex has mean 1/3.
        let mut rng = StdRng::seed_from_u64(9);
        let n = 20_000;
        let mut sums = [0.0; 2];
        for _ in 0..n {
            let point = sample_unit_simplex(2, &mut rng);
            sums[0] += point[0];
            sums[1] += point[1];
        }
        for sum in sums {
            assert!((sum / n as f64 - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_rejection_sample_gives_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = rejection_sample(&mut rng, |rng| sample_unit_simplex(1, rng), |_| false)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::NoFeasiblePoint {
                attempts: MAX_REJECTION_ATTEMPTS
            }
        );
    }
}
