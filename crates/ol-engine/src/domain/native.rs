//! Accelerated domain family: bounds in flat lower/upper arrays.

use ol_types::{ClosedInterval, OlResult};
use rand::{Rng, RngCore};

use super::{
    latin_hypercube, rejection_sample, restrict_to_unit_simplex, sample_unit_simplex, Domain,
    DomainType, SIMPLEX_TOLERANCE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TensorProductDomain {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl TensorProductDomain {
    pub fn new(domain_bounds: Vec<ClosedInterval>) -> Self {
        let (lower, upper) = domain_bounds.iter().map(|b| (b.min, b.max)).unzip();
        Self { lower, upper }
    }

    fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.lower.len()
            && point
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
    }
}

impl Domain for TensorProductDomain {
    fn domain_type(&self) -> DomainType {
        DomainType::TensorProduct
    }

    fn dim(&self) -> usize {
        self.lower.len()
    }

    fn bounding_box(&self) -> Vec<ClosedInterval> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&min, &max)| ClosedInterval { min, max })
            .collect()
    }

    fn check_point_inside(&self, point: &[f64]) -> bool {
        self.contains(point)
    }

    fn generate_random_point_in_domain(&self, rng: &mut dyn RngCore) -> OlResult<Vec<f64>> {
        Ok(self
            .lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| lo + rng.random::<f64>() * (hi - lo))
            .collect())
    }

    fn generate_uniform_random_points_in_domain(
        &self,
        num_points: usize,
        rng: &mut dyn RngCore,
    ) -> OlResult<Vec<Vec<f64>>> {
        Ok(latin_hypercube(&self.bounding_box(), num_points, rng))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimplexIntersectTensorProductDomain {
    tensor_product: TensorProductDomain,
}

impl SimplexIntersectTensorProductDomain {
    pub fn new(domain_bounds: Vec<ClosedInterval>) -> OlResult<Self> {
        let restricted = restrict_to_unit_simplex(&domain_bounds)?;
        Ok(Self {
            tensor_product: TensorProductDomain::new(restricted),
        })
    }
}

impl Domain for SimplexIntersectTensorProductDomain {
    fn domain_type(&self) -> DomainType {
        DomainType::SimplexIntersectTensorProduct
    }

    fn dim(&self) -> usize {
        self.tensor_product.dim()
    }

    fn bounding_box(&self) -> Vec<ClosedInterval> {
        self.tensor_product.bounding_box()
    }

    fn check_point_inside(&self, point: &[f64]) -> bool {
        self.tensor_product.contains(point) && point.iter().sum::<f64>() <= 1.0 + SIMPLEX_TOLERANCE
    }

    fn generate_random_point_in_domain(&self, rng: &mut dyn RngCore) -> OlResult<Vec<f64>> {
        let dim = self.dim();
        let point = rejection_sample(
            rng,
            |rng| sample_unit_simplex(dim, rng),
            |p| self.check_point_inside(p),
        )?;
        Ok(point)
    }

    fn generate_uniform_random_points_in_domain(
        &self,
        num_points: usize,
        rng: &mut dyn RngCore,
    ) -> OlResult<Vec<Vec<f64>>> {
        (0..num_points)
            .map(|_| self.generate_random_point_in_domain(rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_types::{DomainError, OlError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_box(dim: usize) -> Vec<ClosedInterval> {
        vec![ClosedInterval::unit(); dim]
    }

    #[test]
    fn test_tensor_product_membership() {
        let domain = TensorProductDomain::new(vec![
            ClosedInterval { min: -1.0, max: 1.0 },
            ClosedInterval { min: 2.0, max: 3.0 },
        ]);
        assert_eq!(domain.dim(), 2);
        assert!(domain.check_point_inside(&[0.0, 2.5]));
        assert!(domain.check_point_inside(&[1.0, 3.0]));
        assert!(!domain.check_point_inside(&[0.0, 3.5]));
        assert!(!domain.check_point_inside(&[0.0]));
    }

    #[test]
    fn test_tensor_product_random_points_inside() {
        let domain = TensorProductDomain::new(unit_box(3));
        let mut rng = StdRng::seed_from_u64(11);

        let point = domain.generate_random_point_in_domain(&mut rng).unwrap();
        assert!(domain.check_point_inside(&point));

        let points = domain.generate_uniform_random_points_in_domain(20, &mut rng).unwrap();
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| domain.check_point_inside(p)));
    }

    #[test]
    fn test_simplex_membership() {
        let domain = SimplexIntersectTensorProductDomain::new(unit_box(2)).unwrap();
        assert!(domain.check_point_inside(&[0.5, 0.5]));
        assert!(domain.check_point_inside(&[0.2, 0.3]));
        assert!(!domain.check_point_inside(&[0.6, 0.6]));
        assert!(!domain.check_point_inside(&[-0.1, 0.3]));
    }

    #[test]
    fn test_simplex_clamps_bounds() {
        let domain = SimplexIntersectTensorProductDomain::new(vec![
            ClosedInterval { min: -5.0, max: 5.0 },
            ClosedInterval { min: 0.25, max: 0.75 },
        ])
        .unwrap();
        assert_eq!(
            domain.bounding_box(),
            vec![
                ClosedInterval { min: 0.0, max: 1.0 },
                ClosedInterval { min: 0.25, max: 0.75 },
            ]
        );
    }

    #[test]
    fn test_simplex_empty_intersection() {
        let bounds = vec![ClosedInterval { min: 0.7, max: 1.0 }; 2];
        let err = SimplexIntersectTensorProductDomain::new(bounds).unwrap_err();
        assert!(matches!(err, OlError::Domain(DomainError::Empty { .. })));
    }

    #[test]
    fn test_simplex_sampling_in_high_dimension() {
        let domain = SimplexIntersectTensorProductDomain::new(unit_box(20)).unwrap();
        let mut rng = StdRng::seed_from_u64(20);
        assert!(domain.check_point_inside(&[0.0; 20]));

        let point = domain.generate_random_point_in_domain(&mut rng).unwrap();
        assert!(domain.check_point_inside(&point));

        let points = domain.generate_uniform_random_points_in_domain(50, &mut rng).unwrap();
        assert!(points.iter().all(|p| domain.check_point_inside(p)));
    }

    #[test]
    fn test_simplex_sampling_respects_box() {
        let domain = SimplexIntersectTensorProductDomain::new(vec![
            ClosedInterval { min: 0.2, max: 0.5 },
            ClosedInterval { min: 0.0, max: 0.3 },
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for point in domain.generate_uniform_random_points_in_domain(30, &mut rng).unwrap() {
            assert!((0.2..=0.5).contains(&point[0]));
            assert!((0.0..=0.3).contains(&point[1]));
        }
    }

    #[test]
    fn test_simplex_random_points_inside() {
        let domain = SimplexIntersectTensorProductDomain::new(unit_box(3)).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let points = domain.generate_uniform_random_points_in_domain(25, &mut rng).unwrap();
        assert_eq!(points.len(), 25);
        assert!(points.iter().all(|p| domain.check_point_inside(p)));
    }
}
