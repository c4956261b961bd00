//! Reference domain family: a direct transcription of the definitions over
//! [`ClosedInterval`] bounds. Used to cross-check the native family.

use ol_types::{ClosedInterval, OlResult};
use rand::{Rng, RngCore};

use super::{
    latin_hypercube, rejection_sample, restrict_to_unit_simplex, Domain, DomainType,
    SIMPLEX_TOLERANCE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TensorProductDomain {
    domain_bounds: Vec<ClosedInterval>,
}

impl TensorProductDomain {
    pub fn new(domain_bounds: Vec<ClosedInterval>) -> Self {
        Self { domain_bounds }
    }
}

impl Domain for TensorProductDomain {
    fn domain_type(&self) -> DomainType {
        DomainType::TensorProduct
    }

    fn dim(&self) -> usize {
        self.domain_bounds.len()
    }

    fn bounding_box(&self) -> Vec<ClosedInterval> {
        self.domain_bounds.clone()
    }

    fn check_point_inside(&self, point: &[f64]) -> bool {
        if point.len() != self.dim() {
            return false;
        }
        for (value, interval) in point.iter().zip(&self.domain_bounds) {
            if !interval.contains(*value) {
                return false;
            }
        }
        true
    }

    fn generate_random_point_in_domain(&self, rng: &mut dyn RngCore) -> OlResult<Vec<f64>> {
        let mut point = Vec::with_capacity(self.dim());
        for interval in &self.domain_bounds {
            if interval.is_empty() {
                point.push(interval.min);
            } else {
                point.push(rng.random_range(interval.min..=interval.max));
            }
        }
        Ok(point)
    }

    fn generate_uniform_random_points_in_domain(
        &self,
        num_points: usize,
        rng: &mut dyn RngCore,
    ) -> OlResult<Vec<Vec<f64>>> {
        Ok(latin_hypercube(&self.domain_bounds, num_points, rng))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimplexIntersectTensorProductDomain {
    domain_bounds: Vec<ClosedInterval>,
}

impl SimplexIntersectTensorProductDomain {
    pub fn new(domain_bounds: Vec<ClosedInterval>) -> OlResult<Self> {
        Ok(Self {
            domain_bounds: restrict_to_unit_simplex(&domain_bounds)?,
        })
    }
}

impl Domain for SimplexIntersectTensorProductDomain {
    fn domain_type(&self) -> DomainType {
        DomainType::SimplexIntersectTensorProduct
    }

    fn dim(&self) -> usize {
        self.domain_bounds.len()
    }

    fn bounding_box(&self) -> Vec<ClosedInterval> {
        self.domain_bounds.clone()
    }

    fn check_point_inside(&self, point: &[f64]) -> bool {
        if point.len() != self.dim() {
            return false;
        }
        let mut sum = 0.0;
        for (value, interval) in point.iter().zip(&self.domain_bounds) {
            if !interval.contains(*value) {
                return false;
            }
            sum += value;
        }
        sum <= 1.0 + SIMPLEX_TOLERANCE
    }

    fn generate_random_point_in_domain(&self, rng: &mut dyn RngCore) -> OlResult<Vec<f64>> {
        let dim = self.dim();
        let point = rejection_sample(
            rng,
            |rng| sorted_uniform_spacings(dim, rng),
            |p| self.check_point_inside(p),
        )?;
        Ok(point)
    }

    fn generate_uniform_random_points_in_domain(
        &self,
        num_points: usize,
        rng: &mut dyn RngCore,
    ) -> OlResult<Vec<Vec<f64>>> {
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            points.push(self.generate_random_point_in_domain(rng)?);
        }
        Ok(points)
    }
}

/// Uniform point in the unit simplex: the gaps between `dim` sorted uniform
/// draws, starting from zero.
fn sorted_uniform_spacings(dim: usize, rng: &mut dyn RngCore) -> Vec<f64> {
    let mut cuts: Vec<f64> = (0..dim).map(|_| rng.random::<f64>()).collect();
    cuts.sort_by(f64::total_cmp);

    let mut previous = 0.0;
    let mut point = Vec::with_capacity(dim);
    for cut in cuts {
        point.push(cut - previous);
        previous = cut;
    }
    point
}
