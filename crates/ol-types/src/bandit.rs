//! Multi-armed bandit historical data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Add;

use crate::errors::OlResult;
use crate::validation_error;

/// Cumulative outcome counts for one bandit arm.
///
/// `total` is supplied independently of `win` and `loss`; arms whose outcomes
/// are only partially known may report `total > win + loss`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleArm {
    pub win: f64,
    pub loss: f64,
    pub total: u64,
}

impl SampleArm {
    pub fn new(win: f64, loss: f64, total: u64) -> Self {
        Self { win, loss, total }
    }

    pub fn validate(&self, arm_name: &str) -> OlResult<()> {
        if !(self.win >= 0.0) {
            return Err(validation_error!("arm {} has invalid win count {}", arm_name, self.win));
        }
        if !(self.loss >= 0.0) {
            return Err(validation_error!("arm {} has invalid loss count {}", arm_name, self.loss));
        }
        Ok(())
    }

    /// Sum of two arms' counts, or `None` if `total` overflows.
    pub fn checked_add(self, other: SampleArm) -> Option<SampleArm> {
        Some(SampleArm {
            win: self.win + other.win,
            loss: self.loss + other.loss,
            total: self.total.checked_add(other.total)?,
        })
    }
}

/// Saturates `total`; use [`SampleArm::checked_add`] to detect overflow.
impl Add for SampleArm {
    type Output = SampleArm;

    fn add(self, other: SampleArm) -> SampleArm {
        SampleArm {
            win: self.win + other.win,
            loss: self.loss + other.loss,
            total: self.total.saturating_add(other.total),
        }
    }
}

/// Per-arm history consumed by bandit allocation policies.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BanditHistoricalData {
    sample_arms: BTreeMap<String, SampleArm>,
}

impl BanditHistoricalData {
    pub fn new(sample_arms: BTreeMap<String, SampleArm>) -> OlResult<Self> {
        for (name, arm) in &sample_arms {
            arm.validate(name)?;
        }
        Ok(Self { sample_arms })
    }

    pub fn sample_arms(&self) -> &BTreeMap<String, SampleArm> {
        &self.sample_arms
    }

    pub fn get(&self, arm_name: &str) -> Option<&SampleArm> {
        self.sample_arms.get(arm_name)
    }

    pub fn num_arms(&self) -> usize {
        self.sample_arms.len()
    }

    /// Merge new observations in: counts of known arms are summed, unknown arms
    /// are inserted.
    pub fn append_sample_arms(
        &mut self,
        sample_arms: BTreeMap<String, SampleArm>,
    ) -> OlResult<()> {
        let mut merged = Vec::with_capacity(sample_arms.len());
        for (name, arm) in sample_arms {
            arm.validate(&name)?;
            let arm = match self.sample_arms.get(&name) {
                Some(existing) => existing.checked_add(arm).ok_or_else(|| {
                    validation_error!("arm {} total overflows after appending {}", name, arm.total)
                })?,
                None => arm,
            };
            merged.push((name, arm));
        }
        self.sample_arms.extend(merged);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OlError;

    fn arms(entries: &[(&str, f64, f64, u64)]) -> BTreeMap<String, SampleArm> {
        entries
            .iter()
            .map(|(name, win, loss, total)| (name.to_string(), SampleArm::new(*win, *loss, *total)))
            .collect()
    }

    #[test]
    fn test_new_keeps_all_arms() {
        let history =
            BanditHistoricalData::new(arms(&[("arm1", 5.0, 2.0, 7), ("arm2", 0.0, 0.0, 0)]))
                .unwrap();
        assert_eq!(history.num_arms(), 2);
        assert_eq!(history.get("arm1"), Some(&SampleArm::new(5.0, 2.0, 7)));
    }

    #[test]
    fn test_total_not_checked_against_outcomes() {
        // Partial outcomes: more pulls than recorded wins and losses.
        let history = BanditHistoricalData::new(arms(&[("arm1", 1.0, 1.0, 10)])).unwrap();
        assert_eq!(history.get("arm1").unwrap().total, 10);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let err = BanditHistoricalData::new(arms(&[("bad", -1.0, 0.0, 1)])).unwrap_err();
        assert!(matches!(err, OlError::Validation(ref m) if m.contains("bad")));

        let err = BanditHistoricalData::new(arms(&[("nan", 0.0, f64::NAN, 1)])).unwrap_err();
        assert!(matches!(err, OlError::Validation(_)));
    }

    #[test]
    fn test_append_sums_existing_arms() {
        let mut history = BanditHistoricalData::new(arms(&[("arm1", 5.0, 2.0, 7)])).unwrap();
        history
            .append_sample_arms(arms(&[("arm1", 1.0, 1.0, 2), ("arm2", 3.0, 0.0, 3)]))
            .unwrap();

        assert_eq!(history.get("arm1"), Some(&SampleArm::new(6.0, 3.0, 9)));
        assert_eq!(history.get("arm2"), Some(&SampleArm::new(3.0, 0.0, 3)));
    }

    #[test]
    fn test_append_is_atomic_on_invalid_arm() {
        let mut history = BanditHistoricalData::new(arms(&[("arm1", 5.0, 2.0, 7)])).unwrap();
        let result =
            history.append_sample_arms(arms(&[("arm1", 1.0, 0.0, 1), ("arm2", -2.0, 0.0, 1)]));
        assert!(result.is_err());
        assert_eq!(history.get("arm1"), Some(&SampleArm::new(5.0, 2.0, 7)));
        assert_eq!(history.num_arms(), 1);
    }

    #[test]
    fn test_append_total_overflow_rejected() {
        let mut history =
            BanditHistoricalData::new(arms(&[("arm1", 1.0, 0.0, u64::MAX - 1)])).unwrap();
        let result =
            history.append_sample_arms(arms(&[("arm0", 1.0, 0.0, 1), ("arm1", 0.0, 1.0, 2)]));

        assert!(matches!(result, Err(OlError::Validation(ref m)) if m.contains("arm1")));
        assert_eq!(history.get("arm1").unwrap().total, u64::MAX - 1);
        assert_eq!(history.get("arm0"), None);
    }

    #[test]
    fn test_add_saturates_total() {
        let big = SampleArm::new(1.0, 1.0, u64::MAX);
        assert_eq!((big + SampleArm::new(0.0, 0.0, 5)).total, u64::MAX);
        assert_eq!(big.checked_add(SampleArm::new(0.0, 0.0, 5)), None);
        assert_eq!(
            SampleArm::new(1.0, 2.0, 3).checked_add(SampleArm::new(1.0, 0.0, 1)),
            Some(SampleArm::new(2.0, 2.0, 4))
        );
    }
}
