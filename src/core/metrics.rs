//! Pseudo-metrics derived from hyperparameter values.
//!
//! Nothing is trained. The numbers exist so that the comparison chart reacts
//! to slider movement, and they must be reproducible: the same parameter values
//! always give bit-identical metrics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::params::HyperparameterSet;
use crate::prng::hash_unit;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntheticMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub auc: f64,
    /// Seconds.
    pub training_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Accuracy,
    Precision,
    Recall,
    F1,
    Auc,
    TrainingTime,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Accuracy => "Accuracy",
            MetricKind::Precision => "Precision",
            MetricKind::Recall => "Recall",
            MetricKind::F1 => "F1",
            MetricKind::Auc => "AUC",
            MetricKind::TrainingTime => "Train Time (s)",
        }
    }

    /// Hash offset; each metric draws from its own stream.
    fn offset(self) -> u64 {
        match self {
            MetricKind::Accuracy => 1,
            MetricKind::Precision => 2,
            MetricKind::Recall => 3,
            MetricKind::F1 => 4,
            MetricKind::Auc => 5,
            MetricKind::TrainingTime => 6,
        }
    }

    /// `(low, span)`: the metric lands in `[low, low + span)`.
    pub fn display_range(self) -> (f64, f64) {
        match self {
            MetricKind::Accuracy => (0.82, 0.15),
            MetricKind::Precision => (0.80, 0.17),
            MetricKind::Recall => (0.80, 0.18),
            MetricKind::F1 => (0.80, 0.16),
            MetricKind::Auc => (0.85, 0.14),
            MetricKind::TrainingTime => (0.5, 3.0),
        }
    }

    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::Accuracy,
            MetricKind::Precision,
            MetricKind::Recall,
            MetricKind::F1,
            MetricKind::Auc,
            MetricKind::TrainingTime,
        ]
    }
}

impl SyntheticMetrics {
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Accuracy => self.accuracy,
            MetricKind::Precision => self.precision,
            MetricKind::Recall => self.recall,
            MetricKind::F1 => self.f1,
            MetricKind::Auc => self.auc,
            MetricKind::TrainingTime => self.training_time,
        }
    }

    /// Build metrics from any sequence of parameter values.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let seed = seed_of(values);
        let draw = |kind: MetricKind| {
            let (low, span) = kind.display_range();
            low + span * hash_unit(seed, kind.offset())
        };

        Self {
            accuracy: draw(MetricKind::Accuracy),
            precision: draw(MetricKind::Precision),
            recall: draw(MetricKind::Recall),
            f1: draw(MetricKind::F1),
            auc: draw(MetricKind::Auc),
            training_time: draw(MetricKind::TrainingTime),
        }
    }

    pub fn for_set(set: &HyperparameterSet) -> Self {
        Self::from_values(set.values().iter().copied())
    }
}

/// Sum of all values in order; non-finite entries contribute zero.
pub fn seed_of<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(|v| if v.is_finite() { v } else { 0.0 })
        .sum()
}

/// Recompute-on-change cache for one parameter set.
///
/// Keyed by contents, not by revision or address, so a set that is edited and
/// then edited back produces the original metrics again without a stale hit.
#[derive(Debug, Clone, Default)]
pub struct MetricsMemo {
    key: Option<Vec<u64>>,
    value: Option<SyntheticMetrics>,
}

impl MetricsMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, set: &HyperparameterSet) -> SyntheticMetrics {
        let key: Vec<u64> = set.values().iter().map(|v| v.to_bits()).collect();
        match (&self.key, self.value) {
            (Some(k), Some(v)) if *k == key => v,
            _ => {
                let v = SyntheticMetrics::for_set(set);
                self.key = Some(key);
                self.value = Some(v);
                v
            }
        }
    }

    pub fn get_optional(&mut self, set: Option<&HyperparameterSet>) -> Option<SyntheticMetrics> {
        match set {
            Some(set) => Some(self.get(set)),
            None => {
                self.clear();
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.value = None;
    }
}

/// Live metrics next to the baseline's, each memoized on its own.
#[derive(Debug, Clone, Default)]
pub struct MetricsComparison {
    current: MetricsMemo,
    baseline: MetricsMemo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparedMetrics {
    pub current: SyntheticMetrics,
    pub baseline: Option<SyntheticMetrics>,
}

impl ComparedMetrics {
    /// `current - baseline` for one metric, if a baseline exists.
    pub fn delta(&self, kind: MetricKind) -> Option<f64> {
        self.baseline.map(|b| self.current.get(kind) - b.get(kind))
    }
}

impl MetricsComparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compute(
        &mut self,
        current: &HyperparameterSet,
        baseline: Option<&HyperparameterSet>,
    ) -> ComparedMetrics {
        ComparedMetrics {
            current: self.current.get(current),
            baseline: self.baseline.get_optional(baseline),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterStore;
    use crate::schema::Algorithm;

    fn assert_bits_eq(a: &SyntheticMetrics, b: &SyntheticMetrics) {
        for kind in MetricKind::all() {
            assert_eq!(a.get(*kind).to_bits(), b.get(*kind).to_bits(), "{}", kind.label());
        }
    }

    #[test]
    fn value_equal_sets_give_identical_metrics() {
        let mut a = ParameterStore::new(Algorithm::XGBoost);
        let mut b = ParameterStore::new(Algorithm::XGBoost);

        // Same destination reached through different edit histories.
        a.set_value("max_depth", 9.0);
        a.set_value("gamma", 2.0);
        b.set_value("gamma", 7.0);
        b.set_value("gamma", 2.0);
        b.set_value("max_depth", 12.0);
        b.set_value("max_depth", 9.0);

        assert_eq!(a.current(), b.current());
        let ma = SyntheticMetrics::for_set(a.current());
        let mb = SyntheticMetrics::for_set(&b.current().clone());
        assert_bits_eq(&ma, &mb);
    }

    #[test]
    fn metrics_fall_inside_display_ranges() {
        for algo in Algorithm::all() {
            let mut store = ParameterStore::new(*algo);
            for spec in algo.schema() {
                for v in [spec.min, spec.default, spec.max] {
                    store.set_value(spec.key, v);
                    let m = SyntheticMetrics::for_set(store.current());
                    for kind in MetricKind::all() {
                        let (low, span) = kind.display_range();
                        let x = m.get(*kind);
                        assert!(x >= low && x <= low + span, "{} = {x}", kind.label());
                    }
                }
            }
        }
    }

    #[test]
    fn metrics_change_when_parameters_change() {
        let mut store = ParameterStore::new(Algorithm::LightGBM);
        let before = SyntheticMetrics::for_set(store.current());
        store.set_value("num_leaves", 64.0);
        let after = SyntheticMetrics::for_set(store.current());
        assert_ne!(before, after);
    }

    #[test]
    fn non_finite_values_count_as_zero() {
        assert_eq!(seed_of([1.0, f64::NAN, 2.0, f64::INFINITY]), 3.0);
        let a = SyntheticMetrics::from_values([1.0, f64::NAN, 2.0]);
        let b = SyntheticMetrics::from_values([1.0, 0.0, 2.0]);
        assert_bits_eq(&a, &b);
    }

    #[test]
    fn memo_recomputes_when_contents_change() {
        let mut store = ParameterStore::new(Algorithm::CatBoost);
        let mut memo = MetricsMemo::new();

        let first = memo.get(store.current());
        store.set_value("depth", 10.0);
        let second = memo.get(store.current());
        assert_ne!(first, second);

        store.set_value("depth", 6.0);
        let third = memo.get(store.current());
        assert_bits_eq(&first, &third);
    }

    #[test]
    fn comparison_tracks_baseline_independently() {
        let mut store = ParameterStore::new(Algorithm::XGBoost);
        let mut cmp = MetricsComparison::new();

        let none = cmp.compute(store.current(), store.baseline());
        assert!(none.baseline.is_none());
        assert!(none.delta(MetricKind::Accuracy).is_none());

        store.capture_baseline();
        store.set_value("n_estimators", 500.0);
        let both = cmp.compute(store.current(), store.baseline());
        let baseline = both.baseline.unwrap();

        assert_bits_eq(
            &baseline,
            &SyntheticMetrics::for_set(&HyperparameterSet::defaults(Algorithm::XGBoost)),
        );
        assert_bits_eq(&both.current, &SyntheticMetrics::for_set(store.current()));
        let d = both.delta(MetricKind::Auc).unwrap();
        assert_eq!(d, both.current.auc - baseline.auc);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_snake_case_fields() {
        let m = SyntheticMetrics::from_values([1.0]);
        let json = serde_json::to_value(m).unwrap();
        assert!(json.get("training_time").is_some());
        assert!(json.get("f1").is_some());
    }
}
