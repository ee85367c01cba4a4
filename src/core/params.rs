//! Hyperparameter state: the live set for the active algorithm plus an
//! optional frozen baseline for side-by-side comparison.
//!
//! Values are stored in schema order, so two sets holding the same numbers are
//! structurally equal no matter how they were edited. All writes clamp into the
//! schema range; there is no way to hold an out-of-range value.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::schema::{Algorithm, ParamCategory, ParamSpec};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HyperparameterSet {
    algorithm: Algorithm,
    values: Vec<f64>,
}

impl HyperparameterSet {
    pub fn defaults(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            values: algorithm.schema().iter().map(|p| p.default).collect(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.index_of(key).map(|i| self.values[i])
    }

    /// Values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static ParamSpec, f64)> + '_ {
        self.algorithm.schema().iter().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.algorithm.schema().iter().position(|p| p.key == key)
    }

    /// Store `value` clamped into the parameter's range; returns the stored value.
    fn store_clamped(&mut self, index: usize, value: f64) -> f64 {
        let spec = &self.algorithm.schema()[index];
        let stored = spec.clamp(value);
        self.values[index] = stored;
        stored
    }
}

/// What a single parameter write did. Nothing here is an error: bad input is
/// ignored and out-of-range input is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamUpdate {
    Applied(f64),
    Clamped { requested: f64, stored: f64 },
    /// Input was not a finite number; the previous value is kept.
    Rejected,
    UnknownParameter,
}

impl ParamUpdate {
    pub fn stored(self) -> Option<f64> {
        match self {
            ParamUpdate::Applied(v) => Some(v),
            ParamUpdate::Clamped { stored, .. } => Some(stored),
            ParamUpdate::Rejected | ParamUpdate::UnknownParameter => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParameterStore {
    current: HyperparameterSet,
    baseline: Option<HyperparameterSet>,
    selected: Option<&'static str>,
    revision: u64,
}

impl ParameterStore {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            current: HyperparameterSet::defaults(algorithm),
            baseline: None,
            selected: algorithm.schema().first().map(|p| p.key),
            revision: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.current.algorithm()
    }

    pub fn current(&self) -> &HyperparameterSet {
        &self.current
    }

    pub fn baseline(&self) -> Option<&HyperparameterSet> {
        self.baseline.as_ref()
    }

    /// Bumped on every mutation that changes the live set's contents.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.current.get(key)
    }

    /// Text-input path: parse, clamp, store.
    pub fn set_parameter(&mut self, key: &str, raw: &str) -> ParamUpdate {
        if self.current.index_of(key).is_none() {
            return ParamUpdate::UnknownParameter;
        }
        match raw.trim().parse::<f64>() {
            Ok(v) => self.set_value(key, v),
            Err(_) => ParamUpdate::Rejected,
        }
    }

    /// Slider path: the value is already numeric but may still be out of range.
    pub fn set_value(&mut self, key: &str, value: f64) -> ParamUpdate {
        let Some(index) = self.current.index_of(key) else {
            return ParamUpdate::UnknownParameter;
        };
        // Infinities clamp to a bound like any other out-of-range value.
        if value.is_nan() {
            return ParamUpdate::Rejected;
        }

        let previous = self.current.values[index];
        let stored = self.current.store_clamped(index, value);
        if stored.to_bits() != previous.to_bits() {
            self.revision += 1;
        }

        if stored == value {
            ParamUpdate::Applied(stored)
        } else {
            ParamUpdate::Clamped {
                requested: value,
                stored,
            }
        }
    }

    pub fn reset_to_defaults(&mut self) {
        let defaults = HyperparameterSet::defaults(self.algorithm());
        if defaults != self.current {
            self.revision += 1;
        }
        self.current = defaults;
    }

    /// Freeze a copy of the live set, replacing any earlier baseline.
    pub fn capture_baseline(&mut self) {
        self.baseline = Some(self.current.clone());
    }

    pub fn clear_baseline(&mut self) {
        self.baseline = None;
    }

    /// Switch schemas. Nothing carries over: values go back to defaults and the
    /// baseline is dropped.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm == self.algorithm() {
            return;
        }
        self.current = HyperparameterSet::defaults(algorithm);
        self.baseline = None;
        self.selected = algorithm.schema().first().map(|p| p.key);
        self.revision += 1;
    }

    pub fn visible_parameters(
        &self,
        category: ParamCategory,
    ) -> impl Iterator<Item = &'static ParamSpec> {
        self.algorithm()
            .schema()
            .iter()
            .filter(move |p| p.category == category)
    }

    pub fn selected_parameter(&self) -> Option<&'static ParamSpec> {
        self.selected.and_then(|key| self.algorithm().spec(key))
    }

    pub fn select_parameter(&mut self, key: &str) -> bool {
        match self.algorithm().spec(key) {
            Some(spec) => {
                self.selected = Some(spec.key);
                true
            }
            None => false,
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
