//! # boostlab
//!
//! The state engine behind an interactive gradient-boosting walkthrough.
//!
//! Nothing here trains a model. The crate keeps the hyperparameters a learner
//! is poking at, walks a step counter that stands in for boosting iterations,
//! and derives plausible-looking metrics and chart data from those two inputs.
//! Every output is a pure function of its inputs, so a redraw never flickers.
//!
//! ## Quick Start
//!
//! ```
//! use boostlab::prelude::*;
//!
//! let mut store = ParameterStore::new(Algorithm::XGBoost);
//! store.set_parameter("max_depth", "999");
//! assert_eq!(store.get("max_depth"), Some(15.0));
//!
//! let metrics = SyntheticMetrics::for_set(store.current());
//! assert!((0.82..=0.97).contains(&metrics.accuracy));
//!
//! let mut animator = StepAnimator::default();
//! animator.play();
//! animator.tick();
//! assert_eq!(animator.current_step(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization of the public value types
//!
//! ## Modules
//!
//! - [`schema`]: per-algorithm hyperparameter catalogs
//! - [`params`]: the parameter store (current set, baseline, selection)
//! - [`animation`]: the step animator state machine
//! - [`metrics`]: deterministic synthetic metrics
//! - [`synthetic`]: chart data derived from points, step and seed, plus the mock tree
//! - [`settings`]: visualization display toggles
//! - [`comparison`]: reference figures for the comparison page
//! - [`ui_model`]: page, tab and dataset inventories

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/schema.rs"]
pub mod schema;

#[path = "core/params.rs"]
pub mod params;

#[path = "core/animation.rs"]
pub mod animation;

#[path = "core/metrics.rs"]
pub mod metrics;

#[path = "core/synthetic.rs"]
pub mod synthetic;

#[path = "core/settings.rs"]
pub mod settings;

#[path = "core/comparison.rs"]
pub mod comparison;

pub mod ui_model;

/// Prelude module for convenient imports.
///
/// ```
/// use boostlab::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{AnimationState, PlayState, StepAnimator, TimerEffect};
    pub use crate::comparison::{AlgorithmProfile, ComparisonAspect};
    pub use crate::metrics::{ComparedMetrics, MetricKind, MetricsComparison, SyntheticMetrics};
    pub use crate::params::{HyperparameterSet, ParamUpdate, ParameterStore};
    pub use crate::schema::{Algorithm, ParamCategory, ParamSpec};
    pub use crate::settings::{SettingsAction, TreeView, VisualizationSettings};
    pub use crate::synthetic::{DataPoint, TreeNode, TreeNodeKind};
    pub use crate::ui_model::{Dataset, Page, PlaygroundTab, TaskType};
}
