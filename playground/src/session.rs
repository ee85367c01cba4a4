//! One playground screen's worth of state.
//!
//! The session owns every piece the page edits and keeps the cross-cutting
//! rules in one place: switching algorithm, task or dataset rewinds the
//! animation, and metrics are always read through the memo.

use std::sync::Arc;

use boostlab::animation::{AnimationState, StepAnimator};
use boostlab::metrics::{ComparedMetrics, MetricsComparison};
use boostlab::params::{ParamUpdate, ParameterStore};
use boostlab::schema::Algorithm;
use boostlab::settings::{SettingsAction, VisualizationSettings};
use boostlab::synthetic::{
    loss_curve, mock_tree, prediction_accuracy, predictions, residual_scale, DataPoint, TreeNode,
};
use boostlab::ui_model::{Dataset, PlaygroundTab, TaskType};
use tracing::{debug, info};

use crate::config::PlaygroundConfig;
use crate::player::AnimationDriver;
use crate::preview::{load_points, PointOrigin, PreviewSource};

/// What the chart area shows for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub animation: AnimationState,
    pub progress: f64,
    pub accuracy: f64,
    pub loss: f64,
    pub residual_scale: f64,
}

pub struct PlaygroundSession {
    store: ParameterStore,
    metrics: MetricsComparison,
    settings: VisualizationSettings,
    task: TaskType,
    dataset: Dataset,
    tab: PlaygroundTab,
    driver: AnimationDriver,
    points: Vec<DataPoint>,
    origin: Option<PointOrigin>,
    seed: u64,
}

impl PlaygroundSession {
    pub fn new(config: &PlaygroundConfig) -> Self {
        Self {
            store: ParameterStore::new(config.algorithm),
            metrics: MetricsComparison::new(),
            settings: VisualizationSettings::default(),
            task: config.task,
            dataset: config.dataset,
            tab: PlaygroundTab::default(),
            driver: AnimationDriver::new(StepAnimator::new(config.max_steps, config.speed_ms)),
            points: Vec::new(),
            origin: None,
            seed: config.fallback_seed,
        }
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn settings(&self) -> &VisualizationSettings {
        &self.settings
    }

    pub fn task(&self) -> TaskType {
        self.task
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn tab(&self) -> PlaygroundTab {
        self.tab
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut AnimationDriver {
        &mut self.driver
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn point_origin(&self) -> Option<PointOrigin> {
        self.origin
    }

    pub fn set_parameter(&mut self, key: &str, raw: &str) -> ParamUpdate {
        let update = self.store.set_parameter(key, raw);
        debug!("{} <- {:?}: {:?}", key, raw, update);
        update
    }

    pub fn select_parameter(&mut self, key: &str) -> bool {
        self.store.select_parameter(key)
    }

    pub fn reset_parameters(&mut self) {
        self.store.reset_to_defaults();
    }

    pub fn capture_baseline(&mut self) {
        self.store.capture_baseline();
    }

    pub fn clear_baseline(&mut self) {
        self.store.clear_baseline();
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm == self.store.algorithm() {
            return;
        }
        info!("Algorithm -> {}", algorithm.display_name());
        self.store.select_algorithm(algorithm);
        self.driver.reset();
    }

    /// Switching task also switches to that task's default dataset.
    pub fn select_task(&mut self, task: TaskType) {
        if task == self.task {
            return;
        }
        self.task = task;
        self.switch_dataset(task.default_dataset());
    }

    /// Returns false when `dataset` does not belong to the current task.
    pub fn select_dataset(&mut self, dataset: Dataset) -> bool {
        if !self.task.datasets().contains(&dataset) {
            return false;
        }
        if dataset != self.dataset {
            self.switch_dataset(dataset);
        }
        true
    }

    pub fn select_tab(&mut self, tab: PlaygroundTab) {
        self.tab = tab;
    }

    pub fn apply_setting(&mut self, action: SettingsAction) {
        self.settings.apply(action);
    }

    pub fn metrics(&mut self) -> ComparedMetrics {
        self.metrics
            .compute(self.store.current(), self.store.baseline())
    }

    /// Replace the point cloud from `source`, falling back on any failure.
    pub async fn load_points(&mut self, source: Arc<dyn PreviewSource>) -> PointOrigin {
        let loaded = load_points(source, self.dataset, self.seed).await;
        self.points = loaded.points;
        self.origin = Some(loaded.origin);
        loaded.origin
    }

    pub fn frame(&self) -> Frame {
        let animation = self.driver.state();
        let step = animation.current_step;
        let loss = loss_curve(step)
            .iter()
            .rev()
            .find(|p| p.reached)
            .map_or(1.0, |p| p.loss);
        Frame {
            animation,
            progress: animation.progress(),
            accuracy: prediction_accuracy(&predictions(&self.points, step, self.seed)),
            loss,
            residual_scale: residual_scale(step),
        }
    }

    /// The tree built at the current step, for the "Current Tree" tab.
    pub fn tree(&self) -> Vec<TreeNode> {
        mock_tree(self.driver.current_step())
    }

    fn switch_dataset(&mut self, dataset: Dataset) {
        info!("Dataset -> {}", dataset.display_name(self.task));
        self.dataset = dataset;
        self.points.clear();
        self.origin = None;
        self.driver.reset();
    }
}
