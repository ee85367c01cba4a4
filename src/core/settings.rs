//! Display toggles for the playground charts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoostingMode {
    #[default]
    Sequential,
    Residual,
    Contribution,
}

impl BoostingMode {
    pub fn label(self) -> &'static str {
        match self {
            BoostingMode::Sequential => "Sequential",
            BoostingMode::Residual => "Residual Focus",
            BoostingMode::Contribution => "Tree Contribution",
        }
    }

    pub fn all() -> &'static [BoostingMode] {
        &[
            BoostingMode::Sequential,
            BoostingMode::Residual,
            BoostingMode::Contribution,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TreeLayout {
    #[default]
    Horizontal,
    Vertical,
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImportanceMode {
    #[default]
    Gain,
    Split,
    Shap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortBy {
    #[default]
    Importance,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoostingView {
    pub mode: BoostingMode,
    pub show_predictions: bool,
    pub show_residuals: bool,
}

impl Default for BoostingView {
    fn default() -> Self {
        Self {
            mode: BoostingMode::Sequential,
            show_predictions: true,
            show_residuals: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeView {
    pub layout: TreeLayout,
    pub show_values: bool,
    pub show_split_info: bool,
    pub highlight_path: bool,
}

impl Default for TreeView {
    fn default() -> Self {
        Self {
            layout: TreeLayout::Horizontal,
            show_values: true,
            show_split_info: true,
            highlight_path: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureView {
    pub mode: ImportanceMode,
    pub sort_by: SortBy,
    pub direction: SortDirection,
    pub top_n: u32,
}

impl Default for FeatureView {
    fn default() -> Self {
        Self {
            mode: ImportanceMode::Gain,
            sort_by: SortBy::Importance,
            direction: SortDirection::Desc,
            top_n: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HyperparameterView {
    pub compare_mode: bool,
    pub show_impact: bool,
}

impl Default for HyperparameterView {
    fn default() -> Self {
        Self {
            compare_mode: false,
            show_impact: true,
        }
    }
}

/// Every display toggle in one value. Edits go through [`SettingsAction`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisualizationSettings {
    pub boosting: BoostingView,
    pub tree: TreeView,
    pub features: FeatureView,
    pub hyperparameters: HyperparameterView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    SetBoostingMode(BoostingMode),
    TogglePredictions,
    ToggleResiduals,
    SetTreeLayout(TreeLayout),
    ToggleTreeValues,
    ToggleSplitInfo,
    ToggleHighlightPath,
    SetImportanceMode(ImportanceMode),
    SetSortBy(SortBy),
    ToggleSortDirection,
    SetTopN(u32),
    ToggleCompareMode,
    ToggleImpact,
}

impl VisualizationSettings {
    pub fn apply(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::SetBoostingMode(mode) => self.boosting.mode = mode,
            SettingsAction::TogglePredictions => {
                self.boosting.show_predictions = !self.boosting.show_predictions
            }
            SettingsAction::ToggleResiduals => {
                self.boosting.show_residuals = !self.boosting.show_residuals
            }
            SettingsAction::SetTreeLayout(layout) => self.tree.layout = layout,
            SettingsAction::ToggleTreeValues => self.tree.show_values = !self.tree.show_values,
            SettingsAction::ToggleSplitInfo => {
                self.tree.show_split_info = !self.tree.show_split_info
            }
            SettingsAction::ToggleHighlightPath => {
                self.tree.highlight_path = !self.tree.highlight_path
            }
            SettingsAction::SetImportanceMode(mode) => self.features.mode = mode,
            SettingsAction::SetSortBy(sort_by) => self.features.sort_by = sort_by,
            SettingsAction::ToggleSortDirection => {
                self.features.direction = self.features.direction.flipped()
            }
            // top_n >= 1
            SettingsAction::SetTopN(n) => self.features.top_n = n.max(1),
            SettingsAction::ToggleCompareMode => {
                self.hyperparameters.compare_mode = !self.hyperparameters.compare_mode
            }
            SettingsAction::ToggleImpact => {
                self.hyperparameters.show_impact = !self.hyperparameters.show_impact
            }
        }
    }
}
