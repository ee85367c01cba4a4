//! Page, tab and dataset inventories shared by every front end.
//!
//! These are plain enums so the navigation model can be unit-tested on the host
//! without any rendering layer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    AlgorithmExplorer,
    VisualizationPlayground,
    HyperparameterTuning,
    Comparison,
    Documentation,
    About,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::AlgorithmExplorer => "Algorithm Explorer",
            Page::VisualizationPlayground => "Visualization Playground",
            Page::HyperparameterTuning => "Hyperparameter Tuning",
            Page::Comparison => "Algorithm Comparison",
            Page::Documentation => "Documentation",
            Page::About => "About",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::AlgorithmExplorer => "/algorithms",
            Page::VisualizationPlayground => "/visualization",
            Page::HyperparameterTuning => "/hyperparameters",
            Page::Comparison => "/comparison",
            Page::Documentation => "/documentation",
            Page::About => "/about",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Page::all().iter().copied().find(|p| p.path() == path)
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::AlgorithmExplorer,
            Page::VisualizationPlayground,
            Page::HyperparameterTuning,
            Page::Comparison,
            Page::Documentation,
            Page::About,
        ]
    }
}

/// Tabs under the playground chart area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaygroundTab {
    #[default]
    Process,
    Tree,
    Loss,
    Residuals,
}

impl PlaygroundTab {
    pub fn label(self) -> &'static str {
        match self {
            PlaygroundTab::Process => "Boosting Process",
            PlaygroundTab::Tree => "Current Tree",
            PlaygroundTab::Loss => "Loss Function",
            PlaygroundTab::Residuals => "Residuals",
        }
    }

    pub fn all() -> &'static [PlaygroundTab] {
        &[
            PlaygroundTab::Process,
            PlaygroundTab::Tree,
            PlaygroundTab::Loss,
            PlaygroundTab::Residuals,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TaskType {
    #[default]
    Classification,
    Regression,
}

impl TaskType {
    pub fn label(self) -> &'static str {
        match self {
            TaskType::Classification => "Classification",
            TaskType::Regression => "Regression",
        }
    }

    /// Dataset selected when switching to this task type.
    pub fn default_dataset(self) -> Dataset {
        match self {
            TaskType::Classification => Dataset::Simulated,
            TaskType::Regression => Dataset::Housing,
        }
    }

    pub fn datasets(self) -> &'static [Dataset] {
        match self {
            TaskType::Classification => &[
                Dataset::Simulated,
                Dataset::Iris,
                Dataset::BreastCancer,
                Dataset::Wine,
            ],
            TaskType::Regression => &[Dataset::Housing, Dataset::Diabetes, Dataset::Simulated],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dataset {
    #[default]
    Simulated,
    Iris,
    BreastCancer,
    Wine,
    Housing,
    Diabetes,
}

impl Dataset {
    /// Name used by the dataset API (`/datasets/{name}/pca`).
    pub fn api_name(self) -> &'static str {
        match self {
            Dataset::Simulated => "simulated",
            Dataset::Iris => "iris",
            Dataset::BreastCancer => "breast_cancer",
            Dataset::Wine => "wine",
            Dataset::Housing => "housing",
            Dataset::Diabetes => "diabetes",
        }
    }

    pub fn display_name(self, task: TaskType) -> &'static str {
        match (self, task) {
            (Dataset::Simulated, TaskType::Classification) => "Simulated 2D",
            (Dataset::Simulated, TaskType::Regression) => "Simulated 1D",
            (Dataset::Iris, _) => "Iris",
            (Dataset::BreastCancer, _) => "Breast Cancer",
            (Dataset::Wine, _) => "Wine",
            (Dataset::Housing, _) => "Housing",
            (Dataset::Diabetes, _) => "Diabetes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        Dataset::all().iter().copied().find(|d| d.api_name() == s)
    }

    pub fn all() -> &'static [Dataset] {
        &[
            Dataset::Simulated,
            Dataset::Iris,
            Dataset::BreastCancer,
            Dataset::Wine,
            Dataset::Housing,
            Dataset::Diabetes,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 7);

        let mut paths: Vec<&'static str> = all.iter().copied().map(Page::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 7);

        for p in all {
            assert!(!p.label().trim().is_empty());
            assert_eq!(Page::from_path(p.path()), Some(*p));
        }
    }

    #[test]
    fn from_path_tolerates_trailing_slash() {
        assert_eq!(Page::from_path("/comparison/"), Some(Page::Comparison));
        assert_eq!(Page::from_path(""), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/nope"), None);
    }

    #[test]
    fn task_defaults_belong_to_their_group() {
        for task in [TaskType::Classification, TaskType::Regression] {
            assert!(task.datasets().contains(&task.default_dataset()));
        }
    }

    #[test]
    fn dataset_names_parse_back() {
        for d in Dataset::all() {
            assert_eq!(Dataset::parse(d.api_name()), Some(*d));
        }
        assert_eq!(Dataset::parse(" Breast_Cancer "), Some(Dataset::BreastCancer));
        assert_eq!(Dataset::parse("mnist"), None);
    }

    #[test]
    fn playground_tabs_include_loss_and_residuals() {
        let all = PlaygroundTab::all();
        assert!(all.contains(&PlaygroundTab::Loss));
        assert!(all.contains(&PlaygroundTab::Residuals));
    }
}
