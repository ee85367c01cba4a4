//! Hyperparameter catalogs for the three boosting libraries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three boosting libraries the playground explains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    XGBoost,
    LightGBM,
    CatBoost,
}

impl Algorithm {
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::XGBoost => "xgboost",
            Algorithm::LightGBM => "lightgbm",
            Algorithm::CatBoost => "catboost",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::XGBoost => "XGBoost",
            Algorithm::LightGBM => "LightGBM",
            Algorithm::CatBoost => "CatBoost",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::XGBoost => "Level-wise trees fitted to second-order gradient statistics, with L1/L2 regularization built into the split gain.",
            Algorithm::LightGBM => "Leaf-wise trees over histogram-binned features, with gradient-based one-side sampling and exclusive feature bundling.",
            Algorithm::CatBoost => "Symmetric (oblivious) trees with ordered boosting and ordered target statistics for categorical features.",
        }
    }

    /// Loss and optimization summary shown next to the loss curve.
    pub fn loss_details(self) -> &'static str {
        match self {
            Algorithm::XGBoost => "Objective: Logistic/MSE • Regularization: L1/L2 • Optimization: Second-order approximation",
            Algorithm::LightGBM => "Objective: Logistic/MSE • Regularization: L1/L2 • Optimization: Histogram gradients",
            Algorithm::CatBoost => "Objective: Logloss/RMSE • Regularization: L2 • Optimization: Ordered boosting",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xgboost" => Some(Self::XGBoost),
            "lightgbm" => Some(Self::LightGBM),
            "catboost" => Some(Self::CatBoost),
            _ => None,
        }
    }

    pub fn schema(self) -> &'static [ParamSpec] {
        match self {
            Algorithm::XGBoost => XGBOOST_PARAMS,
            Algorithm::LightGBM => LIGHTGBM_PARAMS,
            Algorithm::CatBoost => CATBOOST_PARAMS,
        }
    }

    pub fn spec(self, key: &str) -> Option<&'static ParamSpec> {
        self.schema().iter().find(|p| p.key == key)
    }

    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::XGBoost, Algorithm::LightGBM, Algorithm::CatBoost]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParamCategory {
    #[default]
    Basic,
    Advanced,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub category: ParamCategory,
}

impl ParamSpec {
    /// Clamp into `[min, max]`. Callers must filter NaN first.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Decimal places that make sense for this parameter's slider step.
    pub fn decimals(&self) -> usize {
        decimals_for_step(self.step)
    }

    pub fn format_value(&self, v: f64) -> String {
        format!("{:.*}", self.decimals(), v)
    }

    /// What moving this parameter does to the model, if there is a note for it.
    pub fn impact_note(&self) -> Option<&'static str> {
        match self.key {
            "learning_rate" => Some("Lower values require more boosting rounds but often yield better performance. Too high can cause overfitting, too low can cause underfitting."),
            "max_depth" | "depth" => Some("Controls tree complexity. Larger values allow more complex patterns but increase risk of overfitting."),
            "n_estimators" | "iterations" => Some("Number of trees in the ensemble. More trees can improve performance but with diminishing returns and increased training time."),
            "subsample" | "bagging_fraction" => Some("Subsampling rows can help prevent overfitting and improve training speed. Values below 1.0 introduce randomness similar to Random Forests."),
            "colsample_bytree" | "feature_fraction" | "rsm" => Some("Subsampling features can help prevent overfitting, especially with high-dimensional data. Each tree will only consider a subset of features."),
            "alpha" | "lambda_l1" => Some("L1 regularization encourages sparsity by pushing some leaf weights to zero. Useful for feature selection and when dealing with many features."),
            "lambda" | "lambda_l2" | "l2_leaf_reg" => Some("L2 regularization reduces the magnitude of leaf weights, helping to prevent overfitting. Higher values create smoother models."),
            "min_child_weight" => Some("Controls the minimum hessian (second derivative) sum needed in a child. Higher values are more conservative and can prevent overfitting."),
            "min_data_in_leaf" | "min_gain_to_split" => Some("Controls the minimum samples or gain needed to create a new node. Higher values prevent the creation of nodes with little support."),
            "num_leaves" => Some("Controls the maximum number of leaves in a LightGBM tree. Higher values create more complex models with potential for overfitting."),
            _ => None,
        }
    }

    pub fn common_values(&self) -> Option<&'static str> {
        match self.key {
            "learning_rate" => Some("For XGBoost/LightGBM: 0.01-0.3, default 0.1. Lower for more trees, higher for fewer trees."),
            "max_depth" | "depth" => Some("XGBoost typically uses 3-10 with default 6. CatBoost 6-10 with default 6. LightGBM often uses -1 (unlimited) with num_leaves constraining complexity."),
            "n_estimators" | "iterations" => Some("Range from 50-1000+, with 100 being a common starting point. Final value depends on learning rate and early stopping."),
            "subsample" | "bagging_fraction" => Some("Common range is 0.5-1.0, with 0.8 being a popular choice for preventing overfitting while maintaining accuracy."),
            _ => None,
        }
    }
}

fn decimals_for_step(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else if step >= 0.001 {
        3
    } else {
        4
    }
}

pub const XGBOOST_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        key: "learning_rate",
        label: "Learning Rate",
        description: "Step size shrinkage used to prevent overfitting. Range: [0,1]",
        default: 0.1,
        min: 0.01,
        max: 0.3,
        step: 0.01,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "max_depth",
        label: "Max Depth",
        description: "Maximum depth of a tree. Higher value causes more complex model.",
        default: 6.0,
        min: 1.0,
        max: 15.0,
        step: 1.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "n_estimators",
        label: "Number of Trees",
        description: "Number of boosting rounds (trees) to perform.",
        default: 100.0,
        min: 10.0,
        max: 1000.0,
        step: 10.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "subsample",
        label: "Subsample Ratio",
        description: "Fraction of samples used for fitting the trees. Range: (0,1]",
        default: 1.0,
        min: 0.1,
        max: 1.0,
        step: 0.05,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "colsample_bytree",
        label: "Column Sample by Tree",
        description: "Fraction of features used for fitting each tree. Range: (0,1]",
        default: 1.0,
        min: 0.1,
        max: 1.0,
        step: 0.05,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "gamma",
        label: "Gamma (Min Split Loss)",
        description: "Minimum loss reduction required to make a further partition.",
        default: 0.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "alpha",
        label: "L1 Regularization",
        description: "L1 regularization term on weights (lasso).",
        default: 0.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "lambda",
        label: "L2 Regularization",
        description: "L2 regularization term on weights (ridge).",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "min_child_weight",
        label: "Min Child Weight",
        description: "Minimum sum of instance weight needed in a child.",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 1.0,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "scale_pos_weight",
        label: "Scale Pos Weight",
        description: "Controls balance of positive and negative weights (for imbalanced classes).",
        default: 1.0,
        min: 1.0,
        max: 100.0,
        step: 1.0,
        category: ParamCategory::Advanced,
    },
];

pub const LIGHTGBM_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        key: "learning_rate",
        label: "Learning Rate",
        description: "Shrinkage rate to prevent overfitting. Range: [0,1]",
        default: 0.1,
        min: 0.01,
        max: 0.3,
        step: 0.01,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "num_leaves",
        label: "Number of Leaves",
        description: "Maximum number of leaves in one tree. Controls model complexity.",
        default: 31.0,
        min: 2.0,
        max: 256.0,
        step: 1.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "n_estimators",
        label: "Number of Trees",
        description: "Number of boosting rounds (trees) to perform.",
        default: 100.0,
        min: 10.0,
        max: 1000.0,
        step: 10.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "max_depth",
        label: "Max Depth",
        description: "Maximum tree depth. -1 means no limit.",
        default: -1.0,
        min: -1.0,
        max: 15.0,
        step: 1.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "min_data_in_leaf",
        label: "Min Data in Leaf",
        description: "Minimum number of data in one leaf. Helps prevent overfitting.",
        default: 20.0,
        min: 1.0,
        max: 100.0,
        step: 1.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "feature_fraction",
        label: "Feature Fraction",
        description: "Fraction of features to use in each iteration. Range: (0,1]",
        default: 0.8,
        min: 0.1,
        max: 1.0,
        step: 0.05,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "bagging_fraction",
        label: "Bagging Fraction",
        description: "Fraction of data to use for each iteration. Range: (0,1]",
        default: 0.8,
        min: 0.1,
        max: 1.0,
        step: 0.05,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "lambda_l1",
        label: "L1 Regularization",
        description: "L1 regularization.",
        default: 0.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "lambda_l2",
        label: "L2 Regularization",
        description: "L2 regularization.",
        default: 0.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "min_gain_to_split",
        label: "Min Gain to Split",
        description: "Minimum gain to perform splitting.",
        default: 0.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
];

pub const CATBOOST_PARAMS: &[ParamSpec] = &[
    ParamSpec {
        key: "learning_rate",
        label: "Learning Rate",
        description: "Step size for gradient descent. Range: [0,1]",
        default: 0.1,
        min: 0.01,
        max: 0.3,
        step: 0.01,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "depth",
        label: "Depth",
        description: "Depth of trees. Deeper trees can model more complex relationships.",
        default: 6.0,
        min: 1.0,
        max: 16.0,
        step: 1.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "iterations",
        label: "Iterations",
        description: "Maximum number of trees to build.",
        default: 100.0,
        min: 10.0,
        max: 1000.0,
        step: 10.0,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "l2_leaf_reg",
        label: "L2 Leaf Regularization",
        description: "L2 regularization coefficient. Higher values mean more regularization.",
        default: 3.0,
        min: 1.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Basic,
    },
    ParamSpec {
        key: "random_strength",
        label: "Random Strength",
        description: "Amount of randomness to use for scoring splits. Helps prevent overfitting.",
        default: 1.0,
        min: 0.1,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "bagging_temperature",
        label: "Bagging Temperature",
        description: "Controls intensity of Bayesian bagging. 0 means no bagging.",
        default: 1.0,
        min: 0.0,
        max: 10.0,
        step: 0.1,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "min_data_in_leaf",
        label: "Min Data in Leaf",
        description: "Minimum number of training samples in a leaf.",
        default: 1.0,
        min: 1.0,
        max: 50.0,
        step: 1.0,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "rsm",
        label: "RSM (Col Sample Rate)",
        description: "Random subspace method rate, fraction of features to use at each split.",
        default: 1.0,
        min: 0.1,
        max: 1.0,
        step: 0.05,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "leaf_estimation_iterations",
        label: "Leaf Estimation Iterations",
        description: "Number of gradient steps when calculating leaf values.",
        default: 1.0,
        min: 1.0,
        max: 10.0,
        step: 1.0,
        category: ParamCategory::Advanced,
    },
    ParamSpec {
        key: "border_count",
        label: "Border Count",
        description: "Number of splits for numerical features.",
        default: 254.0,
        min: 1.0,
        max: 255.0,
        step: 1.0,
        category: ParamCategory::Advanced,
    },
];
