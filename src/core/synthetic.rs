//! Synthetic chart data for the boosting walkthrough.
//!
//! Everything here is a function of `(inputs, seed, step)`. Charts that look
//! "random" draw from a [`Prng`] seeded by the caller so a redraw at the same
//! step shows the same picture.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prng::Prng;
use crate::schema::ParamSpec;
use crate::settings::TreeView;

pub const FALLBACK_POINT_COUNT: usize = 250;
pub const HEATMAP_GRID: usize = 40;
pub const LOSS_ITERATIONS: u32 = 10;
pub const RESIDUAL_SAMPLES: usize = 300;
pub const RESIDUAL_BINS: usize = 30;
pub const IMPACT_SAMPLES: usize = 80;

/// Steps needed for the mock model to reach full confidence.
const PROGRESS_STEPS: f64 = 10.0;
const BOUNDARY_SHARPNESS: f64 = 6.0;
const IMPACT_CURVATURE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub target: f64,
}

/// Uniform points in the unit square labelled by the `x + y = 1` diagonal.
pub fn fallback_points(seed: u64, count: usize) -> Vec<DataPoint> {
    let mut rng = Prng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64();
            let y = rng.next_f64();
            let target = if x + y > 1.0 { 1.0 } else { 0.0 };
            DataPoint { x, y, target }
        })
        .collect()
}

/// `min(1, (step + 1) / 10)`.
pub fn step_progress(step: u32) -> f64 {
    ((step as f64 + 1.0) / PROGRESS_STEPS).min(1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Row-major, `z[row][col]` is the probability at `(xs[col], ys[row])`.
    pub z: Vec<Vec<f64>>,
}

/// Class-1 probability over the unit square, sharpening as the ensemble grows.
pub fn decision_heatmap(step: u32, grid: usize) -> Heatmap {
    let progress = step_progress(step);
    let axis: Vec<f64> = if grid <= 1 {
        vec![0.0; grid]
    } else {
        (0..grid).map(|i| i as f64 / (grid - 1) as f64).collect()
    };
    let z = axis
        .iter()
        .map(|&y| {
            axis.iter()
                .map(|&x| sigmoid(BOUNDARY_SHARPNESS * (x + y - 1.0) * progress))
                .collect()
        })
        .collect();
    Heatmap {
        xs: axis.clone(),
        ys: axis,
        z,
    }
}

fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub actual: f64,
    pub predicted: f64,
    pub residual: f64,
}

/// Mock per-point predictions: each point is right with probability
/// `0.5 + 0.5 * progress`.
pub fn predictions(points: &[DataPoint], step: u32, seed: u64) -> Vec<Prediction> {
    let p_correct = 0.5 + 0.5 * step_progress(step);
    let mut rng = Prng::new(seed ^ u64::from(step).rotate_left(32));
    points
        .iter()
        .map(|p| {
            let predicted = if rng.gen_bool(p_correct) {
                p.target
            } else {
                1.0 - p.target
            };
            Prediction {
                actual: p.target,
                predicted,
                residual: p.target - predicted,
            }
        })
        .collect()
}

pub fn prediction_accuracy(preds: &[Prediction]) -> f64 {
    if preds.is_empty() {
        return 0.0;
    }
    let correct = preds.iter().filter(|p| p.residual == 0.0).count();
    correct as f64 / preds.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossPoint {
    /// One-based boosting iteration.
    pub iteration: u32,
    pub loss: f64,
    /// Already built at the current step.
    pub reached: bool,
}

/// `1 / (s + 1)` over the fixed iteration window.
pub fn loss_curve(step: u32) -> Vec<LossPoint> {
    (0..LOSS_ITERATIONS)
        .map(|s| LossPoint {
            iteration: s + 1,
            loss: 1.0 / (s as f64 + 1.0),
            reached: s <= step,
        })
        .collect()
}

/// Spread of residuals at `step`: shrinks to 10% of the initial width.
pub fn residual_scale(step: u32) -> f64 {
    1.0 - (step as f64 / PROGRESS_STEPS).min(0.9)
}

pub fn residual_samples(step: u32, count: usize, seed: u64) -> Vec<f64> {
    let scale = residual_scale(step);
    let mut rng = Prng::new(seed ^ u64::from(step).rotate_left(16));
    (0..count)
        .map(|_| (rng.next_f64() - 0.5) * 2.0 * scale)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<u32>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        if self.counts.is_empty() {
            0.0
        } else {
            (self.hi - self.lo) / self.counts.len() as f64
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Equal-width bins over `[lo, hi]`; values outside are dropped, `hi` lands in
/// the last bin.
pub fn histogram(values: &[f64], lo: f64, hi: f64, bins: usize) -> Histogram {
    let mut counts = vec![0u32; bins];
    if bins > 0 && hi > lo {
        let width = (hi - lo) / bins as f64;
        for &v in values {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
    }
    Histogram { lo, hi, counts }
}

pub fn residual_histogram(step: u32, seed: u64) -> Histogram {
    let samples = residual_samples(step, RESIDUAL_SAMPLES, seed);
    let scale = residual_scale(step);
    histogram(&samples, -scale, scale, RESIDUAL_BINS)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactCurve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl ImpactCurve {
    /// Estimated performance at `x`, read off the same bowl.
    pub fn at(min: f64, max: f64, x: f64) -> f64 {
        if max <= min {
            return 1.0;
        }
        let mid = (min + max) / 2.0;
        let norm = (x - mid) / (max - min);
        (1.0 - IMPACT_CURVATURE * norm * norm).clamp(0.0, 1.0)
    }
}

/// Quadratic bowl peaking mid-range: how one parameter "affects" performance.
pub fn impact_curve(spec: &ParamSpec, samples: usize) -> ImpactCurve {
    let (min, max) = (spec.min, spec.max);
    let xs: Vec<f64> = match samples {
        0 => Vec::new(),
        1 => vec![min],
        n => {
            let step = (max - min) / (n - 1) as f64;
            (0..n).map(|i| min + i as f64 * step).collect()
        }
    };
    let ys = xs.iter().map(|&x| ImpactCurve::at(min, max, x)).collect();
    ImpactCurve { xs, ys }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TreeNodeKind {
    Root,
    Split,
    Leaf,
}

/// One node of the mock tree. `metric` is split gain for splits, the leaf
/// value for leaves and zero at the root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TreeNode {
    pub id: &'static str,
    pub label: String,
    pub parent: Option<&'static str>,
    pub samples: u32,
    pub kind: TreeNodeKind,
    pub metric: f64,
}

impl TreeNode {
    /// Text shown on the node under the given tree-view toggles.
    pub fn caption(&self, view: &TreeView) -> String {
        match self.kind {
            TreeNodeKind::Root => self.label.clone(),
            TreeNodeKind::Split if view.show_split_info => {
                format!("Split: {} (gain {:.2})", self.label, self.metric)
            }
            TreeNodeKind::Split => format!("Split: {}", self.label),
            TreeNodeKind::Leaf if view.show_values => self.label.clone(),
            TreeNodeKind::Leaf => "leaf".to_string(),
        }
    }
}

const TREE_SPLITS: [(&str, &str, f64); 2] = [
    ("n1", "feature1 < 0.5", 0.35),
    ("n2", "feature2 < 0.3", 0.28),
];
const TREE_LEAVES: [(&str, &str, f64); 4] = [
    ("l1", "n1", -0.2),
    ("l2", "n1", 0.4),
    ("l3", "n2", -0.1),
    ("l4", "n2", 0.6),
];

/// Depth-2 stand-in for the tree built at `step`: a root, two splits and four
/// single-sample leaves. Sample counts add up from the leaves.
pub fn mock_tree(step: u32) -> Vec<TreeNode> {
    let leaf_samples = |split: &str| {
        TREE_LEAVES.iter().filter(|(_, parent, _)| *parent == split).count() as u32
    };

    let mut nodes = Vec::with_capacity(1 + TREE_SPLITS.len() + TREE_LEAVES.len());
    nodes.push(TreeNode {
        id: "root",
        label: format!("Tree {}", u64::from(step) + 1),
        parent: None,
        samples: TREE_LEAVES.len() as u32,
        kind: TreeNodeKind::Root,
        metric: 0.0,
    });
    nodes.extend(TREE_SPLITS.iter().map(|&(id, rule, gain)| TreeNode {
        id,
        label: rule.to_string(),
        parent: Some("root"),
        samples: leaf_samples(id),
        kind: TreeNodeKind::Split,
        metric: gain,
    }));
    nodes.extend(TREE_LEAVES.iter().map(|&(id, parent, value)| TreeNode {
        id,
        label: format!("leaf {value}"),
        parent: Some(parent),
        samples: 1,
        kind: TreeNodeKind::Leaf,
        metric: value,
    }));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Algorithm;

    #[test]
    fn fallback_points_follow_the_diagonal_rule() {
        let pts = fallback_points(11, FALLBACK_POINT_COUNT);
        assert_eq!(pts.len(), 250);
        for p in &pts {
            assert!((0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y));
            assert_eq!(p.target, if p.x + p.y > 1.0 { 1.0 } else { 0.0 });
        }
        assert_eq!(pts, fallback_points(11, FALLBACK_POINT_COUNT));
        assert_ne!(pts, fallback_points(12, FALLBACK_POINT_COUNT));
    }

    #[test]
    fn progress_saturates_after_ten_steps() {
        assert_eq!(step_progress(0), 0.1);
        assert_eq!(step_progress(9), 1.0);
        assert_eq!(step_progress(40), 1.0);
    }

    #[test]
    fn heatmap_sharpens_with_steps() {
        let early = decision_heatmap(0, HEATMAP_GRID);
        let late = decision_heatmap(9, HEATMAP_GRID);
        assert_eq!(early.z.len(), HEATMAP_GRID);
        assert_eq!(early.z[0].len(), HEATMAP_GRID);

        // Corner (1, 1) is deep in class 1.
        let corner = HEATMAP_GRID - 1;
        assert!(late.z[corner][corner] > early.z[corner][corner]);
        assert!(late.z[0][0] < early.z[0][0]);
        // On the diagonal the model is always undecided.
        assert!((late.z[0][corner] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn predictions_become_perfect_once_fully_built() {
        let pts = fallback_points(5, 200);
        let preds = predictions(&pts, 9, 77);
        assert_eq!(prediction_accuracy(&preds), 1.0);
        assert!(preds.iter().all(|p| p.residual == 0.0));

        let early = predictions(&pts, 0, 77);
        assert!(prediction_accuracy(&early) < 1.0);
        assert_eq!(early, predictions(&pts, 0, 77));
    }

    #[test]
    fn residuals_are_target_minus_prediction() {
        let pts = fallback_points(8, 50);
        for p in predictions(&pts, 2, 1) {
            assert_eq!(p.residual, p.actual - p.predicted);
            assert!(p.residual == 0.0 || p.residual.abs() == 1.0);
        }
    }

    #[test]
    fn loss_curve_marks_reached_iterations() {
        let curve = loss_curve(3);
        assert_eq!(curve.len(), 10);
        assert_eq!(curve[0].loss, 1.0);
        assert_eq!(curve[1].loss, 0.5);
        assert_eq!(curve.iter().filter(|p| p.reached).count(), 4);
        assert!(curve.windows(2).all(|w| w[0].loss > w[1].loss));
    }

    #[test]
    fn residual_histogram_narrows_and_keeps_every_sample() {
        let h0 = residual_histogram(0, 3);
        let h9 = residual_histogram(9, 3);
        assert_eq!(h0.counts.len(), RESIDUAL_BINS);
        assert_eq!(h0.total() as usize, RESIDUAL_SAMPLES);
        assert_eq!(h9.total() as usize, RESIDUAL_SAMPLES);
        assert!(h9.bin_width() < h0.bin_width());
        assert!((residual_scale(20) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn histogram_drops_out_of_range_values() {
        let h = histogram(&[-2.0, -1.0, 0.0, 0.99, 1.0, 3.0], -1.0, 1.0, 4);
        assert_eq!(h.counts, vec![1, 0, 1, 2]);
    }

    #[test]
    fn mock_tree_is_a_depth_two_binary_tree() {
        let tree = mock_tree(4);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree[0].label, "Tree 5");
        assert_eq!(tree[0].parent, None);

        for node in &tree[1..] {
            let parent = node.parent.unwrap();
            let parent = tree.iter().find(|n| n.id == parent).unwrap();
            let children: Vec<&TreeNode> =
                tree.iter().filter(|n| n.parent == Some(node.id)).collect();
            match node.kind {
                TreeNodeKind::Split => {
                    assert_eq!(parent.kind, TreeNodeKind::Root);
                    assert_eq!(children.len(), 2);
                    assert_eq!(node.samples, children.iter().map(|c| c.samples).sum::<u32>());
                    assert!(node.metric > 0.0);
                }
                TreeNodeKind::Leaf => {
                    assert_eq!(parent.kind, TreeNodeKind::Split);
                    assert!(children.is_empty());
                }
                TreeNodeKind::Root => panic!("second root {}", node.id),
            }
        }
        assert_eq!(tree[0].samples, 4);

        let leaves: Vec<f64> = tree
            .iter()
            .filter(|n| n.kind == TreeNodeKind::Leaf)
            .map(|n| n.metric)
            .collect();
        assert_eq!(leaves, vec![-0.2, 0.4, -0.1, 0.6]);
        assert_eq!(tree[3].label, "leaf -0.2");
    }

    #[test]
    fn tree_captions_follow_view_toggles() {
        let tree = mock_tree(0);
        let mut view = TreeView::default();
        assert_eq!(tree[1].caption(&view), "Split: feature1 < 0.5 (gain 0.35)");
        assert_eq!(tree[4].caption(&view), "leaf 0.4");

        view.show_split_info = false;
        view.show_values = false;
        assert_eq!(tree[1].caption(&view), "Split: feature1 < 0.5");
        assert_eq!(tree[4].caption(&view), "leaf");
        assert_eq!(tree[0].caption(&view), "Tree 1");
    }

    #[test]
    fn impact_curve_peaks_mid_range() {
        let spec = Algorithm::XGBoost.spec("max_depth").unwrap();
        let curve = impact_curve(spec, IMPACT_SAMPLES);
        assert_eq!(curve.xs.len(), 80);
        assert_eq!(curve.xs[0], spec.min);
        assert!((curve.xs[79] - spec.max).abs() < 1e-9);

        let peak = curve.ys.iter().cloned().fold(f64::MIN, f64::max);
        assert!((peak - ImpactCurve::at(spec.min, spec.max, 8.0)).abs() < 1e-3);
        assert!((curve.ys[0] - 0.8).abs() < 1e-9);
        assert!(curve.ys.iter().all(|y| (0.0..=1.0).contains(y)));
    }
}
