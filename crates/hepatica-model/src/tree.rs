//! CART-style decision tree for binary classification.
//!
//! Trees are grown greedily on Gini impurity. Nodes live in a flat arena
//! with index links; the root is node 0. Split thresholds are midpoints
//! between adjacent distinct feature values, and rows with
//! `value <= threshold` go left.

use ndarray::ArrayView2;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Stopping and sampling parameters shared by every tree in a forest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TreeParams {
    /// Maximum tree depth; `None` grows until nodes are pure or too small.
    pub(crate) max_depth: Option<usize>,
    /// Minimum rows required to attempt a split.
    pub(crate) min_samples_split: usize,
    /// Number of candidate features drawn per node.
    pub(crate) candidate_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
    Leaf {
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A single fitted classification tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Grow a tree on the given rows of `x`/`y`.
    ///
    /// `importances` accumulates the impurity decrease of every split,
    /// weighted by the fraction of `n_total` rows reaching the node.
    pub(crate) fn fit(
        x: ArrayView2<'_, f64>,
        y: &[u8],
        rows: Vec<usize>,
        params: &TreeParams,
        rng: &mut StdRng,
        importances: &mut [f64],
        n_total: usize,
    ) -> Self {
        let mut nodes = Vec::new();
        build(
            &mut nodes,
            x,
            y,
            rows,
            0,
            params,
            rng,
            importances,
            n_total as f64,
        );
        Self { nodes }
    }

    /// Number of nodes in the tree.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Positive-class probability for one row of raw feature values.
    pub(crate) fn predict_row(&self, features: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { probability } => return probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

/// Binary Gini impurity from a positive count and a total.
fn gini(positives: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let p = positives / total;
    2.0 * p * (1.0 - p)
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    gain: f64,
}

#[allow(clippy::too_many_arguments)]
fn build(
    nodes: &mut Vec<Node>,
    x: ArrayView2<'_, f64>,
    y: &[u8],
    rows: Vec<usize>,
    depth: usize,
    params: &TreeParams,
    rng: &mut StdRng,
    importances: &mut [f64],
    n_total: f64,
) -> usize {
    let n = rows.len();
    let positives = rows.iter().filter(|&&i| y[i] == 1).count();
    let probability = positives as f64 / n as f64;

    let at_depth_limit = params.max_depth.is_some_and(|limit| depth >= limit);
    let is_pure = positives == 0 || positives == n;
    if is_pure || n < params.min_samples_split || at_depth_limit {
        nodes.push(Node::Leaf { probability });
        return nodes.len() - 1;
    }

    let best = match find_best_split(x, y, &rows, positives, params, rng) {
        Some(best) => best,
        None => {
            nodes.push(Node::Leaf { probability });
            return nodes.len() - 1;
        }
    };

    importances[best.feature] += (n as f64 / n_total) * best.gain;

    let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
        .into_iter()
        .partition(|&i| x[[i, best.feature]] <= best.threshold);

    // Reserve the split slot before recursing so the root stays at index 0.
    nodes.push(Node::Leaf { probability });
    let index = nodes.len() - 1;

    let left = build(
        nodes, x, y, left_rows, depth + 1, params, rng, importances, n_total,
    );
    let right = build(
        nodes, x, y, right_rows, depth + 1, params, rng, importances, n_total,
    );

    nodes[index] = Node::Split {
        feature: best.feature,
        threshold: best.threshold,
        left,
        right,
    };
    index
}

fn find_best_split(
    x: ArrayView2<'_, f64>,
    y: &[u8],
    rows: &[usize],
    positives: usize,
    params: &TreeParams,
    rng: &mut StdRng,
) -> Option<BestSplit> {
    let n = rows.len();
    let n_features = x.ncols();
    let parent_gini = gini(positives as f64, n as f64);

    // Partial Fisher-Yates draw of candidate features without replacement.
    let k = params.candidate_features.clamp(1, n_features);
    let mut feature_indices: Vec<usize> = (0..n_features).collect();
    for i in 0..k {
        let j = rng.gen_range(i..n_features);
        feature_indices.swap(i, j);
    }

    let mut best: Option<BestSplit> = None;
    let mut values: Vec<(f64, u8)> = Vec::with_capacity(n);

    for &feature in &feature_indices[..k] {
        values.clear();
        values.extend(rows.iter().map(|&i| (x[[i, feature]], y[i])));
        values.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let total_pos = positives as f64;
        let mut left_n = 0.0;
        let mut left_pos = 0.0;

        for pair in 0..n - 1 {
            left_n += 1.0;
            left_pos += f64::from(values[pair].1);

            // No threshold fits between equal values.
            if values[pair].0 == values[pair + 1].0 {
                continue;
            }

            let right_n = n as f64 - left_n;
            let right_pos = total_pos - left_pos;
            let weighted =
                (left_n * gini(left_pos, left_n) + right_n * gini(right_pos, right_n)) / n as f64;
            let gain = parent_gini - weighted;

            if gain > best.as_ref().map_or(1e-12, |b| b.gain) {
                best = Some(BestSplit {
                    feature,
                    threshold: (values[pair].0 + values[pair + 1].0) / 2.0,
                    gain,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;

    fn params() -> TreeParams {
        TreeParams {
            max_depth: Some(4),
            min_samples_split: 2,
            candidate_features: 2,
        }
    }

    #[test]
    fn test_learns_threshold_rule() {
        // Label is 1 exactly when the first feature exceeds 5.
        let x = array![
            [1.0, 7.0],
            [2.0, 3.0],
            [3.0, 9.0],
            [4.0, 1.0],
            [6.0, 2.0],
            [7.0, 8.0],
            [8.0, 4.0],
            [9.0, 6.0],
        ];
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let mut importances = vec![0.0; 2];

        let tree = DecisionTree::fit(
            x.view(),
            &y,
            (0..8).collect(),
            &params(),
            &mut rng,
            &mut importances,
            8,
        );

        for (row, &label) in x.outer_iter().zip(&y) {
            let p = tree.predict_row(row.as_slice().unwrap());
            assert_eq!(p, f64::from(label), "row {row:?}");
        }
        assert!(importances[0] > importances[1]);
    }

    #[test]
    fn test_pure_node_is_single_leaf() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = vec![1, 1, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let mut importances = vec![0.0; 1];

        let tree = DecisionTree::fit(
            x.view(),
            &y,
            vec![0, 1, 2],
            &params(),
            &mut rng,
            &mut importances,
            3,
        );
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.predict_row(&[2.0]), 1.0);
    }

    #[test]
    fn test_depth_limit_respected() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = vec![0, 1, 0, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let mut importances = vec![0.0; 1];

        let shallow = TreeParams {
            max_depth: Some(0),
            min_samples_split: 2,
            candidate_features: 1,
        };
        let tree = DecisionTree::fit(
            x.view(),
            &y,
            vec![0, 1, 2, 3],
            &shallow,
            &mut rng,
            &mut importances,
            4,
        );
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.predict_row(&[1.0]), 0.5);
    }

    #[test]
    fn test_constant_feature_yields_leaf() {
        let x = array![[5.0], [5.0], [5.0], [5.0]];
        let y = vec![0, 1, 0, 1];
        let mut rng = StdRng::seed_from_u64(1);
        let mut importances = vec![0.0; 1];

        let tree = DecisionTree::fit(
            x.view(),
            &y,
            vec![0, 1, 2, 3],
            &params(),
            &mut rng,
            &mut importances,
            4,
        );
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.predict_row(&[5.0]), 0.5);
    }
}
