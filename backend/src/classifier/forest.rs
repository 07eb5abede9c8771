//! Random forest of flattened decision trees
//!
//! Each tree is stored as parallel node arrays. A node whose `children_left`
//! is `-1` is a leaf; otherwise samples with `x[feature] <= threshold` go
//! left.

use serde::Deserialize;
use shared::FEATURE_COUNT;

use super::{validate_classes, ClassifierError};

const LEAF: i64 = -1;

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class counts or weights
    pub value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub classes: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl DecisionTree {
    fn validate(&self, n_classes: usize) -> Result<(), String> {
        let nodes = self.children_left.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != nodes
            || self.feature.len() != nodes
            || self.threshold.len() != nodes
            || self.value.len() != nodes
        {
            return Err("node arrays differ in length".to_string());
        }
        for node in 0..nodes {
            let left = self.children_left[node];
            let right = self.children_right[node];
            if left == LEAF {
                let row = &self.value[node];
                if row.len() != n_classes {
                    return Err(format!("leaf {} has {} values", node, row.len()));
                }
                if row.iter().any(|v| !(v.is_finite() && *v >= 0.0)) {
                    return Err(format!("leaf {} has negative or non-finite values", node));
                }
                if row.iter().sum::<f64>() <= 0.0 {
                    return Err(format!("leaf {} is empty", node));
                }
                continue;
            }
            // Children must point forward so traversal always terminates.
            let in_range = |child: i64| child > node as i64 && (child as usize) < nodes;
            if !in_range(left) || !in_range(right) {
                return Err(format!("node {} has out-of-range children", node));
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= FEATURE_COUNT {
                return Err(format!("node {} splits on unknown feature {}", node, feature));
            }
        }
        Ok(())
    }

    fn leaf_for(&self, x: &[f64; FEATURE_COUNT]) -> usize {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let feature = self.feature[node] as usize;
            node = if x[feature] <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        node
    }

    fn predict_proba(&self, x: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let row = &self.value[self.leaf_for(x)];
        let total: f64 = row.iter().sum();
        row.iter().map(|v| v / total).collect()
    }
}

impl RandomForest {
    pub(super) fn validate(&self) -> Result<(), ClassifierError> {
        validate_classes(&self.classes)?;
        if self.trees.is_empty() {
            return Err(ClassifierError::InvalidArtifact(
                "forest has no trees".to_string(),
            ));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.classes.len())
                .map_err(|e| ClassifierError::InvalidArtifact(format!("tree {}: {}", i, e)))?;
        }
        Ok(())
    }

    /// Mean of the per-tree leaf distributions
    pub(super) fn predict_proba(&self, x: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let mut acc = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (sum, p) in acc.iter_mut().zip(tree.predict_proba(x)) {
                *sum += p;
            }
        }
        let n = self.trees.len() as f64;
        acc.into_iter().map(|v| v / n).collect()
    }
}
