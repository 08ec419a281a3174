//! A one-dimensional nearest-neighbor classifier backed by an [`AvlTree`].
//!
//! The tree is filled up front with one [`WrappedDictionary`] per lattice key, `0` to `1` in
//! steps of `10^-resolution`. Training rounds each sample onto the lattice and bumps the label
//! count stored there. Prediction sums the counts of every key inside a window around the query
//! and picks the most common label.
//!
//! # Examples
//!
//! ```
//! use avl_nn::NearestNeighborClassifier;
//!
//! let mut nnc = NearestNeighborClassifier::new(1)?;
//! nnc.fit(&[(0.05, "a"), (0.06, "a"), (0.94, "b")])?;
//!
//! assert_eq!(nnc.predict(0.0, 0.1)?.as_deref(), Some("a"));
//! assert_eq!(nnc.predict(1.0, 0.1)?.as_deref(), Some("b"));
//! assert_eq!(nnc.predict(0.5, 0.05)?, None);
//! # Ok::<(), avl_nn::ClassifierError>(())
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::avl::AvlTree;
use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, Result};
use crate::tree::OrderedTree;
use crate::util;
use crate::wrapped::{LabelCounts, WrappedDictionary};

/// A nearest-neighbor classifier over samples in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct NearestNeighborClassifier {
    resolution: u32,
    tree: AvlTree<WrappedDictionary>,
}

impl NearestNeighborClassifier {
    /// Builds a classifier whose lattice has `10^resolution + 1` keys.
    pub fn new(resolution: u32) -> Result<Self> {
        Self::from_config(&ClassifierConfig::with_resolution(resolution))
    }

    /// Builds a classifier from a validated configuration.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let resolution = config.resolution;
        let steps = 10u64.pow(resolution);
        let scale = util::scale(resolution);

        let mut tree = AvlTree::new();
        for i in 0..=steps {
            tree.insert(WrappedDictionary::new(i as f64 / scale));
        }
        debug!(
            resolution,
            nodes = tree.len(),
            spacing = util::lattice_spacing(resolution),
            "built lattice"
        );

        Ok(Self { resolution, tree })
    }

    /// Number of decimal places samples are rounded to.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The underlying tree, one node per key.
    pub fn tree(&self) -> &AvlTree<WrappedDictionary> {
        &self.tree
    }

    /// Trains on `(x, label)` samples.
    ///
    /// Each `x` is rounded to the resolution and its label counted at the matching lattice key.
    /// A sample that rounds outside `[0, 1]` gets a key of its own.
    ///
    /// Fails without training on anything if any `x` is not finite or too large to round.
    pub fn fit<S>(&mut self, data: &[(f64, S)]) -> Result<()>
    where
        S: AsRef<str>,
    {
        let keys = data
            .iter()
            .map(|(x, _)| self.rounded(*x))
            .collect::<Result<Vec<_>>>()?;

        let mut outside = 0;
        for ((x, label), key) in data.iter().zip(keys) {
            let target = WrappedDictionary::new(key);
            let hit = self
                .tree
                .search(&target)
                .filter(|node| *node.value() == target)
                .map(|node| node.id());

            match hit.and_then(|id| self.tree.value_mut(id)) {
                Some(entry) => entry.counts_mut().record(label.as_ref()),
                None => {
                    warn!(x = *x, key = target.key(), "sample outside the lattice");
                    outside += 1;
                    let mut entry = target;
                    entry.counts_mut().record(label.as_ref());
                    self.tree.insert(entry);
                }
            }
        }
        debug!(samples = data.len(), outside, "fit");
        Ok(())
    }

    /// Predicts the label for `x` by majority vote over every key within `delta` of it (both
    /// window ends rounded to the resolution, inclusive).
    ///
    /// Returns `None` when no training sample falls inside the window. Ties go to the label met
    /// first when walking keys in ascending order.
    pub fn predict(&self, x: f64, delta: f64) -> Result<Option<String>> {
        for value in [x, delta] {
            if !value.is_finite() {
                return Err(ClassifierError::NonFinite { value });
            }
        }
        if delta < 0.0 {
            return Err(ClassifierError::NegativeDelta { delta });
        }

        let lower = self.rounded(x - delta)?;
        let upper = self.rounded(x + delta)?;

        let mut totals = LabelCounts::new();
        let in_window = self
            .tree
            .in_order()
            .map(|node| node.value())
            .skip_while(|entry| entry.key() < lower && !entry.key_matches(lower))
            .take_while(|entry| entry.key() <= upper || entry.key_matches(upper));
        for entry in in_window {
            for (label, count) in entry.counts().iter() {
                totals.add(label, count);
            }
        }

        let prediction = totals.most_common().map(|(label, _)| label.to_owned());
        debug!(x, delta, lower, upper, prediction = ?prediction, "predict");
        Ok(prediction)
    }

    /// Rounds `x` onto the lattice, rejecting values that are or become non-finite.
    fn rounded(&self, x: f64) -> Result<f64> {
        let key = util::round_to(x, self.resolution);
        if key.is_finite() {
            Ok(key)
        } else {
            Err(ClassifierError::NonFinite { value: x })
        }
    }
}

impl fmt::Display for NearestNeighborClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NNC(resolution={}):", self.resolution)?;
        for node in self.tree.in_order() {
            let entry = node.value();
            if !entry.counts().is_empty() {
                write!(f, "\n  {}", entry)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_RESOLUTION;
    use crate::test::quick::assert_avl;

    #[test]
    fn lattice_covers_unit_interval() {
        for resolution in 0..=3 {
            let nnc = NearestNeighborClassifier::new(resolution).unwrap();
            let tree = nnc.tree();
            let steps = 10usize.pow(resolution);

            assert_eq!(tree.len(), steps + 1);
            assert_eq!(tree.min().map(|n| n.value().key()), Some(0.0));
            assert_eq!(tree.max().map(|n| n.value().key()), Some(1.0));
            assert_avl(tree);
        }
    }

    #[test]
    fn rejects_large_resolution() {
        assert_eq!(
            NearestNeighborClassifier::new(MAX_RESOLUTION + 1).unwrap_err(),
            ClassifierError::Resolution {
                resolution: MAX_RESOLUTION + 1,
                max: MAX_RESOLUTION
            }
        );
    }

    #[test]
    fn fit_counts_at_rounded_keys() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        nnc.fit(&[(0.05, "a"), (0.06, "a"), (0.14, "b"), (0.94, "b")])
            .unwrap();

        let at = |key: f64| {
            nnc.tree()
                .search(&WrappedDictionary::new(key))
                .map(|n| n.value().counts().clone())
                .unwrap()
        };
        assert_eq!(at(0.1).get("a"), 2);
        assert_eq!(at(0.1).get("b"), 1);
        assert_eq!(at(0.9).get("b"), 1);
        assert!(at(0.5).is_empty());
        assert_eq!(nnc.tree().len(), 11);
    }

    #[test]
    fn fit_outside_lattice_adds_a_key() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        nnc.fit(&[(1.26, "far"), (-0.3, "neg")]).unwrap();

        assert_eq!(nnc.tree().len(), 13);
        assert_eq!(nnc.tree().max().map(|n| n.value().key()), Some(1.3));
        assert_eq!(nnc.tree().min().map(|n| n.value().key()), Some(-0.3));
        // The neighbors the search landed next to were not touched.
        assert!(nnc
            .tree()
            .in_order()
            .filter(|n| n.value().key() >= 0.0 && n.value().key() <= 1.0)
            .all(|n| n.value().counts().is_empty()));
        assert_avl(nnc.tree());

        assert_eq!(nnc.predict(1.3, 0.0).unwrap().as_deref(), Some("far"));
    }

    #[test]
    fn predict_majority_in_window() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        nnc.fit(&[(0.05, "a"), (0.06, "a"), (0.94, "b")]).unwrap();

        assert_eq!(nnc.predict(0.0, 0.1).unwrap().as_deref(), Some("a"));
        assert_eq!(nnc.predict(1.0, 0.1).unwrap().as_deref(), Some("b"));
        assert_eq!(nnc.predict(0.5, 0.05).unwrap(), None);
        // The whole axis: "a" has two votes, "b" one.
        assert_eq!(nnc.predict(0.5, 0.5).unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn predict_ties_go_to_first_key() {
        let mut nnc = NearestNeighborClassifier::new(2).unwrap();
        nnc.fit(&[(0.70, "right"), (0.30, "left")]).unwrap();

        assert_eq!(nnc.predict(0.5, 0.2).unwrap().as_deref(), Some("left"));
        assert_eq!(nnc.predict(0.5, 0.19).unwrap(), None);
    }

    #[test]
    fn predict_on_untrained_classifier() {
        let nnc = NearestNeighborClassifier::new(2).unwrap();
        assert_eq!(nnc.predict(0.5, 1.0).unwrap(), None);
    }

    #[test]
    fn rejects_non_finite_input() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();

        assert!(matches!(
            nnc.fit(&[(0.1, "a"), (f64::NAN, "b")]),
            Err(ClassifierError::NonFinite { .. })
        ));
        // Nothing was trained.
        assert_eq!(nnc.predict(0.1, 0.0).unwrap(), None);

        assert_eq!(
            nnc.predict(f64::INFINITY, 0.1),
            Err(ClassifierError::NonFinite {
                value: f64::INFINITY
            })
        );
        assert_eq!(
            nnc.predict(0.5, -0.1),
            Err(ClassifierError::NegativeDelta { delta: -0.1 })
        );
    }

    #[test]
    fn fit_rounds_midpoints_by_decimal_value() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        nnc.fit(&[(0.25, "a"), (0.35, "b"), (0.15, "c")]).unwrap();

        assert_eq!(nnc.predict(0.2, 0.0).unwrap().as_deref(), Some("a"));
        assert_eq!(nnc.predict(0.3, 0.0).unwrap().as_deref(), Some("b"));
        assert_eq!(nnc.predict(0.1, 0.0).unwrap().as_deref(), Some("c"));
        assert_eq!(nnc.predict(0.4, 0.0).unwrap(), None);
        assert_eq!(nnc.tree().len(), 11);
    }

    #[test]
    fn predict_window_bounds_round_like_samples() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        nnc.fit(&[(0.2, "low"), (0.3, "high")]).unwrap();

        // Both window ends are exact halves and round down to the even digit: [0.2, 0.2].
        assert_eq!(nnc.predict(0.25, 0.0).unwrap().as_deref(), Some("low"));
        // 0.35 is stored just below the half and rounds to 0.3: [0.3, 0.3].
        assert_eq!(nnc.predict(0.35, 0.0).unwrap().as_deref(), Some("high"));
    }

    #[test]
    fn rejects_keys_that_overflow_when_scaled() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();

        assert_eq!(
            nnc.fit(&[(0.1, "a"), (1e308, "a"), (1e308, "a")]),
            Err(ClassifierError::NonFinite { value: 1e308 })
        );
        assert_eq!(nnc.tree().len(), 11);
        assert_eq!(nnc.predict(0.1, 0.0).unwrap(), None);

        assert_eq!(
            nnc.predict(1e308, 0.0),
            Err(ClassifierError::NonFinite { value: 1e308 })
        );
        assert!(matches!(
            nnc.predict(0.0, 1e308),
            Err(ClassifierError::NonFinite { .. })
        ));
    }

    #[test]
    fn display_lists_trained_keys() {
        let mut nnc = NearestNeighborClassifier::new(1).unwrap();
        assert_eq!(nnc.to_string(), "NNC(resolution=1):");

        nnc.fit(&[(0.2, "a"), (0.2, "b")]).unwrap();
        assert_eq!(
            nnc.to_string(),
            "NNC(resolution=1):\n  key: 0.2 dict:{\"a\": 1, \"b\": 1}"
        );
    }
}
