//! Tree values for the classifier: a position on the axis plus the labels seen there.
//!
//! Equality and ordering only look at the key and treat keys closer than [`KEY_TOLERANCE`] as
//! equal. This deliberately departs from exact float comparison so that a key computed by
//! rounding a sample finds the lattice key it rounds to even when the two differ in the last few
//! bits. Strict ordering requires the keys to be outside the tolerance as well, so `<` and `==`
//! never both hold.
//!
//! The tolerance makes equality non-transitive for keys spaced closer than the tolerance, so keys
//! stored in one tree should be spaced further apart than that. The classifier's lattice always
//! is.

use std::cmp::Ordering;
use std::fmt;

/// Keys closer than this compare equal.
pub const KEY_TOLERANCE: f64 = 1e-6;

/// Label occurrence counts, kept in the order labels were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelCounts {
    entries: Vec<(String, u64)>,
}

impl LabelCounts {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `label`, appending the label if it is new.
    pub fn add(&mut self, label: &str, count: u64) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, c)) => *c += count,
            None => self.entries.push((label.to_owned(), count)),
        }
    }

    /// Records one more occurrence of `label`.
    pub fn record(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// The count for `label`, `0` when never seen.
    pub fn get(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, c)| *c)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no label has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// The label with the highest count. Ties go to the label seen first.
    pub fn most_common(&self) -> Option<(&str, u64)> {
        self.iter().fold(None, |best, (label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
    }
}

impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", label, count)?;
        }
        f.write_str("}")
    }
}

/// A fixed `f64` key plus the label counts gathered at that key.
///
/// The key is fixed at construction. The counts are mutated in place while training.
#[derive(Clone, Debug)]
pub struct WrappedDictionary {
    key: f64,
    counts: LabelCounts,
}

impl WrappedDictionary {
    /// Creates an entry at `key` with no labels. `key` should be finite: a NaN key compares
    /// greater than everything and equal to nothing.
    pub fn new(key: f64) -> Self {
        Self {
            key,
            counts: LabelCounts::new(),
        }
    }

    /// The position on the axis.
    pub fn key(&self) -> f64 {
        self.key
    }

    /// The labels seen at this key.
    pub fn counts(&self) -> &LabelCounts {
        &self.counts
    }

    pub(crate) fn counts_mut(&mut self) -> &mut LabelCounts {
        &mut self.counts
    }

    /// Whether `key` is within the tolerance of `other`.
    pub fn key_matches(&self, other: f64) -> bool {
        (self.key - other).abs() < KEY_TOLERANCE
    }
}

impl PartialEq for WrappedDictionary {
    fn eq(&self, other: &Self) -> bool {
        self.key_matches(other.key)
    }
}

impl Eq for WrappedDictionary {}

impl PartialOrd for WrappedDictionary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WrappedDictionary {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.key < other.key {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl fmt::Display for WrappedDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key: {} dict:{}", self.key, self.counts)
    }
}
