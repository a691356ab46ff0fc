//! The fixed, ordered set of labels one dropdown offers.

use std::sync::Arc;

/// An ordered, immutable sequence of option labels.
///
/// Labels double as identity keys: selection membership and row rendering compare labels, so a
/// set containing the same label twice renders both rows identically and selecting either one
/// selects "both". The set does not deduplicate on construction.
///
/// Cloning is cheap; clones share the same storage, which is how several widgets can be built
/// from one host-provided list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionSet {
    labels: Arc<[String]>,
}

impl OptionSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Index of the first option equal to `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

impl<S: Into<String>> FromIterator<S> for OptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
