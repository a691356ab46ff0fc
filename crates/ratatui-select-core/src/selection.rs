//! Selection state for single- and multi-select dropdowns.
//!
//! The mode is chosen once, when the state is created, and the variant never changes after that:
//! a single-select state can never grow a second entry, and a multi-select state is an
//! insertion-ordered set.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Single(Option<String>),
    /// Labels in the order they were first selected, without duplicates.
    Multi(Vec<String>),
}

impl SelectionState {
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multi => Self::Multi(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(s) => usize::from(s.is_some()),
            Self::Multi(items) => items.len(),
        }
    }

    /// Membership in multi mode, equality in single mode.
    pub fn contains(&self, label: &str) -> bool {
        match self {
            Self::Single(s) => s.as_deref() == Some(label),
            Self::Multi(items) => items.iter().any(|i| i == label),
        }
    }

    /// Selected labels in display order.
    pub fn labels(&self) -> &[String] {
        match self {
            Self::Single(s) => s.as_slice(),
            Self::Multi(items) => items,
        }
    }

    pub fn single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => s.as_deref(),
            Self::Multi(_) => None,
        }
    }

    /// Replaces the selection (single) or appends `label` if absent (multi).
    ///
    /// Returns `true` if the state changed.
    pub fn select(&mut self, label: &str) -> bool {
        match self {
            Self::Single(s) => {
                if s.as_deref() == Some(label) {
                    return false;
                }
                *s = Some(label.to_string());
                true
            }
            Self::Multi(items) => {
                if items.iter().any(|i| i == label) {
                    return false;
                }
                items.push(label.to_string());
                true
            }
        }
    }

    /// Removes `label` (multi), or clears the sole selection whatever `label` is (single).
    ///
    /// Returns `true` if the state changed.
    pub fn remove(&mut self, label: &str) -> bool {
        match self {
            Self::Single(s) => s.take().is_some(),
            Self::Multi(items) => {
                let before = items.len();
                items.retain(|i| i != label);
                items.len() != before
            }
        }
    }

    /// Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        match self {
            Self::Single(s) => s.take().is_some(),
            Self::Multi(items) => {
                let changed = !items.is_empty();
                items.clear();
                changed
            }
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}
