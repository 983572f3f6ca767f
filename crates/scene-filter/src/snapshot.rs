//! Whole-catalog visibility results.

/// Visibility of every scene in a catalog, by catalog index.
///
/// Produced complete by a filter pass and swapped into a
/// [`SceneDateFilter`](crate::SceneDateFilter) in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilitySnapshot {
    visible: Vec<bool>,
    failures: usize,
    label: String,
}

impl VisibilitySnapshot {
    pub fn new(visible: Vec<bool>, failures: usize, label: impl Into<String>) -> Self {
        Self {
            visible,
            failures,
            label: label.into(),
        }
    }

    /// Every scene shown.
    pub fn all_visible(len: usize) -> Self {
        Self::new(vec![true; len], 0, "all scenes")
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// Scenes hidden because their predicate failed.
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Description of the predicate that produced this snapshot.
    pub fn label(&self) -> &str {
        &self.label
    }
}
