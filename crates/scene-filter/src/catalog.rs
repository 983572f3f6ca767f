//! Dated scenes grouped by grid cell.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use scene_common::GridCell;

/// One acquisition as reported by the scene catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDateEntry {
    pub id: String,
    pub cell: GridCell,
    pub date: NaiveDate,
    /// Percent cloud cover, when the catalog knows it
    #[serde(default)]
    pub cloud_cover: Option<u8>,
}

impl SceneDateEntry {
    pub fn new(id: impl Into<String>, cell: GridCell, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            cell,
            date,
            cloud_cover: None,
        }
    }

    pub fn with_cloud_cover(mut self, percent: u8) -> Self {
        self.cloud_cover = Some(percent);
        self
    }
}

/// Immutable scene collection indexed by cell.
///
/// Scenes are addressed by their position in [`SceneCatalog::scenes`]. Each
/// cell's index list is in chronological order; same-day scenes keep their
/// input order.
#[derive(Debug, Clone, Default)]
pub struct SceneCatalog {
    scenes: Vec<SceneDateEntry>,
    by_cell: BTreeMap<GridCell, Vec<usize>>,
}

impl SceneCatalog {
    pub fn new(scenes: Vec<SceneDateEntry>) -> Self {
        let mut by_cell: BTreeMap<GridCell, Vec<usize>> = BTreeMap::new();
        for (index, scene) in scenes.iter().enumerate() {
            by_cell.entry(scene.cell).or_default().push(index);
        }
        for indices in by_cell.values_mut() {
            indices.sort_by_key(|&i| scenes[i].date);
        }
        Self { scenes, by_cell }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scenes(&self) -> &[SceneDateEntry] {
        &self.scenes
    }

    pub fn get(&self, index: usize) -> Option<&SceneDateEntry> {
        self.scenes.get(index)
    }

    /// Catalog indices of a cell's scenes, oldest first.
    pub fn cell_indices(&self, cell: GridCell) -> &[usize] {
        self.by_cell.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cells with at least one scene.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.by_cell.keys().copied()
    }

    pub fn find(&self, id: &str) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.id == id)
    }

    /// Earliest and latest acquisition years of a cell, filtered or not.
    pub fn year_range(&self, cell: GridCell) -> Option<(i32, i32)> {
        let indices = self.cell_indices(cell);
        let first = self.scenes[*indices.first()?].date.year();
        let last = self.scenes[*indices.last()?].date.year();
        Some((first, last))
    }
}

impl FromIterator<SceneDateEntry> for SceneCatalog {
    fn from_iter<T: IntoIterator<Item = SceneDateEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
