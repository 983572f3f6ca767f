//! Configuration-level selection of a navigation model.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::model::NavigationModel;
use crate::orbit::WrsSystem;
use crate::wrs_model::{AscendingWrsModel, DescendingWrsModel, WrsModel};

/// Navigation model named in a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationModelKind {
    Wrs1,
    Wrs2,
    Wrs1Descending,
    Wrs2Descending,
    Wrs2Ascending,
}

impl NavigationModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrs1 => "wrs1",
            Self::Wrs2 => "wrs2",
            Self::Wrs1Descending => "wrs1_descending",
            Self::Wrs2Descending => "wrs2_descending",
            Self::Wrs2Ascending => "wrs2_ascending",
        }
    }

    /// Instantiate the shared model.
    pub fn build(&self) -> Arc<dyn NavigationModel> {
        match self {
            Self::Wrs1 => Arc::new(WrsModel::new(WrsSystem::Wrs1)),
            Self::Wrs2 => Arc::new(WrsModel::new(WrsSystem::Wrs2)),
            Self::Wrs1Descending => Arc::new(DescendingWrsModel::new(WrsSystem::Wrs1)),
            Self::Wrs2Descending => Arc::new(DescendingWrsModel::new(WrsSystem::Wrs2)),
            Self::Wrs2Ascending => Arc::new(AscendingWrsModel::new(WrsSystem::Wrs2)),
        }
    }
}

impl fmt::Display for NavigationModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown navigation model: {0}")]
pub struct UnknownModelError(pub String);

impl FromStr for NavigationModelKind {
    type Err = UnknownModelError;

    /// Parse case-insensitively; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "wrs1" => Ok(Self::Wrs1),
            "wrs2" => Ok(Self::Wrs2),
            "wrs1_descending" => Ok(Self::Wrs1Descending),
            "wrs2_descending" => Ok(Self::Wrs2Descending),
            "wrs2_ascending" => Ok(Self::Wrs2Ascending),
            _ => Err(UnknownModelError(s.to_string())),
        }
    }
}
