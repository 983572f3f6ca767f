//! Sensor dataset records.
//!
//! A dataset fixes the navigation model used for its scenes, the locator map
//! it opens on, and the resolutions offered for download with their
//! estimated file sizes. Records are read-only once loaded.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use locator_map::{presets, LocatorMapConfig};
use wrs::{NavigationModel, NavigationModelKind};

use crate::error::{CatalogError, Result};

/// One downloadable resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Ground sample distance in meters
    pub meters: f64,
    /// Estimated download size in megabytes
    pub estimated_size_mb: f64,
}

/// One sensor dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub navigation_model: NavigationModelKind,
    /// Built-in locator map opened for this dataset
    #[serde(default = "default_locator_map")]
    pub locator_map: String,
    pub resolutions: Vec<Resolution>,
}

fn default_locator_map() -> String {
    "world".to_string()
}

impl DatasetDescriptor {
    /// Check the record is usable.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid("", "name must not be empty"));
        }
        if self.resolutions.is_empty() {
            return Err(CatalogError::invalid(&self.name, "no resolutions"));
        }
        for resolution in &self.resolutions {
            if resolution.meters.is_nan() || resolution.meters <= 0.0 {
                return Err(CatalogError::invalid(
                    &self.name,
                    format!("resolution {} m must be positive", resolution.meters),
                ));
            }
            if resolution.estimated_size_mb.is_nan() || resolution.estimated_size_mb < 0.0 {
                return Err(CatalogError::invalid(
                    &self.name,
                    format!(
                        "size estimate {} MB must not be negative",
                        resolution.estimated_size_mb
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Shared navigation model for this dataset's scenes.
    pub fn navigation_model(&self) -> Arc<dyn NavigationModel> {
        self.navigation_model.build()
    }

    /// Resolved locator map record.
    pub fn locator_config(&self) -> Result<LocatorMapConfig> {
        presets::by_name(&self.locator_map)
            .ok_or_else(|| CatalogError::UnknownLocatorMap(self.locator_map.clone()))
    }

    /// Finest resolution offered.
    pub fn finest_resolution(&self) -> Option<&Resolution> {
        self.resolutions
            .iter()
            .min_by(|a, b| a.meters.total_cmp(&b.meters))
    }

    /// Size estimate for a resolution in meters, if offered.
    pub fn estimated_size_mb(&self, meters: f64) -> Option<f64> {
        self.resolutions
            .iter()
            .find(|r| r.meters == meters)
            .map(|r| r.estimated_size_mb)
    }
}

/// The set of datasets the browser offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetCatalog {
    pub datasets: Vec<DatasetDescriptor>,
}

impl DatasetCatalog {
    /// Build and validate a catalog.
    pub fn new(datasets: Vec<DatasetDescriptor>) -> Result<Self> {
        let catalog = Self { datasets };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_yaml_str(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            datasets = catalog.datasets.len(),
            "Loaded dataset catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for dataset in &self.datasets {
            dataset.validate()?;
            dataset.locator_config()?;
            if !seen.insert(dataset.name.as_str()) {
                return Err(CatalogError::DuplicateDataset(dataset.name.clone()));
            }
            debug!(
                dataset = dataset.name.as_str(),
                model = %dataset.navigation_model,
                "Dataset validated"
            );
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&DatasetDescriptor> {
        self.datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CatalogError::UnknownDataset(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(|d| d.name.as_str())
    }

    /// Landsat collections shipped with the browser.
    pub fn landsat() -> Self {
        let dataset = |name: &str, title: &str, kind, locator: &str, res: &[(f64, f64)]| {
            DatasetDescriptor {
                name: name.to_string(),
                title: title.to_string(),
                navigation_model: kind,
                locator_map: locator.to_string(),
                resolutions: res
                    .iter()
                    .map(|&(meters, estimated_size_mb)| Resolution {
                        meters,
                        estimated_size_mb,
                    })
                    .collect(),
            }
        };
        Self {
            datasets: vec![
                dataset(
                    "landsat_mss_wrs1",
                    "Landsat 1-3 MSS",
                    NavigationModelKind::Wrs1Descending,
                    "world",
                    &[(60.0, 30.0), (240.0, 2.0)],
                ),
                dataset(
                    "landsat_tm",
                    "Landsat 4-5 TM",
                    NavigationModelKind::Wrs2Descending,
                    "north_america",
                    &[(30.0, 160.0), (240.0, 2.5)],
                ),
                dataset(
                    "landsat_etm",
                    "Landsat 7 ETM+",
                    NavigationModelKind::Wrs2Descending,
                    "world",
                    &[(15.0, 640.0), (30.0, 180.0), (240.0, 2.8)],
                ),
                dataset(
                    "landsat_etm_night",
                    "Landsat 7 ETM+ night",
                    NavigationModelKind::Wrs2Ascending,
                    "world",
                    &[(60.0, 40.0), (240.0, 2.8)],
                ),
            ],
        }
    }
}
