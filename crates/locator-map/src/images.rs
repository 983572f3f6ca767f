//! Locator raster handles.
//!
//! Rasters are held as their encoded bytes; decoding and drawing belong to
//! the UI host. A [`MapImages`] owns the base map and optional overlay from
//! load until [`MapImages::release`] or drop.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use scene_common::ProgressTracker;

use crate::config::LocatorMapConfig;
use crate::error::{LocatorMapError, Result};

/// Source of raster bytes by asset identifier.
pub trait AssetLoader: Send + Sync {
    fn load(&self, asset: &str) -> io::Result<Vec<u8>>;
}

/// Reads assets as files under a root directory.
#[derive(Debug, Clone)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, asset: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(asset))
    }
}

/// In-memory assets, for embedded rasters and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetLoader {
    assets: HashMap<String, Vec<u8>>,
}

impl StaticAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, asset: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.insert(asset.into(), bytes);
        self
    }
}

impl AssetLoader for StaticAssetLoader {
    fn load(&self, asset: &str) -> io::Result<Vec<u8>> {
        self.assets
            .get(asset)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, asset.to_string()))
    }
}

/// One acquired raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterHandle {
    asset: String,
    bytes: Vec<u8>,
}

impl RasterHandle {
    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Base map and optional overlay of one locator map.
#[derive(Debug, Default)]
pub struct MapImages {
    base: Option<RasterHandle>,
    overlay: Option<RasterHandle>,
}

impl MapImages {
    /// Acquire every raster the record names.
    pub fn load(loader: &dyn AssetLoader, config: &LocatorMapConfig) -> Result<Self> {
        Self::load_with_progress(loader, config, &ProgressTracker::default())
    }

    /// Acquire rasters, one progress unit per asset.
    pub fn load_with_progress(
        loader: &dyn AssetLoader,
        config: &LocatorMapConfig,
        progress: &ProgressTracker,
    ) -> Result<Self> {
        let total = config.assets().count() as u64;
        progress.start(format!("Loading {} locator map", config.name), total);
        let result = Self::acquire(loader, config, progress);
        progress.finish();
        result
    }

    /// Acquire rasters on a worker thread.
    pub fn load_in_background(
        loader: Arc<dyn AssetLoader>,
        config: LocatorMapConfig,
        progress: Arc<ProgressTracker>,
    ) -> JoinHandle<Result<Self>> {
        thread::spawn(move || Self::load_with_progress(loader.as_ref(), &config, &progress))
    }

    fn acquire(
        loader: &dyn AssetLoader,
        config: &LocatorMapConfig,
        progress: &ProgressTracker,
    ) -> Result<Self> {
        let base = fetch(loader, &config.base_image)?;
        progress.advance(1);
        let overlay = match &config.boundary_image {
            Some(asset) => {
                let handle = fetch(loader, asset)?;
                progress.advance(1);
                Some(handle)
            }
            None => None,
        };

        let images = Self {
            base: Some(base),
            overlay,
        };
        info!(
            map = config.name.as_str(),
            bytes = images.held_bytes(),
            overlay = images.overlay.is_some(),
            "Locator rasters loaded"
        );
        Ok(images)
    }

    pub fn base(&self) -> Option<&RasterHandle> {
        self.base.as_ref()
    }

    pub fn overlay(&self) -> Option<&RasterHandle> {
        self.overlay.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.base.is_some()
    }

    /// Bytes currently held across both rasters.
    pub fn held_bytes(&self) -> usize {
        self.base.iter().chain(self.overlay.iter()).map(RasterHandle::len).sum()
    }

    /// Free both rasters. Further calls do nothing.
    pub fn release(&mut self) {
        if !self.is_loaded() && self.overlay.is_none() {
            return;
        }
        let bytes = self.held_bytes();
        self.base = None;
        self.overlay = None;
        info!(bytes, "Locator rasters released");
    }
}

impl Drop for MapImages {
    fn drop(&mut self) {
        self.release();
    }
}

fn fetch(loader: &dyn AssetLoader, asset: &str) -> Result<RasterHandle> {
    let bytes = loader
        .load(asset)
        .map_err(|e| LocatorMapError::asset_load(asset, e))?;
    debug!(asset, len = bytes.len(), "Asset loaded");
    Ok(RasterHandle {
        asset: asset.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use scene_common::WorkProgress;

    fn world_assets() -> StaticAssetLoader {
        StaticAssetLoader::new()
            .with_asset("world.png", vec![1; 64])
            .with_asset("world_boundaries.png", vec![2; 16])
    }

    #[test]
    fn test_load_and_release() {
        let mut images = MapImages::load(&world_assets(), &presets::world()).unwrap();
        assert!(images.is_loaded());
        assert_eq!(images.base().unwrap().asset(), "world.png");
        assert_eq!(images.overlay().unwrap().len(), 16);
        assert_eq!(images.held_bytes(), 80);

        images.release();
        assert!(!images.is_loaded());
        assert!(images.overlay().is_none());
        assert_eq!(images.held_bytes(), 0);
        images.release();
    }

    #[test]
    fn test_missing_overlay_fails() {
        let loader = StaticAssetLoader::new().with_asset("world.png", vec![0; 4]);
        let err = MapImages::load(&loader, &presets::world()).unwrap_err();
        match err {
            LocatorMapError::AssetLoad { asset, source } => {
                assert_eq!(asset, "world_boundaries.png");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_progress_counts_assets() {
        let progress = ProgressTracker::new();
        MapImages::load_with_progress(&world_assets(), &presets::world(), &progress).unwrap();
        assert_eq!(progress.total(), 2);
        assert_eq!(progress.complete(), 2);
        assert!(!progress.is_working());
        assert!(progress.label().contains("world"));
    }

    #[test]
    fn test_background_load() {
        let progress = ProgressTracker::new();
        let handle = MapImages::load_in_background(
            Arc::new(world_assets()),
            presets::world(),
            Arc::clone(&progress),
        );
        let images = handle.join().unwrap().unwrap();
        assert!(images.is_loaded());
        assert_eq!(progress.fraction(), 1.0);
    }
}
