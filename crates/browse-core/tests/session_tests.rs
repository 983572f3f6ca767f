//! End-to-end browse flows: click, step, extent and teardown.

use std::sync::Arc;

use browse_core::{BrowseSession, CatalogError, DatasetCatalog};
use chrono::NaiveDate;
use locator_map::{LocatorMap, StaticAssetLoader};
use scene_common::{GridCell, ProjectedCoordinate};
use scene_filter::{CloudCoverPredicate, SceneCatalog, SceneDateEntry};
use test_utils::{cells, cloud_cover_pattern, paths, revisit_dates};
use wrs::GridDirection;

fn sioux_falls() -> GridCell {
    let (path, row) = cells::SIOUX_FALLS;
    GridCell::new(path, row)
}

fn scenes() -> Arc<SceneCatalog> {
    let start = NaiveDate::from_ymd_opt(2001, 1, 3).unwrap();
    let neighbour = GridCell::new(29, 31);
    let mut entries: Vec<_> = revisit_dates(start, 24, 16)
        .into_iter()
        .zip(cloud_cover_pattern(24))
        .enumerate()
        .map(|(i, (date, cloud))| {
            SceneDateEntry::new(format!("sf-{i}"), sioux_falls(), date).with_cloud_cover(cloud)
        })
        .collect();
    entries.push(SceneDateEntry::new("n-0", neighbour, start).with_cloud_cover(5));
    Arc::new(SceneCatalog::new(entries))
}

fn open(name: &str) -> BrowseSession {
    let catalog = DatasetCatalog::landsat();
    let dataset = catalog.get(name).unwrap();
    let config = dataset.locator_config().unwrap();
    let loader = config
        .assets()
        .fold(StaticAssetLoader::new(), |l, asset| l.with_asset(asset, vec![0; 8]));
    BrowseSession::open(dataset, &loader, scenes()).unwrap()
}

#[test]
fn test_click_selects_cell_and_latest_scene() {
    test_utils::init_tracing();
    let mut session = open("landsat_tm");
    let pixel = session.locator().grid_to_pixel(sioux_falls());

    let outcome = session.click(pixel.x, pixel.y);
    assert_eq!(outcome.cell, sioux_falls());
    assert!(!outcome.clamped);
    assert_eq!(session.current_cell(), Some(sioux_falls()));

    let start = NaiveDate::from_ymd_opt(2001, 1, 3).unwrap();
    assert_eq!(session.filter().current_date(), revisit_dates(start, 24, 16).last().copied());
}

#[test]
fn test_step_moves_grid_and_locator() {
    let mut session = open("landsat_tm");
    assert_eq!(session.step(GridDirection::Down), None);

    session.goto_cell(sioux_falls());
    let before = session.locator().center();
    let below = session.step(GridDirection::Down).unwrap();
    assert_eq!(below, GridCell::new(29, 31));
    assert!(session.locator().center().latitude < before.latitude);
    assert_eq!(
        session.filter().current_date(),
        NaiveDate::from_ymd_opt(2001, 1, 3)
    );

    let west = session.step(GridDirection::Left).unwrap();
    assert_eq!(west, GridCell::new(30, 31));
    assert!(session.locator().center().longitude < before.longitude);
    assert_eq!(session.filter().current_date(), None);
}

#[test]
fn test_goto_cell_normalizes() {
    let mut session = open("landsat_etm_night");
    let cell = session.goto_cell(GridCell::new(0, 300));
    assert_eq!(cell, GridCell::new(233, 176));
}

#[test]
fn test_filter_through_session() {
    let mut session = open("landsat_tm");
    session.goto_cell(sioux_falls());
    session.filter_mut().filter(&CloudCoverPredicate::new(30));
    let visible = session.filter().visible_dates();
    assert!(!visible.is_empty());
    assert!(visible.contains(&session.filter().current_date().unwrap()));
}

#[test]
fn test_visible_extent_geographic() {
    let session = open("landsat_etm");
    let bbox = session.visible_extent(
        ProjectedCoordinate::new(0, 10_000_000),
        ProjectedCoordinate::new(10_000_000, 0),
    );
    assert_eq!(bbox.west(), 0.0);
    assert_eq!(bbox.north(), 100.0);
    assert_eq!(bbox.east(), 100.0);
    assert_eq!(bbox.south(), 0.0);
}

#[test]
fn test_open_missing_assets_fails() {
    let catalog = DatasetCatalog::landsat();
    let dataset = catalog.get("landsat_etm").unwrap();
    let result = BrowseSession::open(dataset, &StaticAssetLoader::new(), scenes());
    assert!(matches!(result, Err(CatalogError::LocatorMap(_))));
}

#[test]
fn test_catalog_file_and_close() {
    let dir = paths::temp_test_dir();
    let yaml = serde_yaml::to_string(&DatasetCatalog::landsat()).unwrap();
    let path = paths::write_text(dir.path(), "datasets.yaml", &yaml);
    let catalog = DatasetCatalog::from_file(&path).unwrap();
    assert_eq!(catalog, DatasetCatalog::landsat());

    open("landsat_mss_wrs1").close();
}
