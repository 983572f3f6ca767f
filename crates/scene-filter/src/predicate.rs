//! Scene visibility predicates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::SceneDateEntry;
use crate::error::PredicateError;

/// Decides whether a scene is shown.
///
/// Evaluation must be pure; passes may run it concurrently across scenes.
pub trait ScenePredicate: Send + Sync {
    /// `Ok(true)` shows the scene, `Ok(false)` hides it.
    fn evaluate(&self, scene: &SceneDateEntry) -> Result<bool, PredicateError>;

    /// Short label for progress and logs.
    fn describe(&self) -> String {
        "custom filter".to_string()
    }
}

impl<F> ScenePredicate for F
where
    F: Fn(&SceneDateEntry) -> Result<bool, PredicateError> + Send + Sync,
{
    fn evaluate(&self, scene: &SceneDateEntry) -> Result<bool, PredicateError> {
        self(scene)
    }
}

/// Shows scenes at or below a cloud-cover percentage.
///
/// Scenes without a cloud-cover figure fail evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudCoverPredicate {
    pub max_cloud_cover: u8,
}

impl CloudCoverPredicate {
    pub fn new(max_cloud_cover: u8) -> Self {
        Self { max_cloud_cover }
    }
}

impl ScenePredicate for CloudCoverPredicate {
    fn evaluate(&self, scene: &SceneDateEntry) -> Result<bool, PredicateError> {
        let cover = scene
            .cloud_cover
            .ok_or_else(|| PredicateError::missing(&scene.id, "cloud cover"))?;
        Ok(cover <= self.max_cloud_cover)
    }

    fn describe(&self) -> String {
        format!("cloud cover <= {}%", self.max_cloud_cover)
    }
}

/// Shows scenes acquired within an inclusive date range. Open ends are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRangePredicate {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRangePredicate {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

impl ScenePredicate for DateRangePredicate {
    fn evaluate(&self, scene: &SceneDateEntry) -> Result<bool, PredicateError> {
        let after_start = self.start.map_or(true, |start| scene.date >= start);
        let before_end = self.end.map_or(true, |end| scene.date <= end);
        Ok(after_start && before_end)
    }

    fn describe(&self) -> String {
        let fmt = |d: Option<NaiveDate>| d.map_or_else(|| "*".to_string(), |d| d.to_string());
        format!("dates {} .. {}", fmt(self.start), fmt(self.end))
    }
}

/// Shows scenes that pass every inner predicate.
///
/// Stops at the first predicate that hides the scene or fails.
#[derive(Default)]
pub struct AllOf(pub Vec<Box<dyn ScenePredicate>>);

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: impl ScenePredicate + 'static) -> Self {
        self.0.push(Box::new(predicate));
        self
    }
}

impl ScenePredicate for AllOf {
    fn evaluate(&self, scene: &SceneDateEntry) -> Result<bool, PredicateError> {
        for predicate in &self.0 {
            if !predicate.evaluate(scene)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn describe(&self) -> String {
        if self.0.is_empty() {
            return "all scenes".to_string();
        }
        self.0
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_common::GridCell;

    fn scene(day: u32, cloud: Option<u8>) -> SceneDateEntry {
        SceneDateEntry {
            id: format!("s{day}"),
            cell: GridCell::new(1, 1),
            date: NaiveDate::from_ymd_opt(2000, 1, day).unwrap(),
            cloud_cover: cloud,
        }
    }

    #[test]
    fn test_cloud_cover() {
        let predicate = CloudCoverPredicate::new(30);
        assert_eq!(predicate.evaluate(&scene(1, Some(30))), Ok(true));
        assert_eq!(predicate.evaluate(&scene(1, Some(31))), Ok(false));
        assert_eq!(
            predicate.evaluate(&scene(1, None)),
            Err(PredicateError::missing("s1", "cloud cover"))
        );
    }

    #[test]
    fn test_date_range_inclusive() {
        let predicate = DateRangePredicate::new(
            NaiveDate::from_ymd_opt(2000, 1, 5),
            NaiveDate::from_ymd_opt(2000, 1, 10),
        );
        assert_eq!(predicate.evaluate(&scene(4, None)), Ok(false));
        assert_eq!(predicate.evaluate(&scene(5, None)), Ok(true));
        assert_eq!(predicate.evaluate(&scene(10, None)), Ok(true));
        assert_eq!(predicate.evaluate(&scene(11, None)), Ok(false));
        assert_eq!(predicate.describe(), "dates 2000-01-05 .. 2000-01-10");
        assert_eq!(DateRangePredicate::default().evaluate(&scene(1, None)), Ok(true));
    }

    #[test]
    fn test_all_of_short_circuits() {
        let predicate = AllOf::new()
            .with(DateRangePredicate::new(None, NaiveDate::from_ymd_opt(2000, 1, 5)))
            .with(CloudCoverPredicate::new(50));
        // Hidden by date before cloud cover is consulted
        assert_eq!(predicate.evaluate(&scene(9, None)), Ok(false));
        assert!(predicate.evaluate(&scene(2, None)).is_err());
        assert_eq!(predicate.evaluate(&scene(2, Some(10))), Ok(true));
        assert_eq!(AllOf::new().describe(), "all scenes");
    }

    #[test]
    fn test_closure_predicate() {
        let short_ids = |s: &SceneDateEntry| Ok::<_, PredicateError>(s.id.len() == 2);
        assert_eq!(short_ids.evaluate(&scene(3, None)), Ok(true));
        assert_eq!(short_ids.evaluate(&scene(12, None)), Ok(false));
        assert_eq!(short_ids.describe(), "custom filter");
    }
}
