//! Test data generators for scene date sequences.
//!
//! These generators create predictable, verifiable date patterns
//! that can be used across the test suite.

use chrono::{Duration, NaiveDate};

/// Creates acquisition dates on a fixed revisit cycle.
///
/// # Arguments
///
/// * `start` - First acquisition date
/// * `count` - Number of dates
/// * `revisit_days` - Days between acquisitions (16 for Landsat 5/7/8)
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use test_utils::revisit_dates;
///
/// let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let dates = revisit_dates(start, 3, 16);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2000, 2, 2).unwrap());
/// ```
pub fn revisit_dates(start: NaiveDate, count: usize, revisit_days: i64) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| start + Duration::days(revisit_days * i as i64))
        .collect()
}

/// Creates a repeating cloud-cover pattern in percent.
///
/// Value at index `i` is `(i * 37) % 101`, which visits every percentage
/// and places both clear (0) and overcast scenes early in the sequence.
pub fn cloud_cover_pattern(count: usize) -> Vec<u8> {
    (0..count).map(|i| ((i * 37) % 101) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revisit_dates_spacing() {
        let start = NaiveDate::from_ymd_opt(1999, 7, 4).unwrap();
        let dates = revisit_dates(start, 10, 16);
        assert_eq!(dates.len(), 10);
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 16);
        }
    }

    #[test]
    fn test_cloud_cover_pattern_range() {
        let covers = cloud_cover_pattern(300);
        assert_eq!(covers[0], 0);
        assert_eq!(covers[1], 37);
        assert!(covers.iter().all(|&c| c <= 100));
    }
}
