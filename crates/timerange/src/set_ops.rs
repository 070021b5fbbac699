//! Set operations over collections of time ranges.
//!
//! Every function takes the caller's slice read-only and returns a newly
//! allocated result; the sweep sorts an internal copy.

use log::debug;

use crate::error::{Error, Result};
use crate::range::TimeRange;

/// Sort a copy by start and sweep, folding every range whose start does
/// not exceed the accumulated end into one covering range.
fn coalesce(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    if ranges.is_empty() {
        return ranges;
    }
    ranges.sort_by_key(|r| r.start);

    let mut merged = Vec::with_capacity(ranges.len());
    let mut current = ranges[0];
    for r in ranges.into_iter().skip(1) {
        if r.start <= current.end {
            if r.end > current.end {
                current.end = r.end;
            }
        } else {
            merged.push(current);
            current = r;
        }
    }
    merged.push(current);
    merged
}

/// Merge a non-empty set of ranges into the minimal disjoint cover.
///
/// # Arguments
///
/// * `ranges` - Ranges to merge, in any order
///
/// # Returns
///
/// The covering ranges sorted by start, pairwise disjoint and
/// non-adjacent, or [`Error::InvalidArgument`] for an empty input.
pub fn union(ranges: &[TimeRange]) -> Result<Vec<TimeRange>> {
    if ranges.is_empty() {
        return Err(Error::InvalidArgument);
    }
    let merged = coalesce(ranges.to_vec());
    debug!(
        "union coalesced {} ranges into {}",
        ranges.len(),
        merged.len()
    );
    Ok(merged)
}

/// Compute the common intersection of all ranges simultaneously.
///
/// # Returns
///
/// The window `{max(starts), min(ends)}` shared by every input range,
/// [`Error::NoIntersection`] when that window is empty, or
/// [`Error::InvalidArgument`] for an empty input.
pub fn intersection(ranges: &[TimeRange]) -> Result<TimeRange> {
    if ranges.is_empty() {
        return Err(Error::InvalidArgument);
    }

    let mut max_start = ranges[0].start;
    let mut min_end = ranges[0].end;
    for r in &ranges[1..] {
        max_start = max_start.max(r.start);
        min_end = min_end.min(r.end);
    }

    if max_start > min_end {
        return Err(Error::NoIntersection);
    }
    Ok(TimeRange {
        start: max_start,
        end: min_end,
    })
}

/// Merge overlapping or adjacent ranges into the minimal disjoint cover.
///
/// Same sweep as [`union`], but an empty input yields an empty vector
/// instead of an error; call sites that treat emptiness as a caller bug
/// use [`union`].
pub fn merge_overlapping(ranges: &[TimeRange]) -> Vec<TimeRange> {
    coalesce(ranges.to_vec())
}

/// Find the maximal sub-ranges of `bounds` not covered by `occupied`.
///
/// The occupied ranges may be unsorted and overlapping; they are
/// coalesced first, then clipped to `bounds`. With nothing occupied the
/// whole of `bounds` is returned as the single gap.
pub fn find_gaps(occupied: &[TimeRange], bounds: &TimeRange) -> Vec<TimeRange> {
    let merged = coalesce(occupied.to_vec());

    let mut gaps = Vec::new();
    let mut cursor = bounds.start;
    for r in merged {
        if r.end <= bounds.start {
            continue;
        }
        if r.start >= bounds.end {
            break;
        }
        let clipped_start = r.start.max(bounds.start);
        let clipped_end = r.end.min(bounds.end);
        if clipped_start > cursor {
            gaps.push(TimeRange {
                start: cursor,
                end: clipped_start,
            });
        }
        if clipped_end > cursor {
            cursor = clipped_end;
        }
    }
    if cursor < bounds.end {
        gaps.push(TimeRange {
            start: cursor,
            end: bounds.end,
        });
    }

    debug!(
        "find_gaps: {} occupied ranges leave {} gaps in bounds",
        occupied.len(),
        gaps.len()
    );
    gaps
}
