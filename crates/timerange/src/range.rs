//! The time range value type and its pairwise operations.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};

/// A closed interval `[start, end]` of UTC instants.
///
/// Values built through [`TimeRange::new`] always satisfy `end >= start`
/// (equality permitted, giving a zero-length range). The fields are public
/// so literal construction stays possible; every operation tolerates an
/// inverted range deterministically, only the constructor validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeRange {
    /// Start instant (inclusive)
    pub start: DateTime<Utc>,
    /// End instant (inclusive)
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Create a new validated time range.
    ///
    /// # Arguments
    ///
    /// * `start` - Start instant of the range
    /// * `end` - End instant of the range, must not precede `start`
    ///
    /// # Returns
    ///
    /// The range, or [`Error::InvalidRange`] when `end` is strictly
    /// before `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Check if this range overlaps with another.
    ///
    /// Overlap is strict: ranges that merely touch at an endpoint do not
    /// overlap (see [`TimeRange::is_adjacent`]).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if a given instant lies inside this range (inclusive both ends).
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t <= self.end
    }

    /// Check if this range exactly touches another at an endpoint.
    ///
    /// Adjacency is a pure boundary test; combine with
    /// [`TimeRange::overlaps`] when both conditions matter.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.end == other.start || other.end == self.start
    }

    /// Check if both endpoints sit at the Unix epoch sentinel.
    ///
    /// This identifies the zero value (e.g. what [`TimeRange::gap`]
    /// returns when there is no gap), not a zero-length range.
    pub fn is_zero(&self) -> bool {
        self.start == DateTime::UNIX_EPOCH && self.end == DateTime::UNIX_EPOCH
    }

    /// Length of the range.
    ///
    /// Signed: negative for an inverted range built via literal
    /// construction, no clamping.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Merge this range with an overlapping or adjacent one.
    ///
    /// # Returns
    ///
    /// The covering range `{min(starts), max(ends)}`, or
    /// [`Error::NoOverlap`] when the ranges neither overlap nor touch.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        if !self.overlaps(other) && !self.is_adjacent(other) {
            return Err(Error::NoOverlap);
        }
        Ok(Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Remove the overlapping part of `other` from this range.
    ///
    /// # Returns
    ///
    /// * the range unchanged (single element) when the two do not overlap,
    /// * a leading remainder when `self` starts before `other`,
    /// * a trailing remainder when `other` ends before `self`,
    /// * an empty vector when `other` fully covers `self`.
    pub fn subtract(&self, other: &Self) -> Vec<Self> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut remainder = Vec::new();
        if self.start < other.start {
            remainder.push(Self {
                start: self.start,
                end: other.start,
            });
        }
        if other.end < self.end {
            remainder.push(Self {
                start: other.end,
                end: self.end,
            });
        }
        remainder
    }

    /// The range separating this range from another.
    ///
    /// Returns the zero value when the ranges overlap or are adjacent;
    /// callers that need to distinguish those cases check
    /// [`TimeRange::overlaps`] / [`TimeRange::is_adjacent`] first.
    pub fn gap(&self, other: &Self) -> Self {
        if self.overlaps(other) || self.is_adjacent(other) {
            return Self::default();
        }
        if self.end < other.start {
            Self {
                start: self.end,
                end: other.start,
            }
        } else {
            Self {
                start: other.end,
                end: self.start,
            }
        }
    }

    /// Split the range into consecutive sub-ranges of at most `step` length.
    ///
    /// The sub-ranges are contiguous and cover the range exactly; the last
    /// one is clipped to the end and may be shorter than `step`. A
    /// non-positive `step` returns the range unchanged (documented guard,
    /// not an error), and a zero-length range yields no pieces.
    pub fn split_by_duration(&self, step: Duration) -> Vec<Self> {
        if step <= Duration::zero() {
            return vec![*self];
        }

        let mut pieces = Vec::new();
        let mut current = self.start;
        while current < self.end {
            // a cursor overflowing chrono's range clips to the end
            let next = match current.checked_add_signed(step) {
                Some(t) if t < self.end => t,
                _ => self.end,
            };
            pieces.push(Self {
                start: current,
                end: next,
            });
            current = next;
        }
        pieces
    }

    /// Clamp an instant into this range.
    pub fn clamp(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        if t < self.start {
            return self.start;
        }
        if t > self.end {
            return self.end;
        }
        t
    }
}
