//! # timerange
//!
//! Closed time ranges over UTC instants, with interval arithmetic.
//!
//! A [`TimeRange`] is an immutable two-field value `[start, end]` with
//! `end >= start`. Everything the crate does is a pure, synchronous
//! function over such values; there is no I/O, no shared state and no
//! internal retention of caller input.
//!
//! ## Features
//!
//! - Predicates: overlap, containment, adjacency
//! - Pairwise manipulation: merge, subtract, gap, split, clamp
//! - Set operations over collections: union, intersection, gap finding
//! - Textual renderings (ISO, human, slug) and a round-trippable JSON
//!   encoding
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use timerange::TimeRange;
//!
//! let night = TimeRange::new(
//!     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap(),
//! )?;
//! assert_eq!(night.duration(), Duration::hours(24));
//!
//! let shifts = night.split_by_duration(Duration::hours(8));
//! assert_eq!(shifts.len(), 3);
//! assert_eq!(shifts[0].to_slug_string(), "20230101-20230101");
//! # Ok::<(), timerange::Error>(())
//! ```

mod error;
mod format;
mod json;
mod range;
mod set_ops;

pub use error::{Error, Result};
pub use format::DEFAULT_HUMAN_LAYOUT;
pub use range::TimeRange;
pub use set_ops::{find_gaps, intersection, merge_overlapping, union};
