//! Structured JSON encoding of time ranges.
//!
//! The wire form exposes `start` and `end` as RFC3339 instants plus a
//! redundant `iso` field equal to [`TimeRange::to_iso_string`]. Decoding
//! reads `start`/`end` only; `iso` is write-only and ignored.

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::range::TimeRange;

impl Serialize for TimeRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TimeRange", 3)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("iso", &self.to_iso_string())?;
        state.end()
    }
}

/// Decode-side wire shape. Absent or unparseable fields are decode
/// errors, never a zero-valued range.
#[derive(serde::Deserialize)]
struct Wire {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = Wire::deserialize(deserializer)?;
        Ok(TimeRange {
            start: wire.start,
            end: wire.end,
        })
    }
}
