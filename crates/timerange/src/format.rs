//! Textual rendering of time ranges.
//!
//! All three renderings are one-way; only the JSON encoding in
//! [`crate::json`] round-trips.

use std::fmt;

use chrono::SecondsFormat;

use crate::range::TimeRange;

/// Verbose RFC1123-style calendar layout used when no layout is given.
pub const DEFAULT_HUMAN_LAYOUT: &str = "%a, %d %b %Y %H:%M:%S %Z";

impl TimeRange {
    /// Render as `"<start>/<end>"` with both endpoints in RFC3339.
    pub fn to_iso_string(&self) -> String {
        format!(
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }

    /// Render both endpoints with a chrono `strftime` layout, joined by
    /// `" - "`.
    ///
    /// An empty layout falls back to [`DEFAULT_HUMAN_LAYOUT`].
    pub fn to_human_string(&self, layout: &str) -> String {
        let layout = if layout.is_empty() {
            DEFAULT_HUMAN_LAYOUT
        } else {
            layout
        };
        format!(
            "{} - {}",
            self.start.format(layout),
            self.end.format(layout)
        )
    }

    /// Render as a filesystem- and URL-safe `YYYYMMDD-YYYYMMDD` slug.
    pub fn to_slug_string(&self) -> String {
        format!(
            "{}-{}",
            self.start.format("%Y%m%d"),
            self.end.format("%Y%m%d")
        )
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}
