//! Example demonstrating basic time range arithmetic
//!
//! This example shows how to:
//! 1. Build a validated range starting now
//! 2. Check it for overlap against another window
//! 3. Split it into half-hour slots
//!
//! To run this example:
//! ```bash
//! cargo run --example split_schedule
//! ```

use chrono::{Duration, Utc};
use timerange::TimeRange;

fn main() -> timerange::Result<()> {
    let start = Utc::now();
    let window = TimeRange::new(start, start + Duration::hours(2))?;

    let other = TimeRange {
        start: start + Duration::hours(1),
        end: start + Duration::hours(3),
    };
    println!("Overlaps: {}", window.overlaps(&other));

    for slot in window.split_by_duration(Duration::minutes(30)) {
        println!("{} - {}", slot.start, slot.end);
    }

    Ok(())
}
