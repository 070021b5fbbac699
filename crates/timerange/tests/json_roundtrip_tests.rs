use chrono::{DateTime, TimeZone, Utc};
use timerange::TimeRange;

fn window(start_h: u32, end_h: u32) -> TimeRange {
    TimeRange {
        start: Utc.with_ymd_and_hms(2023, 6, 15, start_h, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2023, 6, 15, end_h, 0, 0).unwrap(),
    }
}

#[test]
fn test_schedule_round_trips_through_json() {
    let schedule = vec![window(8, 10), window(11, 13), window(15, 18)];

    let encoded = serde_json::to_string(&schedule).unwrap();
    let decoded: Vec<TimeRange> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, schedule);
}

#[test]
fn test_round_trip_across_precisions() {
    let ranges = [
        window(8, 10),
        TimeRange {
            start: DateTime::from_timestamp(1686812400, 1).unwrap(),
            end: DateTime::from_timestamp(1686816000, 999_999_999).unwrap(),
        },
        TimeRange {
            start: DateTime::from_timestamp(1686812400, 250_000_000).unwrap(),
            end: DateTime::from_timestamp(1686816000, 250_000_000).unwrap(),
        },
    ];

    for original in ranges {
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: TimeRange = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original, "round trip drifted for {}", original);
    }
}

#[test]
fn test_encoded_iso_field_matches_iso_rendering() {
    let tr = window(9, 17);
    let value = serde_json::to_value(tr).unwrap();
    assert_eq!(value["iso"], tr.to_iso_string());
}

#[test]
fn test_decode_tolerates_foreign_fields() {
    let decoded: TimeRange = serde_json::from_str(
        r#"{
            "start": "2023-06-15T08:00:00Z",
            "end": "2023-06-15T10:00:00Z",
            "iso": "2023-06-15T08:00:00Z/2023-06-15T10:00:00Z",
            "label": "maintenance"
        }"#,
    )
    .unwrap();
    assert_eq!(decoded, window(8, 10));
}

#[test]
fn test_decode_rejects_partial_payload() {
    let payloads = [
        r#"{"end":"2023-06-15T10:00:00Z"}"#,
        r#"{"start":"2023-06-15T08:00:00Z"}"#,
        r#"{"iso":"2023-06-15T08:00:00Z/2023-06-15T10:00:00Z"}"#,
    ];
    for payload in payloads {
        let result: Result<TimeRange, _> = serde_json::from_str(payload);
        assert!(result.is_err(), "expected decode failure for {}", payload);
    }
}
