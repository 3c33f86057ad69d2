// Integration tests for the lap series processor, driven from stored rows

use lapsight::metrics::{DeltaClassification, ReferenceScope, resolve_in_scope};
use lapsight::series::{SummaryOptions, driver_laps};
use lapsight::timing::{format_delta, format_optional_seconds, format_seconds, parse_duration};
use lapsight::{LapRecord, LapRow, Metric, compare_field, enrich_laps, summarize_driver};

fn row(driver_id: &str, lap_number: u32, lap_time: &str, s1: f64, kph: f64, top_speed: f64) -> LapRow {
    LapRow {
        race_id: "barber-r1".to_string(),
        driver_id: driver_id.to_string(),
        lap_number,
        lap_time: Some(lap_time.to_string()),
        s1_seconds: Some(s1),
        kph: Some(kph),
        top_speed: Some(top_speed),
        flag_at_fl: Some("GF".to_string()),
        ..LapRow::default()
    }
}

fn race_records() -> Vec<LapRecord> {
    vec![
        row("d13", 1, "1:30.000", 30.1, 140.2, 198.0),
        row("d72", 1, "1:31.200", 30.4, 139.0, 199.5),
        row("d13", 2, "1:28.500", 29.6, 142.5, 201.0),
        row("d72", 2, "1:29.100", 29.9, 141.7, 200.2),
        row("d13", 3, "1:29.000", 29.8, 141.9, 200.4),
        row("d72", 3, "-", 29.7, 141.0, 200.9),
    ]
    .into_iter()
    .map(LapRecord::from)
    .collect()
}

#[test]
fn test_driver_view_end_to_end() {
    let records = race_records();
    let laps = driver_laps(&records, "barber-r1", "d13");
    let enriched = enrich_laps(&laps).unwrap();

    assert_eq!(enriched.len(), 3);
    assert!(enriched[0].previous_lap_delta.lap_time.is_none());
    assert_eq!(enriched[1].previous_lap_delta.lap_time, Some(1.5));
    assert_eq!(enriched[2].previous_lap_delta.lap_time, Some(-0.5));
    assert_eq!(format_delta(enriched[2].previous_lap_delta.lap_time), "-0.500s");

    let best = enriched
        .iter()
        .find(|lap| lap.delta.lap_time.classification == DeltaClassification::AtReference)
        .unwrap();
    assert_eq!(best.lap.lap_number, 2);

    let summary = summarize_driver(&laps, &SummaryOptions::default());
    let best_lap = summary.bests.lap_time.as_ref().unwrap();
    assert_eq!(best_lap.owner_lap_number, 2);
    assert_eq!(format_seconds(best_lap.value), "1:28.500");
    assert_eq!(summary.bests.top_speed.as_ref().unwrap().owner_lap_number, 2);
}

#[test]
fn test_field_view_end_to_end() {
    let records = race_records();
    let view = compare_field(&records, "barber-r1", 3);

    assert_eq!(view.rows.len(), 2);
    let best_time = view.references.lap_time.as_ref().unwrap();
    assert_eq!(best_time.owner_driver_id, "d13");

    // d72 has no lap time on lap 3 but still has sector and speed deltas
    let d72 = view.rows.iter().find(|row| row.lap.driver_id == "d72").unwrap();
    assert_eq!(d72.delta_to_best.lap_time.classification, DeltaClassification::Unavailable);
    assert_eq!(format_optional_seconds(d72.lap.lap_time), "N/A");
    assert_eq!(d72.delta_to_best.sector1.classification, DeltaClassification::AtReference);
    assert_eq!(d72.delta_to_best.top_speed.classification, DeltaClassification::AtReference);
    assert_eq!(view.references.top_speed.as_ref().unwrap().owner_driver_id, "d72");

    let d13 = view.rows.iter().find(|row| row.lap.driver_id == "d13").unwrap();
    assert_eq!(d13.delta_to_best.sector1.classification, DeltaClassification::Worse);
    assert_eq!(d13.delta_to_best.top_speed.classification, DeltaClassification::Worse);
    assert!(d13.delta_to_best.top_speed.value.unwrap() > 0.);
}

#[test]
fn test_race_wide_reference() {
    let records = race_records();
    let scope = ReferenceScope::AllDriversThisRace {
        race_id: "barber-r1".to_string(),
    };
    let best = resolve_in_scope(&records, &scope, Metric::Sector1).unwrap();
    assert_eq!((best.owner_driver_id.as_str(), best.owner_lap_number), ("d13", 2));
    assert_eq!(best.value, 29.6);
}

#[test]
fn test_round_trip_display() {
    assert_eq!(format_seconds(parse_duration("1:23.456").unwrap()), "1:23.456");
    assert_eq!(parse_duration("1:05:30.000"), Some(3930.0));
}

#[test]
fn test_enriched_lap_serializes_flat() {
    let records = race_records();
    let laps = driver_laps(&records, "barber-r1", "d72");
    let enriched = enrich_laps(&laps).unwrap();
    let json = serde_json::to_value(&enriched[1]).unwrap();

    assert_eq!(json["lap_number"], 2);
    assert_eq!(json["flag_at_finish"], "GF");
    assert_eq!(json["delta"]["lap_time"]["classification"], "atReference");
    assert!(json["previous_lap_delta"]["lap_time"].as_f64().unwrap() > 2.0);
}
