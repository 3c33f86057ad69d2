// Integration tests for weather and telemetry summaries and race result normalization

use lapsight::records::order_by_position;
use lapsight::{RaceResult, RainStatus, TelemetrySample, WeatherSample, summarize_channel, summarize_weather};

fn samples(raining: usize) -> Vec<WeatherSample> {
    (0..10)
        .map(|i| WeatherSample {
            race_id: "barber-r2".to_string(),
            time_utc_seconds: 1_725_000_000 + i as i64 * 60,
            air_temp: Some(if i % 2 == 0 { 27.0 } else { 28.0 }),
            track_temp: Some(38.0 + i as f64 * 0.2),
            humidity: Some(60.0),
            pressure: Some(1002.5),
            wind_speed: Some(6.0),
            wind_direction: Some(180.0),
            rain: u8::from(i < raining),
            ..WeatherSample::default()
        })
        .collect()
}

#[test]
fn test_rain_states() {
    assert_eq!(summarize_weather(&samples(0)).unwrap().rain_status, RainStatus::NoRain);
    assert_eq!(summarize_weather(&samples(10)).unwrap().rain_status, RainStatus::ConstantRain);
    assert_eq!(
        summarize_weather(&samples(3)).unwrap().rain_status,
        RainStatus::IntermittentRain
    );
}

#[test]
fn test_weather_display_values() {
    let summary = summarize_weather(&samples(0)).unwrap().rounded();
    assert_eq!(summary.sample_count, 10);
    assert_eq!(summary.avg_air_temp, Some(27.5));
    assert_eq!(summary.avg_track_temp, Some(38.9));
    assert_eq!(summary.avg_pressure, Some(1002.5));
    let hottest = summary.max_track_temp.unwrap();
    assert_eq!(hottest.time_utc_seconds, 1_725_000_000 + 9 * 60);
}

#[test]
fn test_results_normalized_and_ordered() {
    let raw = r#"[
        {"race_id":"r","driver_id":"second","position":2,"gap_to_first":"+0'01.234","gap_to_previous":"+0'01.234"},
        {"race_id":"r","driver_id":"lapped","position":3,"gap_to_first":"1 Lap","gap_to_previous":"1 Lap"},
        {"race_id":"r","driver_id":"winner","position":1,"gap_to_first":"-","gap_to_previous":"-"}
    ]"#;
    let results: Vec<RaceResult> = serde_json::from_str(raw).unwrap();
    let ordered = order_by_position(
        results
            .into_iter()
            .map(RaceResult::with_normalized_gaps)
            .collect(),
    );

    assert_eq!(ordered[0].driver_id, "winner");
    assert_eq!(ordered[0].gap_to_first, None);
    assert_eq!(ordered[1].gap_to_first.as_deref(), Some("00:00:01.234"));
    assert_eq!(ordered[1].gap_to_first_seconds(), Some(1.234));
    assert_eq!(ordered[2].gap_to_previous, None);
}

#[test]
fn test_lap_speed_summary_from_telemetry_rows() {
    let raw = [
        r#"{"race_id":"r","driver_id":"d13","lap_number":5,"timestamp":"2025-04-05T15:00:01.000Z","name":"speed","value":80.0}"#,
        r#"{"race_id":"r","driver_id":"d13","lap_number":5,"timestamp":"2025-04-05T15:00:02.000Z","name":"speed","value":250.0}"#,
        r#"{"race_id":"r","driver_id":"d13","lap_number":5,"timestamp":"2025-04-05T15:00:03.000Z","name":"speed","value":null}"#,
        r#"{"race_id":"r","driver_id":"d13","lap_number":5,"timestamp":"2025-04-05T15:00:04.000Z","name":"speed","value":210.0}"#,
    ];
    let samples: Vec<TelemetrySample> = raw
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let summary = summarize_channel(&samples, "r", "d13", 5, "speed").unwrap();
    assert_eq!(summary.sample_count, 3);
    assert_eq!(summary.min.unwrap().value, 80.);
    assert_eq!(summary.max.unwrap().timestamp, "2025-04-05T15:00:02.000Z");
    assert_eq!(summary.average.map(|avg| avg.round()), Some(180.));
}
