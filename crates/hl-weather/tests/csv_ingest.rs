use hl_weather::{
    ClimatePolicy, PeriodTargets, WeatherError, load_weather_csv, prepare_weather,
    read_weather_csv, summarize,
};
use std::path::PathBuf;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("demos")
}

#[test]
fn demo_weather_file_loads() {
    let records = load_weather_csv(&demos_dir().join("weather_sample.csv"))
        .expect("demo weather should load");
    assert!(!records.is_empty());

    // Timestamps are hourly and ascending in the demo file.
    for pair in records.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

#[test]
fn csv_to_prepared_rows() {
    let csv = "Local Time,Temperature (C),Relative Humidity (%),Solar Radiation (W/m²)\n\
               2024-07-01 05:00:00,19.5,85,0\n\
               2024-07-01 13:00:00,35.0,30,860\n\
               2024-07-01 14:00:00,,31,840\n";
    let records = read_weather_csv(csv.as_bytes()).unwrap();
    let policy = ClimatePolicy {
        day: PeriodTargets {
            rh_cap_pct: Some(80.0),
            t_max_c: Some(28.0),
            ..Default::default()
        },
        night: PeriodTargets {
            rh_cap_pct: Some(90.0),
            t_max_c: Some(22.0),
            ..Default::default()
        },
    };

    let rows = prepare_weather(&records, &policy);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].targets.rh_cap_pct, Some(90.0));
    assert_eq!(rows[1].targets.rh_cap_pct, Some(80.0));
    assert_eq!(rows[2].temperature_c, None);

    let summary = summarize(&rows);
    assert_eq!(summary.day_rows, 2);
    assert_eq!(summary.t_max_c, Some(35.0));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_weather_csv(&demos_dir().join("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, WeatherError::Io(_)));
}
