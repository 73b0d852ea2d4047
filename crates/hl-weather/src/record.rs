//! CSV weather ingestion.

use crate::error::{WeatherError, WeatherResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const COL_LOCAL_TIME: &str = "Local Time";
pub const COL_TEMPERATURE: &str = "Temperature (C)";
pub const COL_REL_HUM: &str = "Relative Humidity (%)";
pub const COL_SOLAR: &str = "Solar Radiation (W/m²)";

/// Header names every weather file must contain. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_LOCAL_TIME, COL_TEMPERATURE, COL_REL_HUM, COL_SOLAR];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Local Time")]
    local_time: String,
    #[serde(rename = "Temperature (C)", deserialize_with = "csv::invalid_option")]
    temperature_c: Option<f64>,
    #[serde(rename = "Relative Humidity (%)", deserialize_with = "csv::invalid_option")]
    rel_hum_pct: Option<f64>,
    #[serde(rename = "Solar Radiation (W/m²)", deserialize_with = "csv::invalid_option")]
    solar_w_m2: Option<f64>,
}

/// One hourly weather record.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub timestamp: NaiveDateTime,
    /// Outdoor dry-bulb temperature [°C]
    pub temperature_c: Option<f64>,
    /// Outdoor relative humidity [%]
    pub rel_hum_pct: Option<f64>,
    /// Global solar radiation [W/m²]
    pub solar_w_m2: Option<f64>,
}

/// Parse a local timestamp in one of the accepted layouts.
///
/// A bare date is read as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Read hourly weather records from CSV.
///
/// Fails when a required column is absent, naming the missing and available columns.
/// Numeric cells that are empty, unparseable or non-finite are read as `None`.
pub fn read_weather_csv<R: Read>(reader: R) -> WeatherResult<Vec<WeatherObservation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == **c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(WeatherError::MissingColumns {
            missing,
            available: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut observations = Vec::new();
    for (idx, record) in rdr.deserialize::<CsvRecord>().enumerate() {
        let record = record?;
        let timestamp =
            parse_timestamp(&record.local_time).ok_or_else(|| WeatherError::Timestamp {
                row: idx + 1,
                value: record.local_time.clone(),
            })?;

        observations.push(WeatherObservation {
            timestamp,
            temperature_c: finite(record.temperature_c),
            rel_hum_pct: finite(record.rel_hum_pct),
            solar_w_m2: finite(record.solar_w_m2),
        });
    }

    tracing::debug!(rows = observations.len(), "read weather records");
    Ok(observations)
}

/// Read hourly weather records from a CSV file.
pub fn load_weather_csv(path: &Path) -> WeatherResult<Vec<WeatherObservation>> {
    let file = File::open(path)?;
    read_weather_csv(BufReader::new(file))
}
