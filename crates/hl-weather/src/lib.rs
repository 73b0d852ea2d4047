//! hl-weather: hourly weather ingestion and day/night target assignment.
//!
//! - [`WeatherObservation`]: one parsed hourly record (timestamp, temperature, RH, solar)
//! - [`ClimatePolicy`]: day and night [`PeriodTargets`] chosen by the grower
//! - [`WeatherRow`]: an observation classified as day or night, carrying the targets
//!   of its period
//!
//! Numeric cells that are empty or unparseable become `None`; deciding what to do with
//! incomplete rows is left to the load models.

pub mod error;
pub mod policy;
pub mod prepare;
pub mod record;

pub use error::{WeatherError, WeatherResult};
pub use policy::{ClimatePolicy, DayPeriod, PeriodTargets};
pub use prepare::{WeatherRow, WeatherSummary, prepare_weather, summarize};
pub use record::{
    REQUIRED_COLUMNS, WeatherObservation, load_weather_csv, parse_timestamp, read_weather_csv,
};
