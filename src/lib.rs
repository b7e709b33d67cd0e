//! Weather station readings and the quantities derived from them.
//!
//! ```
//! use meteo_reading::{StevensonReading, WeatherReading};
//!
//! let reading = StevensonReading::new(9.0, 2.0, 9.0, 4).unwrap();
//! assert_eq!(reading.relative_humidity(), 61);
//! assert_eq!(reading.to_string(), "Reading: T = 9, D = 2, v = 9, rain = 4");
//! ```

use std::fmt;

pub mod formula;
mod parse;
mod reading;

pub use parse::ParseError;
pub use reading::{RawValues, ReadingError, StevensonReading};

/// What any weather reading can tell, whatever station format it comes from.
///
/// Every value is rounded to the nearest integer, `.5` going up.
/// Derived quantities are computed on the unrounded inputs.
pub trait WeatherReading: fmt::Display {
    /// Air temperature in °C.
    fn temperature(&self) -> i32;

    /// Dew point in °C.
    fn dew_point(&self) -> i32;

    /// Wind speed in mph.
    fn wind_speed(&self) -> i32;

    /// Rain of the last 24 hours in mm.
    fn total_rain(&self) -> i32;

    /// Relative humidity in %.
    fn relative_humidity(&self) -> i32;

    /// Heat index in °C.
    fn heat_index(&self) -> i32;

    /// Wind chill in °C.
    fn wind_chill(&self) -> i32;
}
