use std::{
    fmt,
    hash::{Hash, Hasher},
};

use miette::Diagnostic;
use thiserror::Error;

use crate::{formula, WeatherReading};

/// A reading taken from a Stevenson screen.
///
/// Holds the air temperature and dew point in °C, the wind speed in mph and
/// the rain of the last 24 hours in mm. The values are validated once and
/// never change afterwards.
#[derive(Debug, Clone, Copy)]
pub struct StevensonReading {
    temperature: f64,
    dew_point: f64,
    wind_speed: f64,
    total_rain: i32,
}

/// The values a reading was built from, without any rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawValues {
    pub temperature: f64,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub total_rain: i32,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ReadingError {
    #[error("Invalid arguments: T = {temperature}, D = {dew_point}, v = {wind_speed}, rain = {total_rain}")]
    #[diagnostic(
        code(meteo_reading::invalid_reading),
        help("the temperature can't be below the dew point, wind speed and rain can't be negative")
    )]
    InvalidArgument {
        temperature: f64,
        dew_point: f64,
        wind_speed: f64,
        total_rain: i32,
    },
}

impl StevensonReading {
    pub fn new(
        temperature: f64,
        dew_point: f64,
        wind_speed: f64,
        total_rain: i32,
    ) -> Result<Self, ReadingError> {
        let finite = temperature.is_finite() && dew_point.is_finite() && wind_speed.is_finite();
        if !finite || temperature < dew_point || wind_speed < 0.0 || total_rain < 0 {
            tracing::debug!(
                temperature,
                dew_point,
                wind_speed,
                total_rain,
                "rejected reading"
            );
            return Err(ReadingError::InvalidArgument {
                temperature,
                dew_point,
                wind_speed,
                total_rain,
            });
        }

        Ok(Self {
            temperature,
            dew_point,
            wind_speed,
            total_rain,
        })
    }

    pub fn raw(&self) -> RawValues {
        RawValues {
            temperature: self.temperature,
            dew_point: self.dew_point,
            wind_speed: self.wind_speed,
            total_rain: self.total_rain,
        }
    }
}

impl WeatherReading for StevensonReading {
    fn temperature(&self) -> i32 {
        formula::round_half_up(self.temperature)
    }

    fn dew_point(&self) -> i32 {
        formula::round_half_up(self.dew_point)
    }

    fn wind_speed(&self) -> i32 {
        formula::round_half_up(self.wind_speed)
    }

    fn total_rain(&self) -> i32 {
        self.total_rain
    }

    fn relative_humidity(&self) -> i32 {
        formula::relative_humidity(self.temperature, self.dew_point)
    }

    fn heat_index(&self) -> i32 {
        formula::heat_index(self.temperature, self.dew_point)
    }

    fn wind_chill(&self) -> i32 {
        formula::wind_chill(self.temperature, self.wind_speed)
    }
}

impl fmt::Display for StevensonReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading: T = {}, D = {}, v = {}, rain = {}",
            self.temperature(),
            self.dew_point(),
            self.wind_speed(),
            self.total_rain()
        )
    }
}

// Compares the raw values. NaN never gets past `new`, so this is a total equivalence.
impl PartialEq for StevensonReading {
    fn eq(&self, other: &Self) -> bool {
        self.temperature == other.temperature
            && self.dew_point == other.dew_point
            && self.wind_speed == other.wind_speed
            && self.total_rain == other.total_rain
    }
}

impl Eq for StevensonReading {}

// Hashes the rounded values: equal readings always round the same way,
// different readings with the same display simply collide.
impl Hash for StevensonReading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.temperature().hash(state);
        self.dew_point().hash(state);
        self.wind_speed().hash(state);
        self.total_rain().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(reading: &StevensonReading) -> u64 {
        let mut hasher = DefaultHasher::new();
        reading.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn keeps_raw_values() {
        let reading = StevensonReading::new(9.4, 2.6, 8.5, 4).unwrap();
        assert_eq!(
            reading.raw(),
            RawValues {
                temperature: 9.4,
                dew_point: 2.6,
                wind_speed: 8.5,
                total_rain: 4,
            }
        );
        assert_eq!(reading.temperature(), 9);
        assert_eq!(reading.dew_point(), 3);
        assert_eq!(reading.wind_speed(), 9);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(StevensonReading::new(f64::NAN, 2.0, 9.0, 4).is_err());
        assert!(StevensonReading::new(9.0, f64::NAN, 9.0, 4).is_err());
        assert!(StevensonReading::new(9.0, 2.0, f64::NAN, 4).is_err());
        assert!(StevensonReading::new(f64::INFINITY, 2.0, 9.0, 4).is_err());
        assert!(StevensonReading::new(9.0, f64::NEG_INFINITY, 9.0, 4).is_err());
        assert!(StevensonReading::new(9.0, 2.0, f64::INFINITY, 4).is_err());
    }

    #[test]
    fn error_message_lists_inputs() {
        let err = StevensonReading::new(1.0, 2.0, 9.0, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments: T = 1, D = 2, v = 9, rain = 4"
        );
        assert_eq!(
            err.code().map(|code| code.to_string()),
            Some(String::from("meteo_reading::invalid_reading"))
        );
    }

    #[test]
    fn signed_zero_is_one_value() {
        let positive = StevensonReading::new(0.0, 0.0, 0.0, 0).unwrap();
        let negative = StevensonReading::new(-0.0, -0.0, -0.0, 0).unwrap();
        assert_eq!(positive, negative);
        assert_eq!(hash_of(&positive), hash_of(&negative));
        assert_eq!(negative.to_string(), "Reading: T = 0, D = 0, v = 0, rain = 0");
    }

    #[test]
    fn hash_follows_rounded_values() {
        let low = StevensonReading::new(9.2, 2.1, 8.6, 4).unwrap();
        let high = StevensonReading::new(8.7, 1.9, 9.4, 4).unwrap();
        assert_ne!(low, high);
        assert_eq!(hash_of(&low), hash_of(&high));
    }
}
