//! Meteorological approximations shared by every reading.
//!
//! All functions take raw, unrounded values. Only the final result is rounded.

/// Rounds to the nearest integer, `.5` ties going towards positive infinity.
///
/// `2.5` gives `3` and `-2.5` gives `-2`. Out of range values saturate.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    // `value - floor` is exact, so `0.49999999999999994` stays below the tie
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i32
}

/// Vapor pressure in hPa at the given temperature in °C (Magnus-Tetens).
fn vapor_pressure(celsius: f64) -> f64 {
    6.11 * 10f64.powf((7.5 * celsius) / (237.3 + celsius))
}

/// Relative humidity in percent, unrounded.
pub fn humidity_ratio(temperature: f64, dew_point: f64) -> f64 {
    100.0 * vapor_pressure(dew_point) / vapor_pressure(temperature)
}

pub fn relative_humidity(temperature: f64, dew_point: f64) -> i32 {
    round_half_up(humidity_ratio(temperature, dew_point))
}

const C1: f64 = -8.78469475556;
const C2: f64 = 1.61139411;
const C3: f64 = 2.33854883889;
const C4: f64 = -0.14611605;
const C5: f64 = -0.012308094;
const C6: f64 = -0.0164248277778;
const C7: f64 = 0.002211732;
const C8: f64 = 0.00072546;
const C9: f64 = -0.000003582;

/// NWS heat index regression, fed with the Celsius temperature as is.
pub fn heat_index(temperature: f64, dew_point: f64) -> i32 {
    let t = temperature;
    let r = humidity_ratio(temperature, dew_point);
    round_half_up(
        C1 + C2 * t
            + C3 * r
            + C4 * t * r
            + C5 * t * t
            + C6 * r * r
            + C7 * t * t * r
            + C8 * t * r * r
            + C9 * t * t * r * r,
    )
}

/// Wind chill in °C, computed with the Fahrenheit formula.
///
/// `wind_speed` is in miles per hour.
pub fn wind_chill(temperature: f64, wind_speed: f64) -> i32 {
    let fahrenheit = 9.0 / 5.0 * temperature + 32.0;
    let wind = wind_speed.powf(0.16);
    let chill = 35.74 + 0.6215 * fahrenheit - 35.75 * wind + 0.4275 * fahrenheit * wind;
    round_half_up((chill - 32.0) * (5.0 / 9.0))
}
