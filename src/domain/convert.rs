//! Temperature conversion

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Offset between the Fahrenheit and Rankine scales (absolute zero in °F).
const RANKINE_OFFSET: f64 = 459.67;

/// Convert degrees Fahrenheit to degrees Celsius by the direct formula.
///
/// Pure and total over finite floats; no rounding, no clamping.
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert degrees Fahrenheit to degrees Celsius through Kelvin.
///
/// Alternative route used to cross-check [`to_celsius`]; the two agree to
/// within 1e-6.
pub fn to_celsius_via_kelvin(fahrenheit: f64) -> f64 {
    let kelvin = (fahrenheit + RANKINE_OFFSET) * 5.0 / 9.0;
    kelvin - KELVIN_OFFSET
}

/// Inverse of [`to_celsius`].
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
