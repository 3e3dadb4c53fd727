//! Tests for temperature conversion

use rstest::rstest;

use todokit::domain::convert::{to_celsius, to_celsius_via_kelvin, to_fahrenheit};

const TOLERANCE: f64 = 1e-6;

// ============================================================
// Fixpoint Tests
// ============================================================

#[test]
fn given_32_fahrenheit_when_converting_then_returns_zero_celsius() {
    // Given
    let input = 32.0;

    // When
    let celsius = to_celsius(input);

    // Then
    assert_eq!(celsius, 0.0);
}

#[test]
fn given_212_fahrenheit_when_converting_then_returns_100_celsius() {
    // Given
    let input = 212.0;

    // When
    let celsius = to_celsius(input);

    // Then
    assert_eq!(celsius, 100.0);
}

#[test]
fn given_minus_40_when_converting_then_scales_agree() {
    // -40 is the fixpoint where both scales read the same
    assert_eq!(to_celsius(-40.0), -40.0);
}

// ============================================================
// Alternative Route Tests
// ============================================================

#[rstest]
#[case(32.0)]
#[case(212.0)]
#[case(-40.0)]
#[case(98.6)]
#[case(0.0)]
fn given_any_temperature_when_converting_via_kelvin_then_agrees_with_formula(#[case] input: f64) {
    let direct = to_celsius(input);
    let via_kelvin = to_celsius_via_kelvin(input);

    assert!(
        (direct - via_kelvin).abs() < TOLERANCE,
        "routes disagree for {}: {} vs {}",
        input,
        direct,
        via_kelvin
    );
}

// ============================================================
// Round-Trip Tests
// ============================================================

#[rstest]
#[case(32.0)]
#[case(212.0)]
#[case(-459.67)]
#[case(98.6)]
#[case(1234.5)]
fn given_any_temperature_when_round_tripping_then_returns_original(#[case] input: f64) {
    let celsius = to_celsius(input);
    let back = to_fahrenheit(celsius);

    assert!(
        (back - input).abs() < TOLERANCE,
        "round trip drifted for {}: got {}",
        input,
        back
    );
}
