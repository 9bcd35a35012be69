// ============================================================================
// Precision Configuration
// Runs in its own process so the global setting starts unset
// ============================================================================

use battery_roi::numeric::{
    configure_precision, precision, Amount, NumericError, PrecisionConfig, RoundingMode,
};

#[test]
fn precision_is_configured_once() {
    assert_eq!(precision(), PrecisionConfig::default());

    assert_eq!(
        configure_precision(PrecisionConfig::new(0, RoundingMode::HalfUp)),
        Err(NumericError::InvalidInput)
    );

    configure_precision(PrecisionConfig::new(6, RoundingMode::HalfUp)).unwrap();
    assert_eq!(precision().significant_digits, 6);

    assert_eq!(
        configure_precision(PrecisionConfig::default()),
        Err(NumericError::AlreadyConfigured)
    );

    // 2 / 3 at six significant digits, half-up
    let third = Amount::from_integer(2)
        .checked_div(Amount::from_integer(3))
        .unwrap();
    assert_eq!(third, "0.666667".parse().unwrap());
}
