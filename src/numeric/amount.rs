// ============================================================================
// Decimal Amount
// Precision-bounded decimal arithmetic for energy and money
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::precision::precision;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal number rounded to the process-wide precision after every
/// operation.
///
/// Internally wraps a `rust_decimal::Decimal` (96-bit mantissa, up to 28
/// significant digits). The default precision keeps 20 significant digits
/// with half-up rounding, see [`super::PrecisionConfig`].
///
/// # Example
/// ```
/// use battery_roi::numeric::Amount;
///
/// let capacity: Amount = "15".parse().unwrap();
/// let efficiency: Amount = "0.95".parse().unwrap();
/// let usable = capacity.checked_mul(efficiency).unwrap();
/// assert_eq!(usable.to_string(), "14.25");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Amount(Decimal);

/// Round to the configured significant digits.
#[inline]
fn round(value: Decimal) -> NumericResult<Decimal> {
    let config = precision();
    value
        .round_sf_with_strategy(config.significant_digits, config.rounding.strategy())
        .ok_or(NumericError::PrecisionLoss)
}

impl Amount {
    /// Zero value
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// One (1.0)
    pub const ONE: Self = Self(Decimal::ONE);

    /// One hundred, the percent denominator
    pub const ONE_HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an integer value.
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create from a small mantissa and a scale at compile time, e.g.
    /// `from_raw_parts(3044, 2)` for 30.44.
    ///
    /// The scale must not exceed 28.
    #[inline]
    pub const fn from_raw_parts(mantissa: u32, scale: u32) -> Self {
        Self(Decimal::from_parts(mantissa, 0, 0, false, scale))
    }

    /// Create from a mantissa and a decimal scale, e.g. `(1370, 0)` or `(95, 2)`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the scale exceeds 28.
    #[inline]
    pub fn from_scaled(mantissa: i64, scale: u32) -> NumericResult<Self> {
        let value = Decimal::try_new(mantissa, scale).map_err(|_| NumericError::InvalidInput)?;
        round(value).map(Self)
    }

    /// Convert from `rust_decimal::Decimal`, rounding to the configured precision.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        round(value).map(Self)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The underlying decimal.
    #[inline]
    pub const fn to_decimal(self) -> Decimal {
        self.0
    }

    /// Convert to a native float.
    ///
    /// Only for the serialization boundary; never feed the result back into
    /// a calculation.
    pub fn to_f64(self) -> NumericResult<f64> {
        self.0.to_f64().ok_or(NumericError::PrecisionLoss)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Round to a fixed number of decimal places, half-up.
    ///
    /// Intended for display; calculations keep full precision.
    pub fn round_dp(self, decimal_places: u32) -> Self {
        Self(self.0.round_dp_with_strategy(
            decimal_places,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let sum = self.0.checked_add(rhs.0).ok_or({
            if rhs.0.is_sign_positive() {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        round(sum).map(Self)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let difference = self.0.checked_sub(rhs.0).ok_or({
            if rhs.0.is_sign_negative() {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })?;
        round(difference).map(Self)
    }

    /// Checked multiplication, rounded to the configured precision.
    ///
    /// # Errors
    /// Returns `Overflow` if the product does not fit in 96 bits.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = self.0.checked_mul(rhs.0).ok_or(NumericError::Overflow)?;
        round(product).map(Self)
    }

    /// Multiply by an integer.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        self.checked_mul(Self::from_integer(rhs))
    }

    /// Checked division, rounded to the configured precision.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient does not fit
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let quotient = self.0.checked_div(rhs.0).ok_or(NumericError::Overflow)?;
        round(quotient).map(Self)
    }

    /// Interpret `self` as a percentage and return the fraction (`self / 100`).
    #[inline]
    pub fn percent_to_ratio(self) -> NumericResult<Self> {
        self.checked_div(Self::ONE_HUNDRED)
    }

    /// Sum an iterator of amounts with overflow checking.
    pub fn checked_sum<I>(values: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::ZERO, |acc, value| acc.checked_add(value))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Amount {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Amount {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u32> for Amount {
    #[inline]
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self.0.normalize())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Amount {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "1370" -> 1370
    /// - "0.95" -> 0.95
    /// - "-0.001" -> -0.001
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let value = Decimal::from_str_exact(s)
            .or_else(|_| Decimal::from_str(s))
            .map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(value)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Energy in kilowatt-hours
pub type Kwh = Amount;

/// Power in kilowatts
pub type Kw = Amount;

/// Money in the major currency unit (kronor)
pub type Currency = Amount;

/// Price in minor currency units (öre) per kWh
pub type Ore = Amount;

/// Percentage in `0..=100`
pub type Percent = Amount;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_constants() {
        assert_eq!(Amount::ZERO.to_decimal(), Decimal::ZERO);
        assert_eq!(Amount::ONE.to_decimal(), Decimal::ONE);
        assert_eq!(Amount::ONE_HUNDRED, Amount::from_integer(100));
    }

    #[test]
    fn test_from_raw_parts() {
        const AVERAGE_MONTH: Amount = Amount::from_raw_parts(3044, 2);
        assert_eq!(AVERAGE_MONTH, amount("30.44"));
    }

    #[test]
    fn test_from_scaled() {
        let x = Amount::from_scaled(12345, 2).unwrap();
        assert_eq!(x, amount("123.45"));

        assert_eq!(
            Amount::from_scaled(1, 29),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_checked_add_sub() {
        let a = Amount::from_integer(100);
        let b = Amount::from_integer(30);
        assert_eq!(a.checked_add(b).unwrap(), Amount::from_integer(130));
        assert_eq!(b.checked_sub(a).unwrap(), Amount::from_integer(-70));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = amount("50000000000000000000000000000");
        assert_eq!(max.checked_add(max), Err(NumericError::Overflow));
        assert_eq!((-max).checked_sub(max), Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul() {
        // 15 × 0.95 × 0.97 × 0.85 = 11.749125
        let result = amount("15")
            .checked_mul(amount("0.95"))
            .and_then(|v| v.checked_mul(amount("0.97")))
            .and_then(|v| v.checked_mul(amount("0.85")))
            .unwrap();
        assert_eq!(result, amount("11.749125"));
    }

    #[test]
    fn test_checked_div_rounds_to_twenty_digits() {
        let third = Amount::ONE.checked_div(Amount::from_integer(3)).unwrap();
        assert_eq!(third.to_string(), "0.33333333333333333333");

        let two_thirds = Amount::from_integer(2)
            .checked_div(Amount::from_integer(3))
            .unwrap();
        // half-up on the 20th significant digit
        assert_eq!(two_thirds.to_string(), "0.66666666666666666667");
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            Amount::ONE.checked_div(Amount::ZERO),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_percent_to_ratio() {
        assert_eq!(amount("85").percent_to_ratio().unwrap(), amount("0.85"));
    }

    #[test]
    fn test_checked_sum() {
        let values = [amount("6570"), amount("3600"), amount("16440")];
        assert_eq!(Amount::checked_sum(values).unwrap(), amount("26610"));
        assert_eq!(Amount::checked_sum(std::iter::empty()).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_comparison() {
        let a = Amount::from_integer(100);
        let b = Amount::from_integer(50);

        assert!(a > b);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
        assert_eq!(amount("1.0"), amount("1.00"));
    }

    #[test]
    fn test_display() {
        assert_eq!(amount("123.4500").to_string(), "123.45");
        assert_eq!(Amount::ZERO.to_string(), "0");
        assert_eq!(amount("-0.1").to_string(), "-0.1");
        assert_eq!(format!("{:?}", amount("2.50")), "Amount(2.5)");
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(amount("2.8185").round_dp(3), amount("2.819"));
        assert_eq!(amount("-2.5").round_dp(0), amount("-3"));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("".parse::<Amount>(), Err(NumericError::InvalidInput));
        assert_eq!(
            "not_a_number".parse::<Amount>(),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(amount("6570").to_f64().unwrap(), 6570.0);
        assert_eq!(amount("0.25").to_f64().unwrap(), 0.25);
    }

    #[test]
    fn test_addition_is_commutative() {
        fn prop(a: i32, b: i32) -> bool {
            let (a, b) = (Amount::from(i64::from(a)), Amount::from(i64::from(b)));
            a.checked_add(b) == b.checked_add(a)
        }
        quickcheck(prop as fn(i32, i32) -> bool);
    }

    #[test]
    fn test_integer_cents_are_exact() {
        // Money in whole öre never drifts when summed and scaled back.
        fn prop(values: Vec<i32>) -> bool {
            let exact: i64 = values.iter().map(|v| i64::from(*v)).sum();
            let summed = Amount::checked_sum(
                values
                    .iter()
                    .map(|v| Amount::from_scaled(i64::from(*v), 2).unwrap()),
            )
            .unwrap();
            summed == Amount::from_scaled(exact, 2).unwrap()
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }
}
