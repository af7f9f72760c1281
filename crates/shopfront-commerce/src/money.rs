//! Money type for representing monetary values.
//!
//! Prices arrive from the CMS as decimal numbers (`99.99`). They are held as
//! integer cents so cart totals add up exactly. The catalog carries no
//! currency field, so every amount is USD.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Storefront currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// ISO code ("USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in the smallest unit of its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use shopfront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(99.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 9999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_units() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_units() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    ///
    /// Formatting works on the integer amount, so large values never pick up
    /// float rounding noise.
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let units = self.currency.minor_units() as u64;
        format!("{}{}.{:0places$}", sign, abs / units, abs % units)
    }

    /// Checked addition, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, saturating at the representable bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition.
    fn add(self, other: Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter that puts a USD [`Money`] on the wire as a plain decimal
/// number, matching the catalog JSON (`"price": 99.99`).
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::USD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(99.99, Currency::USD);
        assert_eq!(m.amount_cents, 9999);

        let m = Money::from_decimal(129.99, Currency::USD);
        assert_eq!(m.amount_cents, 12999);

        let m = Money::from_decimal(0.1 + 0.2, Currency::USD);
        assert_eq!(m.amount_cents, 30);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::USD);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(19998, Currency::USD).display(), "$199.98");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(0, Currency::USD).display(), "$0.00");
        assert_eq!(Money::new(123_456_789, Currency::USD).to_string(), "$1234567.89");
    }

    #[test]
    fn test_money_display_negative() {
        assert_eq!(Money::new(-250, Currency::USD).display_amount(), "-2.50");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::new(1000, Currency::USD) + Money::new(500, Currency::USD);
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_try_add_overflow() {
        let max = Money::new(i64::MAX, Currency::USD);
        assert!(max.try_add(&Money::new(1, Currency::USD)).is_none());
        assert_eq!((max + Money::new(1, Currency::USD)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
        assert_eq!(m.saturating_multiply(2).amount_cents, i64::MAX);
    }

    #[test]
    fn test_decimal_serde_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "decimal")]
            price: Money,
        }

        let json = serde_json::to_string(&Priced {
            price: Money::new(9999, Currency::USD),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":99.99}"#);

        let parsed: Priced = serde_json::from_str(r#"{"price":79.99}"#).unwrap();
        assert_eq!(parsed.price.amount_cents, 7999);
    }
}
