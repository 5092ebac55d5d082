//! Amount type for non-negative money quantities
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. A record carries two of these: one for income, one for expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an Amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "40", "40.5", "1,050.25". Negative values are rejected;
    /// income and expense are directional by field, not by sign.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim().replace(',', "");

        if s.is_empty() || s.starts_with('-') {
            return Err(AmountParseError::InvalidFormat(s));
        }

        let cents = if let Some((units_str, frac_str)) = s.split_once('.') {
            // ASCII digits only, so byte slicing below cannot split a character
            if !frac_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(AmountParseError::InvalidFormat(s));
            }

            let units: i64 = units_str
                .parse()
                .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?;

            // Pad or truncate the fraction to 2 digits
            let frac: i64 = match frac_str.len() {
                0 => 0,
                1 => {
                    frac_str
                        .parse::<i64>()
                        .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?
                        * 10
                }
                _ => frac_str[..2]
                    .parse()
                    .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?,
            };

            units
                .checked_mul(100)
                .and_then(|c| c.checked_add(frac))
                .ok_or_else(|| AmountParseError::InvalidFormat(s.clone()))?
        } else {
            s.parse::<i64>()
                .map_err(|_| AmountParseError::InvalidFormat(s.clone()))?
                .checked_mul(100)
                .ok_or_else(|| AmountParseError::InvalidFormat(s.clone()))?
        };

        Ok(Self(cents))
    }

    /// Format with en-US thousands grouping and two decimals, e.g. "1,050.25"
    pub fn grouped(&self) -> String {
        format!("{}.{:02}", group_thousands(self.units()), self.cents_part())
    }

    /// The plain decimal-string form with trailing zeros trimmed
    ///
    /// 40.00 renders as "40" and 40.50 as "40.5". The free-text filter matches
    /// against this form, so searching "40" matches an expense of 40.00 while
    /// searching "40.00" does not.
    pub fn plain_string(&self) -> String {
        if self.0 % 100 == 0 {
            format!("{}", self.units())
        } else if self.0 % 10 == 0 {
            format!("{}.{}", self.units(), self.cents_part() / 10)
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Insert commas every three digits from the right
pub(crate) fn group_thousands(n: i64) -> String {
    let (sign, digits) = if n < 0 {
        ("-", n.unsigned_abs().to_string())
    } else {
        ("", n.to_string())
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grouped())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
