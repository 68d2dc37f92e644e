//! Card prices.
//!
//! The catalog publishes prices as decimal strings (`"1.50"`) per currency,
//! any of which may be null. `Price` keeps the amount as an exact count of
//! hundredths so totals never pick up floating-point drift.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A non-negative decimal amount with two fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Largest representable amount. Totals saturate here.
    pub const MAX: Price = Price(u64::MAX);

    /// Create a price from hundredths (`150` is `1.50`).
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount in hundredths.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Approximate floating-point value, for display layers that need one.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at `Price::MAX`.
    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

/// Error returned when a price string is not a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid price amount: {0:?}")]
pub struct PriceParseError(pub String);

impl FromStr for Price {
    type Err = PriceParseError;

    /// Parses `"3"`, `"0.5"`, `"1.50"`, `"2.255"`; digits past the second
    /// decimal place round half-up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PriceParseError(s.to_string());
        let trimmed = s.trim();
        let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digits: Vec<u64> = frac.bytes().map(|b| u64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|&d| d >= 5);

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .ok_or_else(invalid)?;
        Ok(Price(cents))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal price string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                v.checked_mul(100)
                    .map(Price)
                    .ok_or_else(|| E::custom("price out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                if v.is_finite() && v >= 0.0 && v * 100.0 < u64::MAX as f64 {
                    Ok(Price((v * 100.0).round() as u64))
                } else {
                    Err(E::custom("price must be a non-negative number"))
                }
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

/// Currencies the catalog quotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    Usd,
    UsdFoil,
    Eur,
    EurFoil,
    Tix,
}

impl Currency {
    /// Suffix used when showing an amount in this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd | Currency::UsdFoil => "$",
            Currency::Eur | Currency::EurFoil => "€",
            Currency::Tix => "tix",
        }
    }
}

/// Per-currency prices; `None` where the catalog has no quote.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub usd: Option<Price>,
    #[serde(default)]
    pub usd_foil: Option<Price>,
    #[serde(default)]
    pub eur: Option<Price>,
    #[serde(default)]
    pub eur_foil: Option<Price>,
    #[serde(default)]
    pub tix: Option<Price>,
}

impl Prices {
    /// Price in the given currency.
    #[must_use]
    pub fn get(&self, currency: Currency) -> Option<Price> {
        match currency {
            Currency::Usd => self.usd,
            Currency::UsdFoil => self.usd_foil,
            Currency::Eur => self.eur,
            Currency::EurFoil => self.eur_foil,
            Currency::Tix => self.tix,
        }
    }

    pub fn set(&mut self, currency: Currency, price: Option<Price>) {
        let slot = match currency {
            Currency::Usd => &mut self.usd,
            Currency::UsdFoil => &mut self.usd_foil,
            Currency::Eur => &mut self.eur,
            Currency::EurFoil => &mut self.eur_foil,
            Currency::Tix => &mut self.tix,
        };
        *slot = price;
    }

    /// First available quote, trying `primary` then `fallback`.
    #[must_use]
    pub fn preferred(&self, primary: Currency, fallback: Currency) -> Option<(Price, Currency)> {
        self.get(primary)
            .map(|p| (p, primary))
            .or_else(|| self.get(fallback).map(|p| (p, fallback)))
    }
}
