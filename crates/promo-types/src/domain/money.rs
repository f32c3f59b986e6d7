use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dollar amount as entered in the bid field.
///
/// Bids are free-form decimals, so the value is kept as `f64` and only
/// rounded when displayed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dollars(f64);

impl Dollars {
    pub const ZERO: Dollars = Dollars(0.0);

    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }
        Ok(Self(amount))
    }

    /// Parse a form value such as `50`, `50.25` or `$50`.
    pub fn parse(value: &str) -> Result<Self> {
        let cleaned = value.trim().trim_start_matches('$').replace(',', "");
        let amount: f64 = cleaned
            .parse()
            .map_err(|_| Error::InvalidAmount(value.to_string()))?;
        Self::new(amount)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    pub fn scaled(self, factor: f64) -> Dollars {
        Dollars(self.0 * factor)
    }
}

impl fmt::Display for Dollars {
    /// Bids render as entered (`$50`, `$12.5`), matching the table cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::str::FromStr for Dollars {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Cost per thousand impressions, stored in cents. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Cpm(u32);

impl Cpm {
    pub fn from_cents(cents: u32) -> Result<Self> {
        if cents == 0 {
            return Err(Error::InvalidCpm(cents.to_string()));
        }
        Ok(Self(cents))
    }

    pub fn parse(value: &str) -> Result<Self> {
        let cents: u32 = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCpm(value.to_string()))?;
        Self::from_cents(cents)
    }

    pub fn cents(self) -> u32 {
        self.0
    }

    pub fn dollars(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u32> for Cpm {
    type Error = Error;

    fn try_from(cents: u32) -> Result<Self> {
        Self::from_cents(cents)
    }
}

impl From<Cpm> for u32 {
    fn from(cpm: Cpm) -> Self {
        cpm.0
    }
}

impl fmt::Display for Cpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cpm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_parse_accepts_currency_prefix() {
        assert_eq!(Dollars::parse("$50").unwrap().amount(), 50.0);
        assert_eq!(Dollars::parse("1,250.5").unwrap().amount(), 1250.5);
    }

    #[test]
    fn test_dollars_rejects_negative_and_nan() {
        assert!(Dollars::parse("-3").is_err());
        assert!(Dollars::parse("abc").is_err());
        assert!(Dollars::new(f64::NAN).is_err());
    }

    #[test]
    fn test_dollars_display_keeps_entered_precision() {
        assert_eq!(Dollars::parse("50").unwrap().to_string(), "$50");
        assert_eq!(Dollars::parse("12.5").unwrap().to_string(), "$12.5");
    }

    #[test]
    fn test_cpm_rejects_zero() {
        assert!(matches!(Cpm::from_cents(0), Err(Error::InvalidCpm(_))));
        assert_eq!(Cpm::parse("250").unwrap().dollars(), 2.5);
    }

    #[test]
    fn test_cpm_deserialize_validates() {
        let ok: Cpm = serde_json::from_str("125").unwrap();
        assert_eq!(ok.cents(), 125);
        assert!(serde_json::from_str::<Cpm>("0").is_err());
    }
}
