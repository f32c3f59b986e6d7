use crate::{Cpm, Dollars, Error, Result, format_form_date};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn id36_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9a-z]+$").expect("static regex"))
}

/// Base-36 campaign identifier (`campaign_id36`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CampaignId(String);

impl CampaignId {
    pub fn parse(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        if !id36_pattern().is_match(&normalized) {
            return Err(Error::InvalidCampaignId(value.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Encode a numeric id in base 36.
    pub fn from_number(mut n: u64) -> Self {
        const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        if n == 0 {
            return Self("0".to_string());
        }
        let mut buf = Vec::new();
        while n > 0 {
            buf.push(DIGITS[(n % 36) as usize]);
            n /= 36;
        }
        buf.reverse();
        Self(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_number(&self) -> Option<u64> {
        u64::from_str_radix(&self.0, 36).ok()
    }
}

impl TryFrom<String> for CampaignId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CampaignId> for String {
    fn from(id: CampaignId) -> Self {
        id.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CampaignId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Delivery speed radio value, opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(String);

impl Speed {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self("standard".to_string())
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a campaign is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Targeting {
    #[default]
    Sitewide,
    Subreddit(String),
}

impl Targeting {
    /// Build from the hidden `targeting` field; empty means sitewide.
    pub fn from_field(value: &str) -> Self {
        let name = value.trim();
        if name.is_empty() {
            Targeting::Sitewide
        } else {
            Targeting::Subreddit(name.to_string())
        }
    }

    /// The lookup key used for impressions (empty string for sitewide).
    pub fn as_key(&self) -> &str {
        match self {
            Targeting::Sitewide => "",
            Targeting::Subreddit(name) => name,
        }
    }

    pub fn is_targeted(&self) -> bool {
        matches!(self, Targeting::Subreddit(_))
    }
}

impl From<String> for Targeting {
    fn from(value: String) -> Self {
        Targeting::from_field(&value)
    }
}

impl From<Targeting> for String {
    fn from(targeting: Targeting) -> Self {
        targeting.as_key().to_string()
    }
}

impl fmt::Display for Targeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Targeting::Sitewide => f.write_str("sitewide"),
            Targeting::Subreddit(name) => f.write_str(name),
        }
    }
}

/// Flag set sent by the server with every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignFlags {
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub live: bool,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub sponsor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_live_url: Option<String>,
}

/// Validated `[start, end)` date range; end is strictly after start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidDateRange {
                start: format_form_date(start),
                end: format_form_date(end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> u32 {
        (self.end - self.start).num_days() as u32
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d < self.end)
    }
}

/// One row of the existing-campaigns table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRow {
    pub id: CampaignId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration: u32,
    pub bid: Dollars,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<Dollars>,
    pub cpm: Cpm,
    pub speed: Speed,
    #[serde(default)]
    pub targeting: Targeting,
    #[serde(default)]
    pub flags: CampaignFlags,
    /// Set once a freebie request went out; hides the free control.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub free_requested: bool,
}

impl CampaignRow {
    pub fn range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Visible cells in table order: start, end, duration, bid, speed, targeting.
    pub fn cells(&self) -> [String; 6] {
        [
            format_form_date(self.start_date),
            format_form_date(self.end_date),
            self.duration.to_string(),
            self.bid.to_string(),
            self.speed.to_string(),
            self.targeting.as_key().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_id_roundtrips_base36() {
        let id = CampaignId::from_number(1_000_000);
        assert_eq!(id.as_str(), "lfls");
        assert_eq!(id.to_number(), Some(1_000_000));
        assert_eq!(CampaignId::from_number(0).as_str(), "0");
    }

    #[test]
    fn test_campaign_id_rejects_symbols() {
        assert!(CampaignId::parse("ab-12").is_err());
        assert!(CampaignId::parse("").is_err());
        assert_eq!(CampaignId::parse("AbC").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_targeting_from_empty_field_is_sitewide() {
        assert_eq!(Targeting::from_field("  "), Targeting::Sitewide);
        assert_eq!(
            Targeting::from_field("pics"),
            Targeting::Subreddit("pics".to_string())
        );
        assert!(!Targeting::Sitewide.is_targeted());
        assert_eq!(Targeting::Sitewide.as_key(), "");
    }

    #[test]
    fn test_date_range_requires_end_after_start() {
        let start = NaiveDate::from_ymd_opt(2013, 5, 1).unwrap();
        assert!(DateRange::new(start, start).is_err());
        let range = DateRange::new(start, NaiveDate::from_ymd_opt(2013, 5, 4).unwrap()).unwrap();
        assert_eq!(range.days(), 3);
        assert_eq!(range.dates().count(), 3);
    }

    #[test]
    fn test_row_deserializes_with_missing_flags() {
        let row: CampaignRow = serde_json::from_str(
            r#"{"id":"1a","start_date":"2013-05-01","end_date":"2013-05-04",
                "duration":3,"bid":50.0,"cpm":250,"speed":"standard","targeting":"pics"}"#,
        )
        .unwrap();
        assert_eq!(row.flags, CampaignFlags::default());
        assert_eq!(row.targeting, Targeting::Subreddit("pics".to_string()));
        assert_eq!(row.cells()[3], "$50");
    }
}
