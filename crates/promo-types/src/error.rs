use std::fmt;

/// Result type for promo-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building domain values
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A date field could not be parsed
    InvalidDate(String),

    /// End date is not after the start date
    InvalidDateRange { start: String, end: String },

    /// Campaign id is not a base-36 identifier
    InvalidCampaignId(String),

    /// Money amount is negative, empty or not a number
    InvalidAmount(String),

    /// CPM must be a positive number of cents
    InvalidCpm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(value) => write!(f, "Invalid date: '{}'", value),
            Error::InvalidDateRange { start, end } => {
                write!(f, "End date {} must be after start date {}", end, start)
            }
            Error::InvalidCampaignId(value) => write!(f, "Invalid campaign id: '{}'", value),
            Error::InvalidAmount(value) => write!(f, "Invalid amount: '{}'", value),
            Error::InvalidCpm(value) => write!(f, "Invalid CPM: '{}'", value),
        }
    }
}

impl std::error::Error for Error {}
