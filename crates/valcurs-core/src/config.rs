//! Feed endpoint configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `VALCURS_FEED_URL` | [`DEFAULT_FEED_URL`] | Feed endpoint |
//! | `VALCURS_TIMEOUT_MS` | `10000` | Transport timeout |
//!
//! The reference date has no environment variable; when unset the feed
//! serves the latest published rates.

use time::macros::format_description;
use time::Date;

use crate::ValidationError;

pub const DEFAULT_FEED_URL: &str = "https://www.cbr.ru/scripts/XML_daily.asp";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const FEED_URL_ENV: &str = "VALCURS_FEED_URL";
pub const TIMEOUT_MS_ENV: &str = "VALCURS_TIMEOUT_MS";

/// Where and how the feed is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
    pub date: Option<Date>,
    pub timeout_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_FEED_URL),
            date: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl FeedConfig {
    /// Defaults overridden by `VALCURS_*` environment variables.
    ///
    /// An unparsable timeout falls back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var(FEED_URL_ENV).unwrap_or(defaults.url),
            timeout_ms: std::env::var(TIMEOUT_MS_ENV)
                .ok()
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.timeout_ms),
            date: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full request URL, with `date_req=dd/mm/yyyy` when a date is set.
    pub fn request_url(&self) -> String {
        let Some(date) = self.date else {
            return self.url.clone();
        };

        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}date_req={}",
            self.url,
            separator,
            urlencoding::encode(&format_feed_date(date))
        )
    }
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        ValidationError::InvalidDate {
            value: input.to_owned(),
        }
    })
}

fn format_feed_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}
