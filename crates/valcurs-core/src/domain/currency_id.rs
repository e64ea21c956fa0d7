use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_CURRENCY_ID_LEN: usize = 16;

/// Feed-assigned currency identifier (e.g. `R01235`), not an ISO code.
///
/// Matching against feed entries is exact and case-sensitive: `r01239` does
/// not select the feed's `R01239`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyId(String);

impl CurrencyId {
    /// Parse a requested identifier, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCurrencyId);
        }

        let len = trimmed.chars().count();
        if len > MAX_CURRENCY_ID_LEN {
            return Err(ValidationError::CurrencyIdTooLong {
                len,
                max: MAX_CURRENCY_ID_LEN,
            });
        }

        for (index, ch) in trimmed.chars().enumerate() {
            if ch.is_whitespace() || ch.is_control() {
                return Err(ValidationError::CurrencyIdInvalidChar { ch, index });
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Wrap an `ID` attribute exactly as the feed wrote it.
    pub(crate) fn from_feed(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse a list of raw identifiers, failing on the first invalid one.
    pub fn parse_all<I, T>(inputs: I) -> Result<Vec<Self>, ValidationError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|raw| Self::parse(raw.as_ref()))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CurrencyId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CurrencyId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CurrencyId> for String {
    fn from(value: CurrencyId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_but_keeps_case() {
        let parsed = CurrencyId::parse(" r01235 ").expect("id should parse");
        assert_eq!(parsed.as_str(), "r01235");
    }

    #[test]
    fn accepts_punctuated_ids() {
        let parsed = CurrencyId::parse("R01_X").expect("id should parse");
        assert_eq!(parsed.as_str(), "R01_X");
    }

    #[test]
    fn feed_ids_are_kept_verbatim() {
        assert_eq!(CurrencyId::from_feed("r01_x ").as_str(), "r01_x ");
    }

    #[test]
    fn accepts_suffixed_feed_ids() {
        let parsed = CurrencyId::parse("R01720A").expect("id should parse");
        assert_eq!(parsed.to_string(), "R01720A");
    }

    #[test]
    fn rejects_empty_id() {
        let err = CurrencyId::parse("   ").expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyCurrencyId);
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = CurrencyId::parse("R01 235").expect_err("must fail");
        assert_eq!(err, ValidationError::CurrencyIdInvalidChar { ch: ' ', index: 3 });
    }

    #[test]
    fn rejects_overlong_ids() {
        let err = CurrencyId::parse("R0123456789012345").expect_err("must fail");
        assert!(matches!(err, ValidationError::CurrencyIdTooLong { len: 17, .. }));
    }

    #[test]
    fn parse_all_stops_at_first_invalid_id() {
        let err = CurrencyId::parse_all(["R01239", "", "R01235"]).expect_err("must fail");
        assert_eq!(err, ValidationError::EmptyCurrencyId);
    }
}
