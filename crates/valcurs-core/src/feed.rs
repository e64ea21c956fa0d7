//! `ValCurs` XML document parsing.
//!
//! ```xml
//! <ValCurs Date="01.01.2025" name="Foreign Currency Market">
//!     <Valute ID="R01235">
//!         <NumCode>840</NumCode>
//!         <CharCode>USD</CharCode>
//!         <Nominal>1</Nominal>
//!         <Name>Доллар США</Name>
//!         <Value>101,9146</Value>
//!     </Valute>
//! </ValCurs>
//! ```
//!
//! Only `ID`, `Name` and `Value` are carried into [`CurrencyRecord`]; the
//! other children are ignored.

use serde::Deserialize;

use crate::data_source::SourceError;
use crate::{CurrencyId, CurrencyRecord, FeedSnapshot};

#[derive(Debug, Deserialize)]
struct ValCursDocument {
    #[serde(rename = "@Date", default)]
    date: Option<String>,
    #[serde(rename = "@name", default)]
    name: Option<String>,
    #[serde(rename = "Valute", default)]
    valutes: Vec<ValuteElement>,
}

#[derive(Debug, Deserialize)]
struct ValuteElement {
    #[serde(rename = "@ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Parse a decoded feed body.
///
/// # Errors
///
/// [`SourceError::malformed_feed`] for an empty body or XML that does not
/// deserialize, including a `Valute` missing its `ID`, `Name` or `Value`.
/// `ID` values are kept verbatim. A root element without `Valute` children
/// is valid and yields no records.
pub fn parse_feed(body: &str) -> Result<FeedSnapshot, SourceError> {
    if body.trim().is_empty() {
        return Err(SourceError::malformed_feed("cbr feed body is empty"));
    }

    let document: ValCursDocument = quick_xml::de::from_str(body)
        .map_err(|e| SourceError::malformed_feed(format!("failed to parse cbr feed: {}", e)))?;

    let records = document
        .valutes
        .into_iter()
        .map(|valute| {
            CurrencyRecord::new(CurrencyId::from_feed(valute.id), valute.value, valute.name)
        })
        .collect();

    Ok(FeedSnapshot {
        date: document.date,
        name: document.name,
        records,
    })
}
