//! # Domain Models
//!
//! Canonical types for currency feed data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CurrencyId`] | Validated feed identifier (`R01235`) |
//! | [`CurrencyRecord`] | One feed entry: id, rate text, display name |
//! | [`RateEntry`] | `(rate, name)` pair stored in a result |
//! | [`CurrencyResult`] | Identifier to `(rate, name)` mapping returned by a fetch |
//! | [`FeedSnapshot`] | Whole parsed feed document |
//!
//! Rates are never parsed into numbers: the feed writes them with a decimal
//! comma (`"75,1234"`) and every layer passes that text through unchanged.

mod currency_id;
mod models;

pub use currency_id::CurrencyId;
pub use models::{CurrencyRecord, CurrencyResult, FeedSnapshot, RateEntry};
