//! # valcurs core
//!
//! Currency rates from the Central Bank of Russia daily XML feed, rendered
//! through a chain of decorators.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Feed source adapter ([`CbrAdapter`]) |
//! | [`config`] | Feed endpoint configuration |
//! | [`data_source`] | [`CurrencySource`] trait and [`SourceError`] |
//! | [`decorators`] | Pass-through, JSON and CSV decorators |
//! | [`display`] | Display driver writing a fetch result to a stream |
//! | [`domain`] | Identifiers, records and result mapping |
//! | [`error`] | Validation and aggregate errors |
//! | [`feed`] | `ValCurs` XML parsing |
//! | [`http_client`] | HTTP client abstraction |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / caller   │
//! └────────┬────────┘
//!          │ fetch(ids)
//!          ▼
//! ┌─────────────────┐
//! │ JsonDecorator / │  render CurrencyResult -> String
//! │ CsvDecorator    │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Decorator (0..n)│  pass-through
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ CbrAdapter      │────▶│ HTTP Client      │
//! │ (ValCurs feed)  │     │ (reqwest/static) │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use valcurs_core::{CbrAdapter, CurrencyId, CurrencySource, JsonDecorator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = JsonDecorator::new(CbrAdapter::default());
//!     let ids = CurrencyId::parse_all(["R01239", "R01235"])?;
//!     println!("{}", source.fetch(&ids).await?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod decorators;
pub mod display;
pub mod domain;
pub mod error;
pub mod feed;
pub mod http_client;

pub use adapters::CbrAdapter;

pub use config::{parse_reference_date, FeedConfig, DEFAULT_FEED_URL, DEFAULT_TIMEOUT_MS};

pub use data_source::{CurrencySource, FetchFuture, SourceError, SourceErrorKind};

pub use decorators::{render_csv, render_json, CsvDecorator, Decorator, JsonDecorator, CSV_HEADER};

pub use display::{default_currency_ids, show_currencies, DEFAULT_CURRENCY_IDS};

pub use domain::{CurrencyId, CurrencyRecord, CurrencyResult, FeedSnapshot, RateEntry};

pub use error::{CoreError, ValidationError};

pub use feed::parse_feed;

pub use http_client::{
    decode_body, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};
