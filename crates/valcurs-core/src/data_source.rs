//! Currency source trait and its error type.
//!
//! [`CurrencySource`] is the single capability every layer of the pipeline
//! implements: the feed adapter produces a [`CurrencyResult`], decorators wrap
//! another source and either pass its output through or render it.
//!
//! # Example
//!
//! ```rust,ignore
//! use valcurs_core::{CbrAdapter, CsvDecorator, CurrencyId, CurrencySource};
//!
//! async fn print_csv() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = CsvDecorator::new(CbrAdapter::default());
//!     let ids = CurrencyId::parse_all(["R01239", "R01235"])?;
//!     println!("{}", source.fetch(&ids).await?);
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::CurrencyId;

/// Boxed future returned by [`CurrencySource::fetch`].
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// Source-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// Transport failure, timeout or non-success HTTP status.
    Unavailable,
    /// Feed body is empty or not a readable `ValCurs` document.
    MalformedFeed,
    /// Configuration rejected before any request is sent, e.g. a non-http(s) feed url.
    InvalidRequest,
    /// A decorator could not render the wrapped result.
    Render,
}

/// Structured error propagated unchanged through every decorator layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn malformed_feed(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::MalformedFeed,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Render,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::MalformedFeed => "source.malformed_feed",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::Render => "source.render",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Fetch currency data by identifier list.
///
/// Implemented by the feed adapter and by every decorator. A decorator owns
/// the source it wraps and calls its `fetch` exactly once per call.
///
/// # Errors
///
/// Returns [`SourceError`] when the feed cannot be reached or parsed, or when
/// a rendering layer cannot serialize the result. Identifiers missing from
/// the feed are not an error; they are left out of the output.
pub trait CurrencySource: Send + Sync {
    /// Value handed to the caller: a [`CurrencyResult`](crate::CurrencyResult)
    /// or a rendered `String`.
    type Output: Send;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, Self::Output>;
}

impl<S> CurrencySource for Box<S>
where
    S: CurrencySource + ?Sized,
{
    type Output = S::Output;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, Self::Output> {
        (**self).fetch(ids)
    }
}
