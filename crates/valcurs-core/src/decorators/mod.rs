//! Decorators over a [`CurrencySource`].
//!
//! Each decorator owns the source it wraps, delegates `fetch` to it and
//! transforms the returned value on the way up:
//!
//! | Decorator | Output | Transform |
//! |-----------|--------|-----------|
//! | [`Decorator`] | same as inner | none (pass-through) |
//! | [`JsonDecorator`] | `String` | `{id: [rate, name]}` JSON, four-space indent |
//! | [`CsvDecorator`] | `String` | `ID;Rate;Name` rows sorted by id |
//!
//! Pass-through layers wrap anything, rendered output included. The
//! rendering decorators need an inner layer that still yields a
//! [`CurrencyResult`](crate::CurrencyResult).

mod delimited;
mod json;

pub use self::delimited::{render_csv, CsvDecorator, CSV_HEADER};
pub use self::json::{render_json, JsonDecorator};

use crate::data_source::{CurrencySource, FetchFuture};
use crate::CurrencyId;

/// Pass-through decorator: returns the wrapped source's output unchanged.
#[derive(Debug, Clone)]
pub struct Decorator<S> {
    inner: S,
}

impl<S> Decorator<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> CurrencySource for Decorator<S>
where
    S: CurrencySource,
{
    type Output = S::Output;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, Self::Output> {
        self.inner.fetch(ids)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::data_source::{CurrencySource, FetchFuture, SourceError};
    use crate::{CurrencyId, CurrencyRecord, CurrencyResult, FeedSnapshot};

    /// In-memory source over a fixed feed that counts its calls.
    pub struct FixedSource {
        snapshot: FeedSnapshot,
        failure: Option<SourceError>,
        calls: AtomicUsize,
    }

    impl FixedSource {
        pub fn euro_and_dollar() -> Self {
            let id = |raw| CurrencyId::parse(raw).expect("valid id");
            Self {
                snapshot: FeedSnapshot {
                    date: Some(String::from("01.01.2025")),
                    name: None,
                    records: vec![
                        CurrencyRecord::new(id("R01239"), "105,0464", "Евро"),
                        CurrencyRecord::new(id("R01235"), "101,9146", "Доллар США"),
                    ],
                },
                failure: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(error: SourceError) -> Self {
            Self {
                failure: Some(error),
                ..Self::euro_and_dollar()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CurrencySource for FixedSource {
        type Output = CurrencyResult;

        fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, CurrencyResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = match &self.failure {
                Some(error) => Err(error.clone()),
                None => Ok(self.snapshot.clone().select(ids)),
            };
            Box::pin(async move { outcome })
        }
    }

    pub fn ids(raw: &[&str]) -> Vec<CurrencyId> {
        CurrencyId::parse_all(raw).expect("valid ids")
    }
}
