use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::data_source::{CurrencySource, FetchFuture, SourceError};
use crate::{CurrencyId, CurrencyResult};

pub const CSV_HEADER: [&str; 3] = ["ID", "Rate", "Name"];

/// Renders the wrapped result as semicolon-delimited rows sorted by id.
///
/// ```text
/// ID;Rate;Name
/// R01235;101,9146;Доллар США
/// R01239;105,0464;Евро
/// ```
///
/// Fields are written as-is; nothing is quoted or escaped.
#[derive(Debug, Clone)]
pub struct CsvDecorator<S> {
    inner: S,
}

impl<S> CsvDecorator<S> {
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

impl<S> CurrencySource for CsvDecorator<S>
where
    S: CurrencySource<Output = CurrencyResult>,
{
    type Output = String;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, String> {
        Box::pin(async move {
            let result = self.inner.fetch(ids).await?;
            render_csv(&result)
        })
    }
}

/// Header plus one row per entry, joined by `\n` with no trailing newline.
pub fn render_csv(result: &CurrencyResult) -> Result<String, SourceError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    // CurrencyResult iterates in ascending id order.
    for (id, entry) in result {
        writer
            .write_record([id.as_str(), entry.rate.as_str(), entry.name.as_str()])
            .map_err(csv_error)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| SourceError::render(format!("failed to flush csv: {}", e)))?;
    let mut rendered = String::from_utf8(buffer)
        .map_err(|e| SourceError::render(format!("rendered csv is not utf-8: {}", e)))?;

    if rendered.ends_with('\n') {
        rendered.pop();
    }
    Ok(rendered)
}

fn csv_error(error: csv::Error) -> SourceError {
    SourceError::render(format!("failed to render csv: {}", error))
}
