use std::fmt::Display;
use std::io::Write;

use crate::data_source::CurrencySource;
use crate::{CoreError, CurrencyId};

/// Identifiers shown when the caller names none: euro and US dollar.
pub const DEFAULT_CURRENCY_IDS: [&str; 2] = ["R01239", "R01235"];

/// Fetch `ids` through `source` and write the result followed by a newline.
pub async fn show_currencies<S, W>(
    source: &S,
    ids: &[CurrencyId],
    writer: &mut W,
) -> Result<(), CoreError>
where
    S: CurrencySource + ?Sized,
    S::Output: Display,
    W: Write + ?Sized,
{
    let output = source.fetch(ids).await?;
    writeln!(writer, "{output}")?;
    writer.flush()?;
    Ok(())
}

/// [`DEFAULT_CURRENCY_IDS`] as parsed identifiers.
pub fn default_currency_ids() -> Vec<CurrencyId> {
    DEFAULT_CURRENCY_IDS
        .iter()
        .filter_map(|raw| CurrencyId::parse(raw).ok())
        .collect()
}
