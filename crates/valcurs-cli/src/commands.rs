use std::io;
use std::sync::Arc;

use tracing::debug;
use valcurs_core::{
    default_currency_ids, parse_reference_date, show_currencies, CbrAdapter, CsvDecorator,
    CurrencyId, Decorator, FeedConfig, HttpClient, JsonDecorator, ReqwestHttpClient,
    StaticHttpClient,
};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let ids = if cli.ids.is_empty() {
        default_currency_ids()
    } else {
        CurrencyId::parse_all(&cli.ids)?
    };

    let source = build_source(cli)?;
    debug!(ids = ids.len(), format = ?cli.format, "fetching currencies");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Raw => show_currencies(&Decorator::new(source), &ids, &mut out).await?,
        OutputFormat::Json => show_currencies(&JsonDecorator::new(source), &ids, &mut out).await?,
        OutputFormat::Csv => show_currencies(&CsvDecorator::new(source), &ids, &mut out).await?,
    }

    Ok(())
}

fn build_source(cli: &Cli) -> Result<CbrAdapter, CliError> {
    let mut config = FeedConfig::from_env();
    if let Some(url) = &cli.feed_url {
        config = config.with_url(url.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if let Some(raw) = &cli.date {
        config = config.with_date(parse_reference_date(raw)?);
    }

    let http_client: Arc<dyn HttpClient> = match &cli.feed_file {
        Some(path) => {
            debug!(path = %path.display(), "serving feed from file");
            Arc::new(
                StaticHttpClient::from_file(path).map_err(|source| CliError::FeedFile {
                    path: path.display().to_string(),
                    source,
                })?,
            )
        }
        None => Arc::new(ReqwestHttpClient::default()),
    };

    Ok(CbrAdapter::new(http_client, config))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn flags_override_environment_defaults() {
        let cli = Cli::try_parse_from([
            "valcurs",
            "--feed-url",
            "https://mirror.test/daily",
            "--timeout-ms",
            "2500",
            "--date",
            "2025-01-01",
        ])
        .expect("valid args");

        let source = build_source(&cli).expect("source");
        assert_eq!(source.config().url, "https://mirror.test/daily");
        assert_eq!(source.config().timeout_ms, 2500);
        assert_eq!(
            source.config().request_url(),
            "https://mirror.test/daily?date_req=01%2F01%2F2025"
        );
    }

    #[test]
    fn invalid_date_is_a_validation_error() {
        let cli = Cli::try_parse_from(["valcurs", "--date", "01.01.2025"]).expect("valid args");
        let err = build_source(&cli).err().expect("must fail");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_feed_file_is_reported_with_its_path() {
        let cli = Cli::try_parse_from(["valcurs", "--feed-file", "/nonexistent/daily.xml"])
            .expect("valid args");
        let err = build_source(&cli).err().expect("must fail");
        assert!(err.to_string().contains("/nonexistent/daily.xml"));
    }
}
