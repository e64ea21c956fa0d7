use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::data_source::{CurrencySource, FetchFuture, SourceError};
use crate::{CurrencyId, CurrencyResult};

/// Renders the wrapped result as `{"R01239": ["105,0464", "Евро"], ...}`.
#[derive(Debug, Clone)]
pub struct JsonDecorator<S> {
    inner: S,
}

impl<S> JsonDecorator<S> {
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

impl<S> CurrencySource for JsonDecorator<S>
where
    S: CurrencySource<Output = CurrencyResult>,
{
    type Output = String;

    fn fetch<'a>(&'a self, ids: &'a [CurrencyId]) -> FetchFuture<'a, String> {
        Box::pin(async move {
            let result = self.inner.fetch(ids).await?;
            render_json(&result)
        })
    }
}

/// Serialize a result as four-space indented JSON with non-ASCII text kept literal.
pub fn render_json(result: &CurrencyResult) -> Result<String, SourceError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    result
        .serialize(&mut serializer)
        .map_err(|e| SourceError::render(format!("failed to render json: {}", e)))?;

    String::from_utf8(buffer)
        .map_err(|e| SourceError::render(format!("rendered json is not utf-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::decorators::test_support::{ids, FixedSource};

    #[tokio::test]
    async fn renders_rate_name_pairs_keyed_by_id() {
        let source = JsonDecorator::new(FixedSource::euro_and_dollar());
        let output = source
            .fetch(&ids(&["R01239", "R01235"]))
            .await
            .expect("fetch");

        let parsed: Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(
            parsed,
            json!({
                "R01239": ["105,0464", "Евро"],
                "R01235": ["101,9146", "Доллар США"]
            })
        );
    }

    #[tokio::test]
    async fn keeps_cyrillic_literal_and_indents() {
        let source = JsonDecorator::new(FixedSource::euro_and_dollar());
        let output = source.fetch(&ids(&["R01239"])).await.expect("fetch");

        assert!(output.contains("Евро"));
        assert!(!output.contains("\\u"));
        assert_eq!(
            output,
            "{\n    \"R01239\": [\n        \"105,0464\",\n        \"Евро\"\n    ]\n}"
        );
    }

    #[tokio::test]
    async fn parses_back_into_the_same_result() {
        let inner = FixedSource::euro_and_dollar();
        let requested = ids(&["R01239", "R01235"]);
        let expected = inner.fetch(&requested).await.expect("fetch");

        let output = JsonDecorator::new(inner)
            .fetch(&requested)
            .await
            .expect("fetch");
        let round_trip: CurrencyResult = serde_json::from_str(&output).expect("valid result");

        assert_eq!(round_trip, expected);
    }

    #[tokio::test]
    async fn empty_result_renders_empty_object() {
        let source = JsonDecorator::new(FixedSource::euro_and_dollar());
        let output = source.fetch(&[]).await.expect("fetch");
        assert_eq!(output, "{}");
    }

    #[tokio::test]
    async fn inner_failure_is_propagated_unchanged() {
        let source = JsonDecorator::new(FixedSource::failing(SourceError::malformed_feed("bad xml")));
        let err = source.fetch(&ids(&["R01239"])).await.expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::MalformedFeed);
        assert_eq!(err.message(), "bad xml");
    }
}
