use std::fmt;

use async_trait::async_trait;
use rand::Rng;

use crate::{
    chart::ChartData,
    color::colorize,
    frequency::FrequencyTable,
    rank::{rank, TOP_N},
    text::split_text_into_words,
    PipelineFailure,
};

/// Provides the raw text of the analyzed document.
#[async_trait(?Send)]
pub trait TextSource {
    type Error: fmt::Display;

    async fn fetch_text(&self) -> Result<String, Self::Error>;
}

/// Computes the histogram data of a text.
///
/// Colors are drawn from `rng`, labels and values only depend on `text`.
pub fn analyze<R>(text: &str, rng: &mut R) -> ChartData
where
    R: Rng + ?Sized,
{
    let table: FrequencyTable = split_text_into_words(text).collect();
    log::debug!(
        "Counted {} words ({} distinct)",
        table.total(),
        table.len()
    );
    let ranked = rank(table, TOP_N);
    let colors = colorize(&ranked, rng);
    ChartData::new(ranked, colors)
}

/// Fetches the text from `source` and analyzes it.
pub async fn run<S, R>(source: &S, rng: &mut R) -> Result<ChartData, PipelineFailure>
where
    S: TextSource + ?Sized,
    R: Rng + ?Sized,
{
    let text = source
        .fetch_text()
        .await
        .map_err(|err| PipelineFailure::Fetch(err.to_string()))?;
    log::debug!("Fetched {} bytes of text", text.len());
    Ok(analyze(&text, rng))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    pub struct StaticText(pub &'static str);

    #[async_trait(?Send)]
    impl TextSource for StaticText {
        type Error = std::convert::Infallible;

        async fn fetch_text(&self) -> Result<String, Self::Error> {
            Ok(self.0.to_owned())
        }
    }

    pub struct Unreachable;

    #[async_trait(?Send)]
    impl TextSource for Unreachable {
        type Error = &'static str;

        async fn fetch_text(&self) -> Result<String, Self::Error> {
            Err("connection refused")
        }
    }

    #[test]
    fn analyze_example_sentence() {
        let chart = analyze(
            "The cat sat. The CAT sat on the mat!",
            &mut StdRng::seed_from_u64(0),
        );
        assert_eq!(chart.labels(), ["the", "cat", "sat", "on", "mat"]);
        assert_eq!(chart.values(), [3, 2, 2, 1, 1]);
        assert_eq!(chart.colors().len(), 5);
    }

    #[test]
    fn analyze_is_idempotent_except_for_colors() {
        let text = "a b c a b a d e f g h i j k l m n o p q r s t u v w x y z a";
        let first = analyze(text, &mut StdRng::seed_from_u64(1));
        let second = analyze(text, &mut StdRng::seed_from_u64(2));
        assert_eq!(first.labels(), second.labels());
        assert_eq!(first.values(), second.values());
        assert_eq!(first.len(), TOP_N);
    }

    #[test]
    fn analyze_few_distinct_words() {
        let chart = analyze("one two three two three three", &mut rand::thread_rng());
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.bars().count(), 3);
        assert_eq!(chart.labels(), ["three", "two", "one"]);
    }

    #[test]
    fn analyze_empty_text() {
        let chart = analyze("", &mut rand::thread_rng());
        assert!(chart.is_empty());
        assert!(chart.values().is_empty());
        assert!(chart.colors().is_empty());
    }

    #[tokio::test]
    async fn run_with_fetched_text() {
        let mut rng = StdRng::seed_from_u64(3);
        let chart = run(&StaticText("Hello hello, world!"), &mut rng).await.unwrap();
        assert_eq!(chart.labels(), ["hello", "world"]);
        assert_eq!(chart.values(), [2, 1]);
    }

    #[tokio::test]
    async fn run_with_failing_source() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = run(&Unreachable, &mut rng).await.unwrap_err();
        assert_eq!(err, PipelineFailure::Fetch("connection refused".into()));
    }
}
