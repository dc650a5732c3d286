use async_trait::async_trait;
use transcript_eval_core::{CorpusMetric, MetricValue, Result};

/// Sentence error rate placeholder.
///
/// Always yields `MetricValue::NotComputed` so the report carries an explicit
/// marker instead of a silent null.
///
/// TODO: implement as the fraction of pairs whose tokenized prediction differs
/// from the tokenized reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceErrorRateCalculator;

impl SentenceErrorRateCalculator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CorpusMetric for SentenceErrorRateCalculator {
    fn name(&self) -> &'static str {
        "sentence_error_rate"
    }

    async fn compute(
        &self,
        _predictions: &[String],
        _references: &[String],
    ) -> Result<MetricValue> {
        Ok(MetricValue::NotComputed)
    }
}
