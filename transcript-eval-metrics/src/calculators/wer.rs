use async_trait::async_trait;
use transcript_eval_core::{CorpusMetric, MetricValue, Result};

use super::{sequence_edit_distance, tokenize};

/// Corpus-aggregate word error rate.
///
/// Word-level edit operations (insertions, deletions, substitutions) are
/// summed over every pair and divided by the total reference word count, so a
/// long reference weighs more than a short one. This is not a mean of per-pair
/// rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct WerCalculator;

impl WerCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn corpus_wer(&self, predictions: &[String], references: &[String]) -> f64 {
        let mut total_edits = 0usize;
        let mut total_ref_words = 0usize;

        for (pred, reference) in predictions.iter().zip(references.iter()) {
            let pred_words = tokenize(pred);
            let ref_words = tokenize(reference);

            total_edits += sequence_edit_distance(&pred_words, &ref_words);
            total_ref_words += ref_words.len();
        }

        tracing::debug!(total_edits, total_ref_words, "corpus WER aggregated");

        if total_ref_words == 0 {
            return 0.0;
        }

        total_edits as f64 / total_ref_words as f64
    }
}

#[async_trait]
impl CorpusMetric for WerCalculator {
    fn name(&self) -> &'static str {
        "word_error_rate"
    }

    async fn compute(&self, predictions: &[String], references: &[String]) -> Result<MetricValue> {
        Ok(MetricValue::Scalar(self.corpus_wer(predictions, references)))
    }
}
