use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use transcript_eval_core::{CorpusMetric, MetricValue, Result};

use super::tokenize;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMethod {
    None,
    Add1,
    Add01,
}

/// Corpus-level BLEU.
///
/// Clipped n-gram counts and sentence lengths are accumulated over the whole
/// corpus before the modified precisions are combined, so the score is not a
/// mean of per-sentence BLEU values.
#[derive(Debug, Clone)]
pub struct BleuCalculator {
    pub max_n: usize,
    pub smoothing: SmoothingMethod,
}

impl BleuCalculator {
    pub fn new(max_n: usize) -> Self {
        Self {
            max_n,
            smoothing: SmoothingMethod::None,
        }
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingMethod) -> Self {
        self.smoothing = smoothing;
        self
    }

    fn extract_ngrams(&self, text: &str, n: usize) -> Vec<Vec<String>> {
        let words = tokenize(text);

        if words.len() < n {
            return vec![];
        }

        words.windows(n).map(|window| window.to_vec()).collect()
    }

    fn count_ngrams(&self, ngrams: &[Vec<String>]) -> HashMap<Vec<String>, usize> {
        let mut counts = HashMap::new();
        for ngram in ngrams {
            *counts.entry(ngram.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Clipped and total candidate n-gram counts of order `n`, summed over the
    /// corpus.
    fn corpus_counts(
        &self,
        predictions: &[String],
        references: &[String],
        n: usize,
    ) -> (usize, usize) {
        let mut clipped = 0;
        let mut total = 0;

        for (pred, reference) in predictions.iter().zip(references.iter()) {
            let pred_counts = self.count_ngrams(&self.extract_ngrams(pred, n));
            let ref_counts = self.count_ngrams(&self.extract_ngrams(reference, n));

            for (ngram, pred_count) in pred_counts.iter() {
                let ref_count = ref_counts.get(ngram).unwrap_or(&0);
                clipped += (*pred_count).min(*ref_count);
                total += pred_count;
            }
        }

        (clipped, total)
    }

    fn brevity_penalty(&self, predicted_len: usize, reference_len: usize) -> f64 {
        if predicted_len > reference_len || reference_len == 0 {
            1.0
        } else {
            (1.0 - (reference_len as f64 / predicted_len as f64)).exp()
        }
    }

    pub fn corpus_bleu(&self, predictions: &[String], references: &[String]) -> f64 {
        let predicted_len: usize = predictions
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum();
        let reference_len: usize = references
            .iter()
            .map(|r| r.split_whitespace().count())
            .sum();

        if predicted_len == 0 {
            return 0.0;
        }

        let mut log_precision_sum = 0.0;
        let mut orders_used = 0;

        for n in 1..=self.max_n {
            let (clipped, total) = self.corpus_counts(predictions, references, n);

            if total == 0 {
                // No candidate n-gram of this order exists anywhere in the
                // corpus (every sentence is shorter than n); the order carries
                // no signal and is skipped.
                continue;
            }

            let precision = match self.smoothing {
                SmoothingMethod::None => clipped as f64 / total as f64,
                SmoothingMethod::Add1 => (clipped as f64 + 1.0) / (total as f64 + 1.0),
                SmoothingMethod::Add01 => (clipped as f64 + 0.1) / (total as f64 + 0.1),
            };

            if precision <= 0.0 {
                return 0.0;
            }

            log_precision_sum += precision.ln();
            orders_used += 1;
        }

        if orders_used == 0 {
            return 0.0;
        }

        let geometric_mean = (log_precision_sum / orders_used as f64).exp();
        let bp = self.brevity_penalty(predicted_len, reference_len);

        geometric_mean * bp
    }
}

impl Default for BleuCalculator {
    fn default() -> Self {
        Self::new(4)
    }
}

#[async_trait]
impl CorpusMetric for BleuCalculator {
    fn name(&self) -> &'static str {
        "bleu"
    }

    async fn compute(&self, predictions: &[String], references: &[String]) -> Result<MetricValue> {
        Ok(MetricValue::Scalar(
            self.corpus_bleu(predictions, references),
        ))
    }
}
