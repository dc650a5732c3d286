use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use transcript_eval_core::{CorpusMetric, MetricValue, Result};

use super::tokenize;

/// ROUGE family scores: corpus means of per-pair F1 for rouge1, rouge2 and
/// rougeL (longest common subsequence).
#[derive(Debug, Clone, Copy, Default)]
pub struct RougeCalculator;

impl RougeCalculator {
    pub fn new() -> Self {
        Self
    }

    fn count_ngrams(&self, words: &[String], n: usize) -> HashMap<Vec<String>, usize> {
        let mut counts = HashMap::new();
        if words.len() >= n {
            for window in words.windows(n) {
                *counts.entry(window.to_vec()).or_insert(0) += 1;
            }
        }
        counts
    }

    fn f1(precision: f64, recall: f64) -> f64 {
        if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        }
    }

    /// ROUGE-N F1 for a single pair.
    fn rouge_n(&self, predicted: &str, reference: &str, n: usize) -> f64 {
        let pred_words = tokenize(predicted);
        let ref_words = tokenize(reference);

        let pred_total = pred_words.len().saturating_sub(n - 1);
        let ref_total = ref_words.len().saturating_sub(n - 1);
        if ref_words.len() < n {
            return 0.0;
        }

        let pred_counts = self.count_ngrams(&pred_words, n);
        let ref_counts = self.count_ngrams(&ref_words, n);

        let mut overlap = 0;
        for (ngram, ref_count) in ref_counts.iter() {
            if let Some(pred_count) = pred_counts.get(ngram) {
                overlap += (*pred_count).min(*ref_count);
            }
        }

        let precision = if pred_total == 0 {
            0.0
        } else {
            overlap as f64 / pred_total as f64
        };
        let recall = overlap as f64 / ref_total as f64;

        Self::f1(precision, recall)
    }

    fn lcs_length(&self, a: &[String], b: &[String]) -> usize {
        let m = a.len();
        let n = b.len();

        if m == 0 || n == 0 {
            return 0;
        }

        let mut dp = vec![vec![0; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                if a[i - 1] == b[j - 1] {
                    dp[i][j] = dp[i - 1][j - 1] + 1;
                } else {
                    dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
                }
            }
        }

        dp[m][n]
    }

    /// ROUGE-L F1 for a single pair.
    fn rouge_l(&self, predicted: &str, reference: &str) -> f64 {
        let pred_words = tokenize(predicted);
        let ref_words = tokenize(reference);

        if ref_words.is_empty() {
            return 0.0;
        }

        let lcs_len = self.lcs_length(&pred_words, &ref_words);

        let precision = if pred_words.is_empty() {
            0.0
        } else {
            lcs_len as f64 / pred_words.len() as f64
        };
        let recall = lcs_len as f64 / ref_words.len() as f64;

        Self::f1(precision, recall)
    }

    pub fn corpus_scores(&self, predictions: &[String], references: &[String]) -> BTreeMap<String, f64> {
        let pair_count = references.len();

        let mut rouge1 = 0.0;
        let mut rouge2 = 0.0;
        let mut rouge_l = 0.0;

        for (pred, reference) in predictions.iter().zip(references.iter()) {
            rouge1 += self.rouge_n(pred, reference, 1);
            rouge2 += self.rouge_n(pred, reference, 2);
            rouge_l += self.rouge_l(pred, reference);
        }

        let mean = |sum: f64| if pair_count == 0 { 0.0 } else { sum / pair_count as f64 };

        let mut scores = BTreeMap::new();
        scores.insert("rouge1".to_string(), mean(rouge1));
        scores.insert("rouge2".to_string(), mean(rouge2));
        scores.insert("rougeL".to_string(), mean(rouge_l));
        scores
    }
}

#[async_trait]
impl CorpusMetric for RougeCalculator {
    fn name(&self) -> &'static str {
        "rouge"
    }

    async fn compute(&self, predictions: &[String], references: &[String]) -> Result<MetricValue> {
        Ok(MetricValue::Breakdown(
            self.corpus_scores(predictions, references),
        ))
    }
}
