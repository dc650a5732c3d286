use async_trait::async_trait;
use std::collections::BTreeMap;
use strsim::levenshtein;
use transcript_eval_core::{CorpusMetric, MetricValue, Result};

/// Mean character-level edit distance and its normalized companion, produced
/// together by one pure pass so no state survives between corpora.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditDistanceStats {
    pub mean: f64,
    pub normalized: f64,
}

/// Per-pair character-level Levenshtein distance, delegated to `strsim`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceCalculator;

impl EditDistanceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// The normalized value is the historical mean-divided-by-pair-count
    /// figure, not a per-pair division by reference length.
    pub fn stats(&self, predictions: &[String], references: &[String]) -> EditDistanceStats {
        if references.is_empty() {
            return EditDistanceStats {
                mean: 0.0,
                normalized: 0.0,
            };
        }

        let total: usize = predictions
            .iter()
            .zip(references.iter())
            .map(|(pred, reference)| levenshtein(pred, reference))
            .sum();

        let mean = total as f64 / references.len() as f64;
        let normalized = mean / references.len() as f64;

        EditDistanceStats { mean, normalized }
    }
}

#[async_trait]
impl CorpusMetric for EditDistanceCalculator {
    fn name(&self) -> &'static str {
        "edit_distance"
    }

    async fn compute(&self, predictions: &[String], references: &[String]) -> Result<MetricValue> {
        let stats = self.stats(predictions, references);

        let mut breakdown = BTreeMap::new();
        breakdown.insert("mean".to_string(), stats.mean);
        breakdown.insert("normalized".to_string(), stats.normalized);

        Ok(MetricValue::Breakdown(breakdown))
    }
}
