use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::Result;

/// Value produced by a corpus-level metric provider.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// A single corpus-level score.
    Scalar(f64),
    /// Named sub-scores (e.g. the ROUGE family).
    Breakdown(BTreeMap<String, f64>),
    /// The provider does not compute this metric.
    NotComputed,
}

impl MetricValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_breakdown(&self) -> Option<&BTreeMap<String, f64>> {
        match self {
            Self::Breakdown(map) => Some(map),
            _ => None,
        }
    }
}

/// A corpus-level text-similarity metric.
///
/// Implementations receive the full prediction and reference sequences so they
/// can aggregate however the metric requires (corpus totals for WER and BLEU,
/// per-pair means for edit distance and ROUGE). Deterministic doubles can be
/// substituted in tests without touching the evaluator.
#[async_trait]
pub trait CorpusMetric: Send + Sync {
    fn name(&self) -> &'static str;

    async fn compute(&self, predictions: &[String], references: &[String]) -> Result<MetricValue>;
}
