use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Outcome slot for a metric that may be deliberately absent.
///
/// Serialized as a tagged object so consumers must handle the not-computed
/// case explicitly instead of reading a silent null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum MetricStatus {
    Computed(f64),
    NotComputed,
}

impl MetricStatus {
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

/// The fixed six-metric evaluation report.
///
/// Field order is the serialization order; the renamed keys are the stable
/// report contract. ROUGE sub-scores are passed through unmodified as a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(rename = "Word Error Rate")]
    pub word_error_rate: f64,

    #[serde(rename = "Sentence Error Rate")]
    pub sentence_error_rate: MetricStatus,

    #[serde(rename = "Levenshtein Distance")]
    pub levenshtein_distance: f64,

    #[serde(rename = "Normalized Edit Distance")]
    pub normalized_edit_distance: f64,

    #[serde(rename = "BLEU Score")]
    pub bleu_score: f64,

    #[serde(rename = "ROUGE Score")]
    pub rouge_score: BTreeMap<String, f64>,
}

impl MetricsReport {
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
