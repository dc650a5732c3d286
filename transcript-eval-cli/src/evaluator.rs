//! Six-metric evaluation over a validated corpus.

use std::collections::BTreeMap;

use transcript_eval_core::{
    CorpusMetric, EvalCorpus, EvalError, MetricStatus, MetricValue, MetricsReport, Result,
};
use transcript_eval_metrics::{
    BleuCalculator, EditDistanceCalculator, RougeCalculator, SentenceErrorRateCalculator,
    WerCalculator,
};

/// Orchestrates the fixed set of six metrics over an [`EvalCorpus`].
///
/// Each report slot is filled by a [`CorpusMetric`] trait object, so a
/// deterministic double can replace any real calculator. The corpus is already
/// validated at construction; nothing is re-checked here.
pub struct Evaluator {
    wer: Box<dyn CorpusMetric>,
    ser: Box<dyn CorpusMetric>,
    edit_distance: Box<dyn CorpusMetric>,
    bleu: Box<dyn CorpusMetric>,
    rouge: Box<dyn CorpusMetric>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            wer: Box::new(WerCalculator::new()),
            ser: Box::new(SentenceErrorRateCalculator::new()),
            edit_distance: Box::new(EditDistanceCalculator::new()),
            bleu: Box::new(BleuCalculator::default()),
            rouge: Box::new(RougeCalculator::new()),
        }
    }

    pub fn with_wer(mut self, metric: Box<dyn CorpusMetric>) -> Self {
        self.wer = metric;
        self
    }

    pub fn with_ser(mut self, metric: Box<dyn CorpusMetric>) -> Self {
        self.ser = metric;
        self
    }

    pub fn with_edit_distance(mut self, metric: Box<dyn CorpusMetric>) -> Self {
        self.edit_distance = metric;
        self
    }

    pub fn with_bleu(mut self, metric: Box<dyn CorpusMetric>) -> Self {
        self.bleu = metric;
        self
    }

    pub fn with_rouge(mut self, metric: Box<dyn CorpusMetric>) -> Self {
        self.rouge = metric;
        self
    }

    pub async fn compute_metrics(&self, corpus: &EvalCorpus) -> Result<MetricsReport> {
        let predictions = corpus.predictions();
        let references = corpus.references();

        tracing::info!(pairs = corpus.len(), "computing metrics");

        let word_error_rate = scalar(self.wer.as_ref(), predictions, references).await?;

        let sentence_error_rate = match self.ser.compute(predictions, references).await? {
            MetricValue::Scalar(value) => MetricStatus::Computed(value),
            MetricValue::NotComputed => MetricStatus::NotComputed,
            MetricValue::Breakdown(_) => return Err(shape_error(self.ser.as_ref())),
        };

        let edit = breakdown(self.edit_distance.as_ref(), predictions, references).await?;
        let levenshtein_distance = *edit
            .get("mean")
            .ok_or_else(|| shape_error(self.edit_distance.as_ref()))?;
        let normalized_edit_distance = *edit
            .get("normalized")
            .ok_or_else(|| shape_error(self.edit_distance.as_ref()))?;

        let bleu_score = scalar(self.bleu.as_ref(), predictions, references).await?;
        let rouge_score = breakdown(self.rouge.as_ref(), predictions, references).await?;

        Ok(MetricsReport {
            word_error_rate,
            sentence_error_rate,
            levenshtein_distance,
            normalized_edit_distance,
            bleu_score,
            rouge_score,
        })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

async fn scalar(
    metric: &dyn CorpusMetric,
    predictions: &[String],
    references: &[String],
) -> Result<f64> {
    tracing::debug!(metric = metric.name(), "computing");
    metric
        .compute(predictions, references)
        .await?
        .as_scalar()
        .ok_or_else(|| shape_error(metric))
}

async fn breakdown(
    metric: &dyn CorpusMetric,
    predictions: &[String],
    references: &[String],
) -> Result<BTreeMap<String, f64>> {
    tracing::debug!(metric = metric.name(), "computing");
    match metric.compute(predictions, references).await? {
        MetricValue::Breakdown(map) => Ok(map),
        _ => Err(shape_error(metric)),
    }
}

fn shape_error(metric: &dyn CorpusMetric) -> EvalError {
    EvalError::MetricShape {
        metric: metric.name().to_string(),
    }
}
