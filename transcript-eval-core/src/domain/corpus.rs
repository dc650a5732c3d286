use crate::error::{EvalError, Result};

/// A validated evaluation corpus: equal-length, order-aligned prediction and
/// reference sequences with no blank entries on either side.
///
/// Construction is the only validation point. Metric providers downstream rely
/// on these invariants and do not re-check them.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalCorpus {
    predictions: Vec<String>,
    references: Vec<String>,
}

impl EvalCorpus {
    pub fn new(predictions: Vec<String>, references: Vec<String>) -> Result<Self> {
        if predictions.len() != references.len() {
            return Err(EvalError::CountMismatch {
                predictions: predictions.len(),
                references: references.len(),
            });
        }

        if references.is_empty() {
            return Err(EvalError::EmptyInput(
                "no prediction/reference pairs remain".to_string(),
            ));
        }

        if let Some(idx) = predictions.iter().position(|p| p.trim().is_empty()) {
            return Err(EvalError::BlankContent(format!(
                "prediction at index {idx} is blank"
            )));
        }

        if let Some(idx) = references.iter().position(|r| r.trim().is_empty()) {
            return Err(EvalError::BlankContent(format!(
                "reference at index {idx} is blank"
            )));
        }

        Ok(Self {
            predictions,
            references,
        })
    }

    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Iterate aligned (prediction, reference) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.predictions
            .iter()
            .map(String::as_str)
            .zip(self.references.iter().map(String::as_str))
    }
}
