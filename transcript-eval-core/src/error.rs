use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Directory not found: {0}")]
    NotFound(String),

    #[error("Prediction/reference count mismatch: {predictions} predictions, {references} references")]
    CountMismatch {
        predictions: usize,
        references: usize,
    },

    #[error("No input found: {0}")]
    EmptyInput(String),

    #[error("Blank content: {0}")]
    BlankContent(String),

    #[error("Metric '{metric}' returned an unexpected value shape")]
    MetricShape { metric: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
