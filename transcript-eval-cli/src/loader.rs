//! Directory loading and pairing of prediction/reference files.

use std::fs;
use std::path::{Path, PathBuf};

use transcript_eval_core::{EvalCorpus, EvalError, Result};

/// Load, pair and validate the prediction and reference directories.
///
/// Every regular file in each directory is read as UTF-8, non-recursively and
/// with no extension filter. Listings are sorted lexicographically by path so
/// pairing does not depend on platform directory order. Pairs whose reference
/// is whitespace-only are dropped; the reference-driven predicate filters both
/// sides so alignment is preserved.
pub fn load_and_pair(predictions_dir: &Path, references_dir: &Path) -> Result<EvalCorpus> {
    let predictions = read_dir_sorted(predictions_dir)?;
    let references = read_dir_sorted(references_dir)?;

    // An empty directory is reported as such even when the counts also differ.
    if predictions.is_empty() {
        return Err(EvalError::EmptyInput(format!(
            "no files in predictions directory {}",
            predictions_dir.display()
        )));
    }
    if references.is_empty() {
        return Err(EvalError::EmptyInput(format!(
            "no files in references directory {}",
            references_dir.display()
        )));
    }

    if predictions.len() != references.len() {
        return Err(EvalError::CountMismatch {
            predictions: predictions.len(),
            references: references.len(),
        });
    }

    tracing::info!(pairs = references.len(), "loaded prediction/reference pairs");

    let (predictions, references): (Vec<String>, Vec<String>) = predictions
        .into_iter()
        .zip(references)
        .filter(|(_, reference)| !reference.trim().is_empty())
        .unzip();

    EvalCorpus::new(predictions, references)
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(EvalError::NotFound(dir.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "reading input file");
            Ok(fs::read_to_string(path)?)
        })
        .collect()
}
