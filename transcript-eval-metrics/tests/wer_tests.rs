use approx::assert_relative_eq;
use rstest::rstest;
use transcript_eval_core::{CorpusMetric, MetricValue};
use transcript_eval_metrics::WerCalculator;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn perfect_corpus_has_zero_wer() {
    let calculator = WerCalculator::new();
    let texts = strings(&["the cat sat", "a dog ran"]);

    assert_relative_eq!(calculator.corpus_wer(&texts, &texts), 0.0);
}

#[test]
fn single_substitution_over_corpus() {
    let calculator = WerCalculator::new();
    let predictions = strings(&["the dog sat"]);
    let references = strings(&["the cat sat"]);

    // 1 substitution over 3 reference words
    assert_relative_eq!(
        calculator.corpus_wer(&predictions, &references),
        1.0 / 3.0,
        epsilon = 1e-9
    );
}

#[test]
fn wer_aggregates_over_corpus_not_per_pair_mean() {
    let calculator = WerCalculator::new();
    let predictions = strings(&["a", "one two three four wrong"]);
    let references = strings(&["b", "one two three four five"]);

    // 2 total edits over 6 total reference words, not mean(1/1, 1/5)
    assert_relative_eq!(
        calculator.corpus_wer(&predictions, &references),
        2.0 / 6.0,
        epsilon = 1e-9
    );
}

#[test]
fn wer_is_case_insensitive() {
    let calculator = WerCalculator::new();
    let predictions = strings(&["The Cat SAT"]);
    let references = strings(&["the cat sat"]);

    assert_relative_eq!(calculator.corpus_wer(&predictions, &references), 0.0);
}

#[test]
fn wer_counts_insertions_and_deletions() {
    let calculator = WerCalculator::new();

    let predictions = strings(&["the big cat sat"]);
    let references = strings(&["the cat sat"]);
    assert_relative_eq!(
        calculator.corpus_wer(&predictions, &references),
        1.0 / 3.0,
        epsilon = 1e-9
    );

    let predictions = strings(&["the cat"]);
    let references = strings(&["the cat sat"]);
    assert_relative_eq!(
        calculator.corpus_wer(&predictions, &references),
        1.0 / 3.0,
        epsilon = 1e-9
    );
}

#[rstest]
#[case(&["hello world"], &["hello world"], 0.0)]
#[case(&["hello there"], &["hello world"], 0.5)]
#[case(&["completely different words"], &["three other tokens"], 1.0)]
#[tokio::test]
async fn wer_through_trait(
    #[case] predictions: &[&str],
    #[case] references: &[&str],
    #[case] expected: f64,
) {
    let calculator = WerCalculator::new();

    let value = calculator
        .compute(&strings(predictions), &strings(references))
        .await
        .unwrap();

    match value {
        MetricValue::Scalar(score) => assert_relative_eq!(score, expected, epsilon = 1e-9),
        other => panic!("expected scalar WER, got {other:?}"),
    }
}
