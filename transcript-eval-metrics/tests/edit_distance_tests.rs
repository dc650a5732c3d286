use approx::assert_relative_eq;
use transcript_eval_core::{CorpusMetric, MetricValue};
use transcript_eval_metrics::EditDistanceCalculator;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn identical_pairs_have_zero_mean_and_normalized() {
    let calculator = EditDistanceCalculator::new();
    let texts = strings(&["the cat sat", "a dog ran"]);

    let stats = calculator.stats(&texts, &texts);

    assert_relative_eq!(stats.mean, 0.0);
    assert_relative_eq!(stats.normalized, 0.0);
}

#[test]
fn single_substitution_single_pair() {
    let calculator = EditDistanceCalculator::new();
    let predictions = strings(&["the cat sat"]);
    let references = strings(&["the cat sit"]);

    let stats = calculator.stats(&predictions, &references);

    // one character substitution, one pair
    assert_relative_eq!(stats.mean, 1.0);
    assert_relative_eq!(stats.normalized, 1.0);
}

#[test]
fn normalized_divides_mean_by_pair_count() {
    let calculator = EditDistanceCalculator::new();
    let predictions = strings(&["abcd", "xyz"]);
    let references = strings(&["abce", "xyw"]);

    let stats = calculator.stats(&predictions, &references);

    // distances [1, 1], mean 1.0, normalized 1.0 / 2 pairs
    assert_relative_eq!(stats.mean, 1.0);
    assert_relative_eq!(stats.normalized, 0.5);
}

#[test]
fn stats_are_pure_across_repeated_calls() {
    let calculator = EditDistanceCalculator::new();

    let first = calculator.stats(&strings(&["abc"]), &strings(&["abd"]));
    let second = calculator.stats(&strings(&["same"]), &strings(&["same"]));

    // no memoized value carries over from the first corpus
    assert_relative_eq!(first.mean, 1.0);
    assert_relative_eq!(second.mean, 0.0);
    assert_relative_eq!(second.normalized, 0.0);
}

#[tokio::test]
async fn breakdown_exposes_mean_and_normalized() {
    let calculator = EditDistanceCalculator::new();
    let predictions = strings(&["kitten"]);
    let references = strings(&["sitting"]);

    let value = calculator.compute(&predictions, &references).await.unwrap();

    match value {
        MetricValue::Breakdown(map) => {
            assert_relative_eq!(map["mean"], 3.0);
            assert_relative_eq!(map["normalized"], 3.0);
        }
        other => panic!("expected breakdown, got {other:?}"),
    }
}
