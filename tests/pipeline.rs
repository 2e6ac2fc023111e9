use std::collections::HashMap;

use wordfreq_rs::Coordinator;

async fn count(text: &str, workers: usize) -> HashMap<String, u64> {
    Coordinator::new(workers).run(text).await.unwrap()
}

fn token_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

const FABLE: &str = "\
the quick brown fox jumps over the lazy dog
the dog barks and the fox runs
over the hill and far away the fox is gone";

#[tokio::test]
async fn conserves_the_total_token_count() {
    let result = count(FABLE, 4).await;
    assert_eq!(result.values().sum::<u64>(), token_count(FABLE));
}

#[tokio::test]
async fn counts_every_word_exactly() {
    let result = count(FABLE, 4).await;
    for (word, total) in &result {
        let expected = FABLE
            .split_whitespace()
            .filter(|&t| t == word.as_str())
            .count() as u64;
        assert_eq!(*total, expected, "count mismatch for `{word}`");
    }
    assert_eq!(result["the"], 6);
    assert_eq!(result["fox"], 3);
    assert_eq!(result["dog"], 2);
}

#[tokio::test]
async fn result_is_invariant_under_worker_count() {
    let baseline = count(FABLE, 1).await;
    for workers in [2, 3, 8, 16] {
        assert_eq!(count(FABLE, workers).await, baseline);
    }
}

#[tokio::test]
async fn repeated_runs_are_idempotent() {
    let mut coordinator = Coordinator::new(4);
    let first = coordinator.run(FABLE).await.unwrap();
    let second = coordinator.run(FABLE).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn result_is_stable_across_many_interleavings() {
    // Task scheduling differs from run to run; the mapping must not.
    let baseline = count(FABLE, 8).await;
    for _ in 0..20 {
        assert_eq!(count(FABLE, 8).await, baseline);
    }
}

#[tokio::test]
async fn empty_and_whitespace_input_yield_empty_mappings() {
    assert!(count("", 4).await.is_empty());
    assert!(count("   \n\t  ", 4).await.is_empty());
}

#[tokio::test]
async fn counting_is_case_sensitive_and_keeps_punctuation() {
    let result = count("Dog dog dog. dog", 4).await;
    assert_eq!(result["Dog"], 1);
    assert_eq!(result["dog"], 2);
    assert_eq!(result["dog."], 1);
}

#[tokio::test]
async fn handles_unicode_text() {
    let result = count("schön schön день день день 猫", 4).await;
    assert_eq!(result["schön"], 2);
    assert_eq!(result["день"], 3);
    assert_eq!(result["猫"], 1);
}
