//! Statement Classification
//!
//! Classifies a handful of statements and prints expected vs detected
//! emotions. Set `RUST_LOG=moodstack=trace` to watch every transition and
//! stack operation.
//!
//! Run with: cargo run --example statements

use moodstack::{Classifier, Emotion};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let classifier = Classifier::default();

    let statements = [
        ("I feel happy right now", Emotion::Positive),
        ("I feel sad right now", Emotion::Negative),
        ("I feel neutral right now", Emotion::Neutral),
        ("I feel excited right now", Emotion::Excited),
        ("The weather today is good, it makes me happy", Emotion::Positive),
        ("The weather today is not good, I hate it", Emotion::Negative),
        (
            "I am happy and excited to see you, but I also feel a little angry that you are late",
            Emotion::Positive,
        ),
        ("I am feeling cashmoney100 right now", Emotion::Indeterminate),
    ];

    println!("=== Statement Classification ===\n");

    for (index, (statement, expected)) in statements.iter().enumerate() {
        println!("Statement {index}: {statement}");
        println!("Emotion expected: {expected}");
        match classifier.classify(statement) {
            Ok(result) => {
                println!("Emotion detected: {}", result.emotion);
                let words: Vec<_> = result.recognized.iter().map(|r| r.word.as_str()).collect();
                println!("Recognized words: {words:?}\n");
            }
            Err(err) => println!("Classification failed: {err}\n"),
        }
    }

    println!("=== Example Complete ===");
}
