//! Property-based tests for the runner and classifier.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use moodstack::core::State;
use moodstack::{emotion_table, Classifier, Emotion, EmotionState, Runner};
use proptest::prelude::*;

const EMOTION_WORDS: [&str; 8] = [
    "happy", "love", "sad", "hate", "angry", "dislike", "neutral", "excited",
];

prop_compose! {
    fn arbitrary_state()(variant in 0..5u8) -> EmotionState {
        match variant {
            0 => EmotionState::Start,
            1 => EmotionState::Positive,
            2 => EmotionState::Negative,
            3 => EmotionState::Neutral,
            _ => EmotionState::Excited,
        }
    }
}

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(EMOTION_WORDS.to_vec()).prop_map(str::to_string),
        "[a-z]{1,10}",
    ]
}

proptest! {
    #[test]
    fn classify_is_idempotent(words in prop::collection::vec(word(), 0..12)) {
        let statement = words.join(" ");
        let classifier = Classifier::default();

        let first = classifier.classify(&statement).unwrap();
        let second = classifier.classify(&statement).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn verdict_is_indeterminate_only_without_recognized_words(
        words in prop::collection::vec(word(), 0..12)
    ) {
        let result = Classifier::default().classify(&words.join(" ")).unwrap();

        prop_assert_eq!(result.counts.total(), result.recognized.len());
        prop_assert_eq!(
            result.emotion == Emotion::Indeterminate,
            result.counts.total() == 0
        );
    }

    #[test]
    fn verdict_has_the_maximum_count(words in prop::collection::vec(word(), 1..12)) {
        let result = Classifier::default().classify(&words.join(" ")).unwrap();

        if result.emotion.is_determined() {
            let best = result.counts.get(result.emotion);
            for (emotion, count) in result.counts.iter() {
                prop_assert!(count <= best);
                if count == best {
                    // earlier labels never tie with a later winner
                    prop_assert!(
                        Emotion::RECOGNIZED.iter().position(|e| *e == result.emotion)
                            <= Emotion::RECOGNIZED.iter().position(|e| *e == emotion)
                    );
                }
            }
        }
    }

    #[test]
    fn word_order_does_not_change_the_verdict(words in prop::collection::vec(word(), 0..12)) {
        let classifier = Classifier::default();
        let forward = classifier.classify(&words.join(" ")).unwrap();

        let mut reversed = words.clone();
        reversed.reverse();
        let backward = classifier.classify(&reversed.join(" ")).unwrap();

        prop_assert_eq!(forward.emotion, backward.emotion);
        prop_assert_eq!(forward.counts, backward.counts);
    }

    #[test]
    fn unknown_words_leave_the_state_unchanged(
        state in arbitrary_state(),
        words in prop::collection::vec("[0-9]{1,6}", 0..8)
    ) {
        let runner = Runner::new(emotion_table());
        prop_assert_eq!(runner.run(&state, &words).unwrap(), state);
    }

    #[test]
    fn runs_from_start_never_underflow(words in prop::collection::vec(word(), 0..16)) {
        let runner = Runner::new(emotion_table());
        let run = runner.trace(&EmotionState::Start, &words).unwrap();

        prop_assert_eq!(run.history.len() == 0, run.final_state == EmotionState::Start);
        prop_assert!(run.final_state == EmotionState::Start || run.is_final());
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.name());
        prop_assert_eq!(state.is_final(), state.label().is_some());
    }
}
