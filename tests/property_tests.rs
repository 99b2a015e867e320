//! Property-based tests for the quiz reducer.
//!
//! These tests use proptest to drive the store with random event sequences
//! and check that lifecycle properties hold after every step.

use quizflow::core::State;
use quizflow::quiz::Question;
use quizflow::validation::{check_invariants, into_result};
use quizflow::{reduce, QuizConfig, QuizEvent, QuizState, QuizStatus, QuizStore};
use proptest::prelude::*;

fn question_bank(points: &[u32]) -> Vec<Question> {
    points
        .iter()
        .enumerate()
        .map(|(i, &points)| Question {
            prompt: format!("Question {i}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option: i % 4,
            points,
        })
        .collect()
}

prop_compose! {
    fn arbitrary_points()(points in prop::collection::vec(0..50u32, 1..6)) -> Vec<u32> {
        points
    }
}

fn arbitrary_event() -> impl Strategy<Value = QuizEvent> {
    prop_oneof![
        Just(QuizEvent::Start),
        (0..5usize).prop_map(QuizEvent::NewAnswer),
        Just(QuizEvent::NextQuestion),
        Just(QuizEvent::Finish),
        Just(QuizEvent::Restart),
        Just(QuizEvent::Tick),
        Just(QuizEvent::DataFailed),
    ]
}

fn small_config() -> QuizConfig {
    QuizConfig {
        secs_per_question: 2,
        ..QuizConfig::default()
    }
}

fn loaded_store(points: &[u32]) -> QuizStore {
    let mut store = QuizStore::new(small_config());
    store
        .dispatch(QuizEvent::DataReceived(question_bank(points)))
        .unwrap();
    store
}

proptest! {
    #[test]
    fn invariants_hold_after_every_event(
        points in arbitrary_points(),
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let mut store = loaded_store(&points);

        for event in events {
            let _ = store.dispatch(event);
            prop_assert_eq!(into_result(check_invariants(store.state())), Ok(()));
        }
    }

    #[test]
    fn reduce_never_mutates_its_input(
        points in arbitrary_points(),
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let config = small_config();
        let mut state = reduce(
            &QuizState::initial(),
            QuizEvent::DataReceived(question_bank(&points)),
            &config,
        ).unwrap();

        for event in events {
            let before = state.clone();
            let result = reduce(&state, event, &config);
            prop_assert_eq!(&state, &before);
            if let Ok(next) = result {
                state = next;
            }
        }
    }

    #[test]
    fn points_never_decrease_within_a_run(
        points in arbitrary_points(),
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let mut store = loaded_store(&points);
        let mut last_points = 0;
        let mut last_run = store.runs();

        for event in events {
            if store.dispatch(event).is_err() {
                continue;
            }
            let state = store.state();
            if store.runs() != last_run || state.status == QuizStatus::Ready {
                last_run = store.runs();
                last_points = state.points;
                continue;
            }
            prop_assert!(state.points >= last_points);
            last_points = state.points;
        }
    }

    #[test]
    fn high_score_never_decreases(
        points in arbitrary_points(),
        events in prop::collection::vec(arbitrary_event(), 0..80)
    ) {
        let mut store = loaded_store(&points);
        let mut best = 0;

        for event in events {
            let _ = store.dispatch(event);
            let state = store.state();
            prop_assert!(state.high_score >= best);
            best = state.high_score;
            if state.status == QuizStatus::Finished {
                prop_assert!(state.high_score >= state.points);
            }
        }
    }

    #[test]
    fn tick_is_idempotent_once_finished(
        points in arbitrary_points(),
        extra_ticks in 1..20usize
    ) {
        let mut store = loaded_store(&points);
        store.dispatch(QuizEvent::Start).unwrap();
        store.dispatch(QuizEvent::NewAnswer(0)).unwrap();
        while store.status() == QuizStatus::Active {
            store.dispatch(QuizEvent::Tick).unwrap();
        }
        let finished = store.state().clone();

        for _ in 0..extra_ticks {
            store.dispatch(QuizEvent::Tick).unwrap();
        }

        prop_assert_eq!(store.state(), &finished);
    }

    #[test]
    fn countdown_matches_question_count(points in arbitrary_points(), secs in 1..60u32) {
        let config = QuizConfig { secs_per_question: secs, ..QuizConfig::default() };
        let ready = QuizState::ready(question_bank(&points), 0);
        let active = reduce(&ready, QuizEvent::Start, &config).unwrap();

        prop_assert_eq!(active.seconds_remaining, Some(secs * points.len() as u32));
    }

    #[test]
    fn status_label_is_stable(event in arbitrary_event()) {
        let state = QuizState::ready(question_bank(&[10]), 0);
        if let Ok(next) = reduce(&state, event, &small_config()) {
            prop_assert_eq!(next.status.name(), next.status.to_string());
        }
    }

    #[test]
    fn state_roundtrip_serialization(
        points in arbitrary_points(),
        events in prop::collection::vec(arbitrary_event(), 0..20)
    ) {
        let mut store = loaded_store(&points);
        for event in events {
            let _ = store.dispatch(event);
        }

        let json = serde_json::to_string(store.state()).unwrap();
        let deserialized: QuizState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&deserialized, store.state());
    }
}
