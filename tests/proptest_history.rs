//! Property-based tests for the history log and font-step invariants.

use minutes_editor::{FontSizeStep, HistoryLog};
use proptest::prelude::*;

/// Short snapshot contents; the log treats them as opaque strings.
fn content_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,8}"
}

#[derive(Clone, Debug)]
enum Op {
    Push(String),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        content_strategy().prop_map(Op::Push),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

proptest! {
    #[test]
    fn index_always_in_bounds(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut log = HistoryLog::new("seed");
        for op in ops {
            match op {
                Op::Push(content) => log.push(&content),
                Op::Undo => {
                    log.undo();
                }
                Op::Redo => {
                    log.redo();
                }
            }
            prop_assert!(!log.is_empty());
            prop_assert!(log.index() < log.len());
        }
    }

    #[test]
    fn duplicate_push_never_grows_the_log(contents in prop::collection::vec(content_strategy(), 1..16)) {
        let mut log = HistoryLog::new("seed");
        for content in contents {
            log.push(&content);
            let len = log.len();
            log.push(&content);
            prop_assert_eq!(log.len(), len);
        }
    }

    #[test]
    fn push_after_undo_leaves_no_redo(a in content_strategy(), b in content_strategy()) {
        let mut log = HistoryLog::new("seed");
        log.push(&a);
        log.undo();
        log.push(&b);
        prop_assert!(!log.can_redo());
        prop_assert_eq!(log.redo(), None);
    }

    #[test]
    fn undo_then_redo_returns_to_the_tip(contents in prop::collection::vec(content_strategy(), 0..16)) {
        let mut log = HistoryLog::new("seed");
        for content in &contents {
            log.push(content);
        }
        let tip = log.current().to_string();
        let undone = std::iter::from_fn(|| log.undo().map(String::from)).count();
        for _ in 0..undone {
            log.redo();
        }
        prop_assert_eq!(log.current(), tip);
    }

    #[test]
    fn current_is_always_the_last_pushed_or_seed(contents in prop::collection::vec(content_strategy(), 0..16)) {
        let mut log = HistoryLog::new("seed");
        for content in &contents {
            log.push(content);
            prop_assert_eq!(log.current(), content);
        }
    }

    #[test]
    fn font_step_stays_clamped(deltas in prop::collection::vec(-3i32..=3, 0..64)) {
        let mut step = FontSizeStep::new();
        for delta in deltas {
            let size = step.adjust(delta);
            prop_assert!((FontSizeStep::MIN_STEP..=FontSizeStep::MAX_STEP).contains(&step.step()));
            prop_assert_eq!(size, step.size_px());
            prop_assert!((12..=24).contains(&step.size_px()));
        }
    }
}
