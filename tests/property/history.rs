//! ConfigHistory properties over random edit/undo/redo sequences

use adcraft::history::ConfigHistory;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Commit(u32),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Commit),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

/// The history matches a simple model: a vector of values and a cursor.
#[test]
fn test_history_matches_model_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(op_strategy(), 0..40), |ops| {
            let mut history = ConfigHistory::new(0u32);
            let mut model = vec![0u32];
            let mut cursor = 0usize;

            for op in ops {
                match op {
                    Op::Commit(value) => {
                        history.commit(value);
                        model.truncate(cursor + 1);
                        model.push(value);
                        cursor = model.len() - 1;
                        prop_assert!(!history.can_redo());
                    }
                    Op::Undo => {
                        let moved = history.undo();
                        prop_assert_eq!(moved, cursor > 0);
                        if moved {
                            cursor -= 1;
                        }
                    }
                    Op::Redo => {
                        let moved = history.redo();
                        prop_assert_eq!(moved, cursor + 1 < model.len());
                        if moved {
                            cursor += 1;
                        }
                    }
                }
                prop_assert_eq!(*history.current(), model[cursor]);
                prop_assert_eq!(history.cursor(), cursor);
                prop_assert_eq!(history.snapshots(), model.as_slice());
            }
            Ok(())
        })
        .unwrap();
}

/// Undo all the way then redo all the way returns to the latest snapshot.
#[test]
fn test_undo_redo_round_trip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&proptest::collection::vec(any::<u8>(), 0..20), |values| {
            let mut history = ConfigHistory::new(0u8);
            for value in &values {
                history.commit(*value);
            }
            let latest = *history.current();
            while history.undo() {}
            prop_assert_eq!(*history.current(), 0u8);
            while history.redo() {}
            prop_assert_eq!(*history.current(), latest);
            Ok(())
        })
        .unwrap();
}
