//! # Session Flows
//!
//! A session drives the filter engine and records each outcome in the history
//! log. These tests follow a user through typical sequences and check that the
//! engine, the recorded snapshots and the history order agree.

#[cfg(test)]
mod tests {
    use bv_01_filter_engine::{BloomFilter, FilterParams};
    use bv_03_session::{SessionConfig, SessionError, Verdict, VisualizerApi, VisualizerSession};
    use shared_types::{OperationKind, OperationPayload};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn session_with(words: &[&str]) -> VisualizerSession {
        let mut session = VisualizerSession::default();
        for word in words {
            session.add_word(word).expect("non-empty word");
        }
        session
    }

    fn kinds(session: &VisualizerSession) -> Vec<OperationKind> {
        session.history().iter().map(|e| e.kind()).collect()
    }

    // =========================================================================
    // INSERT / CHECK / REMOVE
    // =========================================================================

    #[test]
    fn test_insert_check_remove_flow() {
        let mut session = session_with(&["cat", "dog"]);
        assert_eq!(
            session.snapshot().set_positions(),
            vec![2, 12, 20, 22, 24, 28]
        );

        let check = session.check_word("cat").unwrap();
        assert_eq!(check.verdict, Verdict::Present);
        assert_eq!(check.positions, vec![22, 12, 2]);

        assert!(session.remove_word("cat").unwrap());
        assert_eq!(session.snapshot().set_positions(), vec![20, 24, 28]);

        let check = session.check_word("cat").unwrap();
        assert_eq!(check.verdict, Verdict::Absent);

        assert_eq!(
            kinds(&session),
            vec![
                OperationKind::Check,
                OperationKind::Remove,
                OperationKind::Check,
                OperationKind::Add,
                OperationKind::Add,
            ]
        );
    }

    #[test]
    fn test_removal_rebuild_keeps_shared_bits() {
        // "apple" and "z" land on identical positions at (32, 3)
        let mut session = session_with(&["apple", "z"]);
        assert_eq!(session.snapshot().bits_set(), 3);

        session.remove_word("apple").unwrap();

        let check = session.check_word("z").unwrap();
        assert_eq!(check.verdict, Verdict::Present);
        assert_eq!(session.snapshot().bits_set(), 3);

        let check = session.check_word("apple").unwrap();
        assert_eq!(check.verdict, Verdict::PossibleFalsePositive);
    }

    #[test]
    fn test_rejected_operations_leave_no_trace() {
        let mut session = session_with(&["one"]);
        let before = session.snapshot();

        assert!(!session.add_word("one").unwrap());
        assert!(!session.remove_word("two").unwrap());
        assert_eq!(session.add_word(""), Err(SessionError::EmptyWord));
        assert_eq!(session.check_word(" \t"), Err(SessionError::EmptyWord));

        assert_eq!(session.snapshot(), before);
        assert_eq!(session.history().len(), 1);
    }

    // =========================================================================
    // PARAMETER UPDATES
    // =========================================================================

    #[test]
    fn test_update_params_rehashes_members() {
        let mut session = session_with(&["cat", "dog"]);

        let update = session.update_params(64, 4);
        assert_eq!(update.previous_members, vec!["cat", "dog"]);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.capacity, 64);
        assert_eq!(snapshot.hash_count, 4);
        assert_eq!(
            snapshot.set_positions(),
            vec![2, 22, 24, 44, 48, 52, 56, 60]
        );
        assert_eq!(session.check_word("dog").unwrap().verdict, Verdict::Present);
    }

    #[test]
    fn test_update_params_to_tiny_filter_collides() {
        let mut session = session_with(&["hello"]);
        session.update_params(8, 1);

        // "hello" and "apple" both hash to bit 2 at (8, 1)
        let check = session.check_word("apple").unwrap();
        assert_eq!(check.positions, vec![2]);
        assert_eq!(check.verdict, Verdict::PossibleFalsePositive);
    }

    #[test]
    fn test_update_params_clamps_out_of_range_requests() {
        let mut session = VisualizerSession::default();

        let update = session.update_params(0, 99);
        assert_eq!(update.applied, FilterParams::new(8, 5).unwrap());
        assert_eq!(update.adjustment.requested_capacity, Some(0));
        assert_eq!(update.adjustment.requested_hash_count, Some(99));

        let entry = session.replay_last().unwrap();
        assert_eq!(entry.filter_state().bits.len(), 8);
    }

    #[test]
    fn test_engine_matches_session_after_updates() {
        let mut session = session_with(&["a", "bird", "fish"]);
        session.update_params(16, 2);
        session.remove_word("bird").unwrap();

        let mut engine = BloomFilter::new(16, 2);
        engine.insert("a");
        engine.insert("fish");

        assert_eq!(session.snapshot(), engine.snapshot());
    }

    // =========================================================================
    // HISTORY
    // =========================================================================

    #[test]
    fn test_history_bounded_at_fifty_newest_first() {
        let mut session = VisualizerSession::default();
        for i in 1..=60 {
            session.add_word(&format!("op {}", i)).unwrap();
        }

        let history = session.history();
        assert_eq!(history.len(), 50);
        assert_eq!(history[0].payload().word(), Some("op 60"));
        assert_eq!(history[49].payload().word(), Some("op 11"));
    }

    #[test]
    fn test_custom_history_bound() {
        let config = SessionConfig {
            max_history: 3,
            ..Default::default()
        };
        let mut session = VisualizerSession::new(&config);
        for word in ["a", "b", "c", "d"] {
            session.add_word(word).unwrap();
        }
        session.reset_filter();

        assert_eq!(
            kinds(&session),
            vec![OperationKind::Reset, OperationKind::Add, OperationKind::Add]
        );
    }

    #[test]
    fn test_evicted_entry_cannot_be_replayed() {
        let config = SessionConfig {
            max_history: 2,
            ..Default::default()
        };
        let mut session = VisualizerSession::new(&config);
        session.add_word("first").unwrap();
        let evicted = session.replay_last().unwrap();
        session.add_word("second").unwrap();
        session.add_word("third").unwrap();

        assert_eq!(
            session.replay_entry(evicted.id()),
            Err(SessionError::EntryNotFound(evicted.id().to_string()))
        );
    }

    #[test]
    fn test_replay_carries_animation_inputs() {
        let mut session = session_with(&["hello"]);
        session.check_word("apple").unwrap();

        let entry = session.replay_last().unwrap();
        match entry.payload() {
            OperationPayload::Check {
                word,
                positions,
                might_contain,
                definitely_contains,
                filter_state,
            } => {
                assert_eq!(word, "apple");
                assert_eq!(positions, &vec![26, 20, 14]);
                assert!(!might_contain);
                assert!(!definitely_contains);
                assert_eq!(filter_state.set_positions(), vec![4, 18, 22]);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_clear_history_then_continue() {
        let mut session = session_with(&["a", "b"]);
        session.clear_history();
        assert!(session.replay_last().is_none());

        session.check_word("a").unwrap();
        assert_eq!(kinds(&session), vec![OperationKind::Check]);
    }

    #[test]
    fn test_metrics_follow_operations() {
        let mut session = session_with(&["apple"]);
        session.add_word("apple").unwrap();
        session.check_word("z").unwrap();
        session.check_word("apple").unwrap();
        session.remove_word("apple").unwrap();
        session.update_params(16, 2);
        session.reset_filter();

        let metrics = session.metrics();
        assert_eq!(metrics.inserts, 1);
        assert_eq!(metrics.duplicate_inserts, 1);
        assert_eq!(metrics.checks, 2);
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.removals, 1);
        assert_eq!(metrics.param_updates, 1);
        assert_eq!(metrics.rebuilds, 2);
        assert_eq!(metrics.resets, 1);
    }
}
