//! # Session Invariants
//!
//! Random operation sequences against a session. After every step the bit
//! array must be exactly the union of the members' hash positions, every
//! member must test present, and the history must stay within its bound.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bv_01_filter_engine::domain::compute_hash_positions;
    use bv_03_session::{SessionConfig, VisualizerApi, VisualizerSession};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Check(String),
        Remove(String),
        Reset,
        Params(i64, i64),
    }

    fn word() -> impl Strategy<Value = String> {
        prop::sample::select(vec![
            "a", "bird", "cat", "dog", "fish", "hello", "apple", "z", "one", "two", "Aa", "BB",
        ])
        .prop_map(str::to_string)
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => word().prop_map(Op::Add),
            3 => word().prop_map(Op::Check),
            2 => word().prop_map(Op::Remove),
            1 => Just(Op::Reset),
            1 => (-10i64..200, -2i64..8).prop_map(|(c, k)| Op::Params(c, k)),
        ]
    }

    fn apply(session: &mut VisualizerSession, op: &Op) {
        match op {
            Op::Add(w) => {
                session.add_word(w).unwrap();
            }
            Op::Check(w) => {
                session.check_word(w).unwrap();
            }
            Op::Remove(w) => {
                session.remove_word(w).unwrap();
            }
            Op::Reset => session.reset_filter(),
            Op::Params(c, k) => {
                session.update_params(*c, *k);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_bits_are_union_of_member_positions(ops in prop::collection::vec(op(), 1..80)) {
            let config = SessionConfig { max_history: 10, ..Default::default() };
            let mut session = VisualizerSession::new(&config);

            for op in &ops {
                apply(&mut session, op);

                let snapshot = session.snapshot();
                let expected: BTreeSet<usize> = snapshot
                    .members
                    .iter()
                    .flat_map(|m| compute_hash_positions(m, snapshot.hash_count, snapshot.capacity))
                    .collect();
                let actual: BTreeSet<usize> = snapshot.set_positions().into_iter().collect();

                prop_assert_eq!(actual, expected);
                prop_assert_eq!(snapshot.bits.len(), snapshot.capacity);
                for member in &snapshot.members {
                    prop_assert!(session.filter().definitely_contains(member));
                    prop_assert!(session.filter().might_contain(member));
                }
                prop_assert!(session.history().len() <= 10);
            }
        }

        #[test]
        fn prop_latest_entry_matches_live_state(ops in prop::collection::vec(op(), 1..40)) {
            let mut session = VisualizerSession::default();

            for op in &ops {
                let before = session.history().len();
                apply(&mut session, op);

                // Every recorded operation captured the state it left behind
                if session.history().len() > before {
                    let latest = session.replay_last().unwrap();
                    prop_assert_eq!(latest.filter_state(), &session.snapshot());
                }
            }
        }

        #[test]
        fn prop_params_always_in_range(c in any::<i64>(), k in any::<i64>()) {
            let mut session = VisualizerSession::default();
            let update = session.update_params(c, k);

            prop_assert!((8..=128).contains(&update.applied.capacity));
            prop_assert!((1..=5).contains(&update.applied.hash_count));
            prop_assert_eq!(update.adjustment.requested_capacity.is_some(), !(8..=128).contains(&c));
            prop_assert_eq!(update.adjustment.requested_hash_count.is_some(), !(1..=5).contains(&k));
        }
    }
}
