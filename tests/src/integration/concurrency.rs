//! # Shared Session Concurrency
//!
//! Several threads drive one [`SharedSession`](bv_03_session::SharedSession).
//! Each operation and its history entry happen under one lock, so the log
//! never shows an entry whose snapshot disagrees with the operation.

#[cfg(test)]
mod tests {
    use std::thread;

    use bv_03_session::{SessionConfig, SharedSession};
    use rand::Rng;
    use shared_types::OperationPayload;

    #[test]
    fn test_parallel_writers_and_checkers() {
        let config = SessionConfig {
            max_history: 500,
            ..Default::default()
        };
        let session = SharedSession::from_config(&config);

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let session = session.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        session.add_word(&format!("w{}-{}", t, i)).unwrap();
                    }
                })
            })
            .collect();

        let checkers: Vec<_> = (0..2)
            .map(|_| {
                let session = session.clone();
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    for _ in 0..50 {
                        let word = format!("w{}-{}", rng.gen_range(0..4), rng.gen_range(0..25));
                        session.check_word(&word).unwrap();
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(checkers) {
            handle.join().unwrap();
        }

        let snapshot = session.snapshot();
        assert_eq!(snapshot.members.len(), 100);
        assert_eq!(session.history().len(), 200);

        for entry in session.history() {
            if let OperationPayload::Check {
                word,
                definitely_contains,
                filter_state,
                ..
            } = entry.payload()
            {
                assert_eq!(*definitely_contains, filter_state.has_member(word));
            }
        }
    }

    #[test]
    fn test_restore_races_with_writers() {
        let session = SharedSession::default();
        session.add_word("base").unwrap();
        let checkpoint = session.history()[0].id().to_string();

        let writer = {
            let session = session.clone();
            thread::spawn(move || {
                for i in 0..20 {
                    session.add_word(&format!("extra{}", i)).unwrap();
                }
            })
        };
        let restorer = {
            let session = session.clone();
            let id = checkpoint.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    session.restore_entry(&id).unwrap();
                }
            })
        };
        writer.join().unwrap();
        restorer.join().unwrap();

        session.restore_entry(&checkpoint).unwrap();
        assert_eq!(session.snapshot().members, vec!["base"]);
    }
}
