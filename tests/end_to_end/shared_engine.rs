//! One writer, many readers behind a lock

use crate::common::*;
use parking_lot::RwLock;
use quarry::{DocumentStatus, ExecutionPolicy};
use std::sync::Arc;
use std::thread;

#[test]
fn readers_see_consistent_results_between_writes() {
    let engine = Arc::new(RwLock::new(pet_engine()));
    let baseline = engine.read().find_top_documents("nasty rat").unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let baseline = baseline.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let guard = engine.read();
                    let hits = guard
                        .find_top_documents_with_policy(
                            ExecutionPolicy::Parallel,
                            "nasty rat",
                            |_, status, _| status == DocumentStatus::Actual,
                        )
                        .unwrap();
                    assert_eq!(hits.len(), baseline.len());
                }
            })
        })
        .collect();
    for reader in readers {
        reader.join().unwrap();
    }

    {
        let mut guard = engine.write();
        guard
            .add_document(100, "nasty nasty rat", DocumentStatus::Banned, &[9])
            .unwrap();
    }
    let banned = engine
        .read()
        .find_top_documents_by_status("rat", DocumentStatus::Banned)
        .unwrap();
    assert_eq!(banned.len(), 1);
    assert_eq!(banned[0].id, 100);
}
