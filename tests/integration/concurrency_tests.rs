//! One bridge shared across threads.

use std::{sync::Arc, thread};

use gate_trace::{Argument, GateObserver, testing::TestGate};

use crate::common::{Post, User, recording_bridge};

#[test]
fn test_shared_bridge_across_threads() {
    let (bridge, sink) = recording_bridge();

    thread::scope(|scope| {
        for worker in 0..8u64 {
            let bridge = Arc::clone(&bridge);
            scope.spawn(move || {
                let user = User::new(worker, "worker");
                for n in 0..25u64 {
                    let post = Post::new(worker * 1_000 + n);
                    let args = [Argument::entity(&post)];
                    bridge.on_check_started(&user, "edit-post", &args);
                    assert_eq!(bridge.on_check_finished(&user, "edit-post", n % 2 == 0, &args), n % 2 == 0);
                }
            });
        }
    });

    assert_eq!(bridge.pending_len(), 0);
    assert_eq!(sink.ended_spans().len(), 200);
}

#[test]
fn test_gate_shared_across_threads() {
    let (bridge, sink) = recording_bridge();
    let observer: Arc<dyn GateObserver> = bridge.clone();
    let gate = TestGate::new().define("view", |_, args| !args.is_empty()).observe(observer);

    thread::scope(|scope| {
        for worker in 0..4u64 {
            let gate = &gate;
            scope.spawn(move || {
                let user = User::new(worker, "worker");
                assert!(gate.allows(&user, "view", &[Argument::from(worker)]));
            });
        }
    });

    assert_eq!(bridge.pending_len(), 0);
    assert_eq!(sink.ended_spans().len(), 4);
}
