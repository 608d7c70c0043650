//! Presence reconciliation scenarios
//!
//! Drives the poller tick by tick against a scripted directory; no
//! database is involved.

use std::time::Duration;

use integration_tests::{drain_notices, names, StubDirectory};
use room_client::{Notice, PresencePoller};
use room_core::{DirectoryError, ShutdownSignal};
use tokio::sync::mpsc;

fn poller_with_script(
    script: Vec<Result<std::collections::HashSet<String>, DirectoryError>>,
    shutdown: ShutdownSignal,
) -> (PresencePoller, mpsc::UnboundedReceiver<Notice>) {
    let (tx, rx) = mpsc::unbounded_channel();
    // The interval is long on purpose: scenario tests drive ticks
    // explicitly via poll_once, and the run-loop test must only ever see
    // the immediate first tick before shutdown fires.
    let poller = PresencePoller::new(
        StubDirectory::with_script(script),
        1,
        Duration::from_secs(60),
        shutdown,
        tx,
    );
    (poller, rx)
}

#[tokio::test]
async fn test_join_then_leave_produces_ordered_notices() {
    let (mut poller, mut rx) = poller_with_script(
        vec![Ok(names(&["alice"])), Ok(names(&[]))],
        ShutdownSignal::new(),
    );

    poller.poll_once().await;
    assert_eq!(poller.tracked(), names(&["alice"]));

    poller.poll_once().await;
    assert!(poller.tracked().is_empty());

    let notices = drain_notices(&mut rx);
    let about_alice: Vec<&Notice> = notices
        .iter()
        .filter(|n| {
            matches!(
                n,
                Notice::PeerOnline { name, .. } | Notice::PeerExited { name, .. } if name == "alice"
            )
        })
        .collect();

    assert_eq!(about_alice.len(), 2);
    assert!(matches!(about_alice[0], Notice::PeerOnline { .. }));
    assert!(matches!(about_alice[1], Notice::PeerExited { .. }));
}

#[tokio::test]
async fn test_steady_listing_spawns_nothing_new() {
    let (mut poller, mut rx) = poller_with_script(
        vec![
            Ok(names(&["alice", "bob"])),
            Ok(names(&["alice", "bob"])),
            Ok(names(&["alice", "bob"])),
        ],
        ShutdownSignal::new(),
    );

    poller.poll_once().await;
    assert_eq!(drain_notices(&mut rx).len(), 2);

    poller.poll_once().await;
    poller.poll_once().await;
    assert!(drain_notices(&mut rx).is_empty());
    assert_eq!(poller.tracked(), names(&["alice", "bob"]));
}

#[tokio::test]
async fn test_empty_room_announced_once() {
    let (mut poller, mut rx) = poller_with_script(
        vec![Ok(names(&["alice"])), Ok(names(&[])), Ok(names(&[]))],
        ShutdownSignal::new(),
    );

    poller.poll_once().await;
    drain_notices(&mut rx);

    poller.poll_once().await;
    let notices = drain_notices(&mut rx);
    assert_eq!(
        notices.iter().filter(|n| matches!(n, Notice::RoomEmpty)).count(),
        1
    );

    poller.poll_once().await;
    assert!(drain_notices(&mut rx).is_empty());
}

#[tokio::test]
async fn test_failed_poll_keeps_previous_view() {
    let (mut poller, mut rx) = poller_with_script(
        vec![
            Ok(names(&["alice"])),
            Err(DirectoryError::Unavailable("directory restarting".to_string())),
        ],
        ShutdownSignal::new(),
    );

    poller.poll_once().await;
    drain_notices(&mut rx);

    poller.poll_once().await;

    // The tick was skipped: alice is still tracked and no exit notice fired
    assert_eq!(poller.tracked(), names(&["alice"]));
    assert!(drain_notices(&mut rx).is_empty());
}

#[tokio::test]
async fn test_run_loop_tears_down_monitors_on_shutdown() {
    let shutdown = ShutdownSignal::new();
    let (poller, mut rx) = poller_with_script(
        vec![Ok(names(&["alice", "bob"]))],
        shutdown.clone(),
    );

    let task = tokio::spawn(poller.run());

    // Give the immediate first tick a chance to spawn both monitors;
    // the next tick is a minute away, so the exits below can only come
    // from shutdown teardown
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown.trigger();
    task.await.unwrap();

    let notices = drain_notices(&mut rx);
    let onlines = notices
        .iter()
        .filter(|n| matches!(n, Notice::PeerOnline { .. }))
        .count();
    let exits = notices
        .iter()
        .filter(|n| matches!(n, Notice::PeerExited { .. }))
        .count();

    assert_eq!(onlines, 2);
    assert_eq!(exits, 2);
}
