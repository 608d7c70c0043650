//! Shutdown coordination scenarios

use integration_tests::StubDirectory;
use room_client::RoomManager;
use room_core::{DisplayName, ShutdownSignal};

#[tokio::test]
async fn test_double_shutdown_marks_offline_once() {
    let directory = StubDirectory::empty();
    let manager = RoomManager::login(DisplayName::new("alice").unwrap(), directory.clone())
        .await
        .unwrap();

    // Interrupt handler and logout path racing into the same teardown
    manager.shutdown().await;
    manager.shutdown().await;

    assert_eq!(directory.mark_offline_calls(), 1);
    assert!(manager.shutdown_signal().is_triggered());
}

#[tokio::test]
async fn test_signal_can_be_triggered_repeatedly() {
    let signal = ShutdownSignal::new();
    signal.trigger();
    signal.trigger();
    signal.trigger();
    assert!(signal.is_triggered());

    // Late observers see it immediately
    signal.triggered().await;
}

#[tokio::test]
async fn test_logout_command_reaches_the_shutdown_signal() {
    use integration_tests::CapturingPublisher;
    use room_client::relay;
    use tokio::sync::mpsc;

    let directory = StubDirectory::empty();
    let manager = RoomManager::login(DisplayName::new("alice").unwrap(), directory.clone())
        .await
        .unwrap();
    let shutdown = manager.shutdown_signal();

    let (line_tx, line_rx) = mpsc::unbounded_channel();
    line_tx.send(relay::LOGOUT_COMMAND.to_string()).unwrap();

    let identity = manager.identity().clone();
    relay::outbound::run(line_rx, identity, CapturingPublisher::new(), shutdown.clone()).await;

    assert!(shutdown.is_triggered());

    // The manager still owes the directory its mark_offline
    manager.shutdown().await;
    assert_eq!(directory.mark_offline_calls(), 1);
}

#[tokio::test]
async fn test_registration_failure_prevents_login() {
    use async_trait::async_trait;
    use room_core::{DirectoryError, DirectoryResult, PresenceDirectory};
    use std::collections::HashSet;
    use std::sync::Arc;

    struct DownDirectory;

    #[async_trait]
    impl PresenceDirectory for DownDirectory {
        async fn register(&self, _name: &DisplayName) -> DirectoryResult<i64> {
            Err(DirectoryError::Unavailable("connection refused".to_string()))
        }

        async fn list_online(&self, _excluding: i64) -> DirectoryResult<HashSet<String>> {
            Ok(HashSet::new())
        }

        async fn mark_offline(&self, _id: i64) -> DirectoryResult<()> {
            Ok(())
        }
    }

    let result = RoomManager::login(DisplayName::new("alice").unwrap(), Arc::new(DownDirectory)).await;
    assert!(result.is_err());
}
