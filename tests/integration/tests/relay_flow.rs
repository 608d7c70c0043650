//! Relay scenarios across two participants
//!
//! The capturing publisher stands in for the fanout exchange: whatever
//! one participant publishes is handed to both participants' inbound
//! relays, exactly as the broker would fan it out.

use integration_tests::{drain_notices, CapturingPublisher};
use room_client::{relay, Notice};
use room_core::{DisplayName, Identity, ShutdownSignal};
use tokio::sync::mpsc;

#[tokio::test]
async fn test_message_reaches_peer_but_not_sender() {
    let alice = Identity::new(1, DisplayName::new("alice").unwrap());

    // Participant 1 publishes "hi"
    let publisher = CapturingPublisher::new();
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    line_tx.send("hi".to_string()).unwrap();
    drop(line_tx);

    relay::outbound::run(line_rx, alice, publisher.clone(), ShutdownSignal::new()).await;

    let frames = publisher.frames();
    assert_eq!(frames.len(), 1);

    // Fan the frame out to both participants
    let deliver = |frames: &[Vec<u8>]| {
        let (tx, rx) = mpsc::unbounded_channel();
        for frame in frames {
            tx.send(frame.clone()).unwrap();
        }
        drop(tx);
        rx
    };

    // Participant 2 (id 2) displays it with alice's name
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    relay::inbound::run(deliver(&frames), 2, notice_tx, ShutdownSignal::new()).await;

    let notices = drain_notices(&mut notice_rx);
    assert_eq!(notices.len(), 1);
    assert!(
        matches!(&notices[0], Notice::Chat { sender, text, .. } if sender == "alice" && text == "hi")
    );

    // Participant 1 (id 1) suppresses its own echo
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    relay::inbound::run(deliver(&frames), 1, notice_tx, ShutdownSignal::new()).await;

    assert!(drain_notices(&mut notice_rx).is_empty());
}

#[tokio::test]
async fn test_malformed_frame_is_dropped_without_stopping_the_relay() {
    let (payload_tx, payload_rx) = mpsc::unbounded_channel();
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();

    payload_tx.send(b"\xff\xfe not a message".to_vec()).unwrap();
    payload_tx
        .send(
            serde_json::to_vec(&room_core::ChatMessage {
                sender_id: 2,
                sender_name: "bob".to_string(),
                text: "still here".to_string(),
                sent_at: "08:00:00".to_string(),
            })
            .unwrap(),
        )
        .unwrap();
    drop(payload_tx);

    relay::inbound::run(payload_rx, 1, notice_tx, ShutdownSignal::new()).await;

    // The garbage frame is gone; the valid one that followed still shows
    let notices = drain_notices(&mut notice_rx);
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::Chat { text, .. } if text == "still here"));
}

#[tokio::test]
async fn test_wire_format_round_trips_between_participants() {
    let alice = Identity::new(1, DisplayName::new("alice").unwrap());

    let publisher = CapturingPublisher::new();
    let (line_tx, line_rx) = mpsc::unbounded_channel();
    line_tx.send("first".to_string()).unwrap();
    line_tx.send("second".to_string()).unwrap();
    drop(line_tx);

    relay::outbound::run(line_rx, alice, publisher.clone(), ShutdownSignal::new()).await;

    let frames = publisher.frames();
    assert_eq!(frames.len(), 2);

    for (frame, expected) in frames.iter().zip(["first", "second"]) {
        let value: serde_json::Value = serde_json::from_slice(frame).unwrap();
        assert_eq!(value["UserID"], 1);
        assert_eq!(value["UserName"], "alice");
        assert_eq!(value["Text"], expected);
        assert!(value["CreatedAt"].is_string());
    }
}
