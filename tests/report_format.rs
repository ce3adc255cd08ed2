//! Integration tests for report framing through the session manager.

use bluer::Address;
use tokio::sync::mpsc;

use tvremote::bluetooth::{ConnectionEvent, HidSession};
use tvremote::hid::descriptor::{CONSUMER_REPORT_ID, KEYBOARD_REPORT_ID, REPORT_MAP};
use tvremote::remote::{Button, HidAction};

fn connected_session() -> (
    HidSession,
    mpsc::Receiver<Vec<u8>>,
    mpsc::Receiver<Vec<u8>>,
) {
    let (kb_tx, kb_rx) = mpsc::channel(64);
    let (cc_tx, cc_rx) = mpsc::channel(64);
    let session = HidSession::new(kb_tx, cc_tx);
    session.on_connection_state_changed(&ConnectionEvent::Connected {
        address: Address::new([0xAA, 0xBB, 0xCC, 0x00, 0x00, 0x01]),
        name: Some("Test TV".into()),
    });
    (session, kb_rx, cc_rx)
}

#[test]
fn every_keyboard_button_frames_press_then_release() {
    let (session, mut kb_rx, _cc_rx) = connected_session();

    for button in [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Ok,
        Button::Back,
        Button::Settings,
        Button::ChannelUp,
        Button::ChannelDown,
        Button::Netflix,
        Button::YouTube,
        Button::PrimeVideo,
        Button::Media,
    ] {
        let code = match button.action() {
            HidAction::Keyboard(code) => code,
            HidAction::Consumer(_) => panic!("{:?} should be a keyboard action", button),
        };
        session.send_button(button);

        let press = kb_rx.try_recv().unwrap();
        let release = kb_rx.try_recv().unwrap();
        assert_eq!(press.len(), 8);
        assert_eq!(press[2], code, "{:?} key code at byte offset 2", button);
        assert!(
            press.iter().enumerate().all(|(i, &b)| i == 2 || b == 0),
            "{:?} press report has stray bytes: {:02X?}",
            button,
            press
        );
        assert_eq!(release, vec![0u8; 8], "{:?} release report", button);
    }
}

#[test]
fn every_consumer_button_frames_little_endian_press_then_release() {
    let (session, _kb_rx, mut cc_rx) = connected_session();

    for button in [
        Button::Power,
        Button::Home,
        Button::VolumeUp,
        Button::VolumeDown,
        Button::Mute,
    ] {
        let usage = match button.action() {
            HidAction::Consumer(usage) => usage,
            HidAction::Keyboard(_) => panic!("{:?} should be a consumer action", button),
        };
        session.send_button(button);

        let press = cc_rx.try_recv().unwrap();
        let release = cc_rx.try_recv().unwrap();
        assert_eq!(press, usage.to_le_bytes().to_vec(), "{:?} press", button);
        assert_eq!(release, vec![0x00, 0x00], "{:?} release", button);
    }
}

#[test]
fn volume_up_example_from_usage_tables() {
    let (session, _kb_rx, mut cc_rx) = connected_session();

    session.send_consumer_command(0x00E9);
    assert_eq!(cc_rx.try_recv().unwrap(), vec![0xE9, 0x00]);
    assert_eq!(cc_rx.try_recv().unwrap(), vec![0x00, 0x00]);
}

#[test]
fn arrow_up_example_at_byte_offset_two() {
    let (session, mut kb_rx, _cc_rx) = connected_session();

    session.send_keyboard_command(82);
    assert_eq!(
        kb_rx.try_recv().unwrap(),
        vec![0x00, 0x00, 0x52, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(kb_rx.try_recv().unwrap(), vec![0u8; 8]);
}

#[test]
fn disconnected_session_drops_everything_silently() {
    let (kb_tx, mut kb_rx) = mpsc::channel(8);
    let (cc_tx, mut cc_rx) = mpsc::channel(8);
    let session = HidSession::new(kb_tx, cc_tx);

    for button in [Button::Ok, Button::Power, Button::VolumeUp, Button::Up] {
        session.send_button(button);
    }

    assert!(kb_rx.try_recv().is_err());
    assert!(cc_rx.try_recv().is_err());
}

#[test]
fn report_map_declares_both_report_ids() {
    let ids: Vec<u8> = REPORT_MAP
        .windows(2)
        .filter(|w| w[0] == 0x85)
        .map(|w| w[1])
        .collect();
    assert_eq!(ids, vec![KEYBOARD_REPORT_ID, CONSUMER_REPORT_ID]);
}
