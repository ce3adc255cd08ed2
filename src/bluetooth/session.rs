// Copyright 2026 Daniel Pelikan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HID session manager.
//!
//! Single owner of the connected-host state. Connection events from the
//! watcher set or clear the active host; send operations build the
//! press+release report pair and queue it toward the matching input
//! report characteristic. When no host is connected a send logs and does
//! nothing; no error reaches the caller and nothing is retried.

use bluer::Address;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::hid::{InputReport, ReportId};
use crate::remote::{Button, HidAction};

/// Connection state changes reported by the platform stack.
#[derive(Debug, Clone)]
pub enum ConnectionEvent {
    /// A host established its link.
    Connected {
        address: Address,
        name: Option<String>,
    },
    /// A directed connection attempt is in flight. Logged only.
    Connecting { address: Address },
    /// The link went down.
    Disconnected { address: Address },
}

/// The active host.
#[derive(Debug, Clone)]
struct HostLink {
    address: Address,
    name: Option<String>,
}

/// Session manager for the HID application.
pub struct HidSession {
    host: Mutex<Option<HostLink>>,
    keyboard_tx: mpsc::Sender<Vec<u8>>,
    consumer_tx: mpsc::Sender<Vec<u8>>,
}

impl HidSession {
    /// Create a session feeding the given per-report notification queues.
    pub fn new(keyboard_tx: mpsc::Sender<Vec<u8>>, consumer_tx: mpsc::Sender<Vec<u8>>) -> Self {
        Self {
            host: Mutex::new(None),
            keyboard_tx,
            consumer_tx,
        }
    }

    /// Apply a connection state change.
    ///
    /// A second host connecting replaces the first; a disconnect clears
    /// the active host regardless of which address it names.
    pub fn on_connection_state_changed(&self, event: &ConnectionEvent) {
        match event {
            ConnectionEvent::Connected { address, name } => {
                let mut host = self.host.lock();
                if let Some(previous) = host.as_ref() {
                    if previous.address != *address {
                        info!("Host {} replaced by {}", previous.address, address);
                    }
                }
                *host = Some(HostLink {
                    address: *address,
                    name: name.clone(),
                });
                info!(
                    "Host connected: {} ({})",
                    address,
                    name.as_deref().unwrap_or("unknown")
                );
            }
            ConnectionEvent::Connecting { address } => {
                debug!("Host connecting: {}", address);
            }
            ConnectionEvent::Disconnected { address } => {
                *self.host.lock() = None;
                info!("Host disconnected: {}", address);
            }
        }
    }

    /// Send the report pair for a remote button.
    pub fn send_button(&self, button: Button) {
        match button.action() {
            HidAction::Keyboard(code) => self.send_keyboard_command(code),
            HidAction::Consumer(usage) => self.send_consumer_command(usage),
        }
    }

    /// Send a keyboard key tap: press report with the key code in the
    /// third byte, immediately followed by an all-zero release report.
    pub fn send_keyboard_command(&self, keycode: u8) {
        if !self.is_connected() {
            warn!("Dropping keyboard command 0x{:02X}: no host connected", keycode);
            return;
        }
        debug!("Sending keyboard usage 0x{:02X}", keycode);
        self.queue_pair(
            InputReport::keyboard_press(keycode),
            InputReport::keyboard_release(),
        );
    }

    /// Send a consumer control tap: little-endian usage code followed by
    /// an all-zero release report.
    pub fn send_consumer_command(&self, usage: u16) {
        if !self.is_connected() {
            warn!("Dropping consumer command 0x{:04X}: no host connected", usage);
            return;
        }
        debug!("Sending consumer usage 0x{:04X}", usage);
        self.queue_pair(
            InputReport::consumer_press(usage),
            InputReport::consumer_release(),
        );
    }

    /// Whether a host link is active.
    pub fn is_connected(&self) -> bool {
        self.host.lock().is_some()
    }

    /// Address and alias of the active host, if any.
    pub fn connected_host(&self) -> Option<(Address, Option<String>)> {
        self.host
            .lock()
            .as_ref()
            .map(|link| (link.address, link.name.clone()))
    }

    fn queue_pair(&self, press: InputReport, release: InputReport) {
        let tx = match press.id {
            ReportId::Keyboard => &self.keyboard_tx,
            ReportId::Consumer => &self.consumer_tx,
        };
        // Bounded queue, no retry: an unsubscribed or stalled host loses
        // the tap, per the error policy. Press and release go together;
        // a press without its release would leave the host with a key
        // held down.
        if tx.capacity() < 2 {
            warn!("Dropping report ID {} pair: queue full", press.id.value());
            return;
        }
        for report in [press, release] {
            if let Err(e) = tx.try_send(report.payload) {
                warn!("Dropping report ID {}: {}", report.id.value(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (
        HidSession,
        mpsc::Receiver<Vec<u8>>,
        mpsc::Receiver<Vec<u8>>,
    ) {
        let (kb_tx, kb_rx) = mpsc::channel(8);
        let (cc_tx, cc_rx) = mpsc::channel(8);
        (HidSession::new(kb_tx, cc_tx), kb_rx, cc_rx)
    }

    fn host(last: u8) -> Address {
        Address::new([0x00, 0x11, 0x22, 0x33, 0x44, last])
    }

    fn connect(session: &HidSession, last: u8) {
        session.on_connection_state_changed(&ConnectionEvent::Connected {
            address: host(last),
            name: Some("TV".into()),
        });
    }

    #[test]
    fn test_keyboard_send_produces_press_then_release() {
        let (session, mut kb_rx, _cc_rx) = session();
        connect(&session, 0x01);

        session.send_keyboard_command(0x52);

        let press = kb_rx.try_recv().unwrap();
        let release = kb_rx.try_recv().unwrap();
        assert_eq!(press, vec![0x00, 0x00, 0x52, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(release, vec![0u8; 8]);
        assert!(kb_rx.try_recv().is_err());
    }

    #[test]
    fn test_consumer_send_produces_press_then_release() {
        let (session, _kb_rx, mut cc_rx) = session();
        connect(&session, 0x01);

        session.send_consumer_command(0x00E9);

        assert_eq!(cc_rx.try_recv().unwrap(), vec![0xE9, 0x00]);
        assert_eq!(cc_rx.try_recv().unwrap(), vec![0x00, 0x00]);
        assert!(cc_rx.try_recv().is_err());
    }

    #[test]
    fn test_send_without_host_is_a_no_op() {
        let (session, mut kb_rx, mut cc_rx) = session();

        session.send_keyboard_command(0x28);
        session.send_consumer_command(0x0030);

        assert!(kb_rx.try_recv().is_err());
        assert!(cc_rx.try_recv().is_err());
    }

    #[test]
    fn test_connected_stores_exactly_that_host() {
        let (session, _kb_rx, _cc_rx) = session();
        connect(&session, 0x01);

        let (address, name) = session.connected_host().unwrap();
        assert_eq!(address, host(0x01));
        assert_eq!(name.as_deref(), Some("TV"));
    }

    #[test]
    fn test_second_host_replaces_first() {
        let (session, _kb_rx, _cc_rx) = session();
        connect(&session, 0x01);
        connect(&session, 0x02);

        let (address, _) = session.connected_host().unwrap();
        assert_eq!(address, host(0x02));
    }

    #[test]
    fn test_disconnect_clears_regardless_of_address() {
        let (session, _kb_rx, _cc_rx) = session();
        connect(&session, 0x01);

        session.on_connection_state_changed(&ConnectionEvent::Disconnected {
            address: host(0x07),
        });
        assert!(!session.is_connected());
    }

    #[test]
    fn test_full_queue_drops_press_and_release_together() {
        let (kb_tx, mut kb_rx) = mpsc::channel(2);
        let (cc_tx, _cc_rx) = mpsc::channel(2);
        let session = HidSession::new(kb_tx.clone(), cc_tx);
        connect(&session, 0x01);

        // One slot left is not enough for a press+release pair.
        kb_tx.try_send(vec![0u8; 8]).unwrap();
        session.send_keyboard_command(0x52);

        assert_eq!(kb_rx.try_recv().unwrap(), vec![0u8; 8]);
        assert!(kb_rx.try_recv().is_err());
    }

    #[test]
    fn test_button_routes_to_matching_queue() {
        let (session, mut kb_rx, mut cc_rx) = session();
        connect(&session, 0x01);

        session.send_button(Button::Ok);
        session.send_button(Button::Mute);

        assert_eq!(kb_rx.try_recv().unwrap()[2], 0x28);
        assert_eq!(cc_rx.try_recv().unwrap(), vec![0xE2, 0x00]);
    }
}
