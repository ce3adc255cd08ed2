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

//! Application state management.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::remote::Button;

/// Connection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "network-offline",
            ConnectionStatus::Connecting => "network-idle",
            ConnectionStatus::Connected => "network-transmit-receive",
        }
    }
}

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    /// Current connection status.
    pub connection_status: RwLock<ConnectionStatus>,

    /// Connected host name.
    pub connected_host: RwLock<Option<String>>,

    /// Last button sent (for the tray tooltip).
    pub last_button: RwLock<Option<Button>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            connection_status: RwLock::new(ConnectionStatus::Disconnected),
            connected_host: RwLock::new(None),
            last_button: RwLock::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_connected(&self, host_name: String) {
        *self.connection_status.write() = ConnectionStatus::Connected;
        *self.connected_host.write() = Some(host_name);
    }

    pub fn set_connecting(&self) {
        *self.connection_status.write() = ConnectionStatus::Connecting;
    }

    pub fn set_disconnected(&self) {
        *self.connection_status.write() = ConnectionStatus::Disconnected;
        *self.connected_host.write() = None;
    }

    pub fn get_status(&self) -> ConnectionStatus {
        *self.connection_status.read()
    }

    pub fn get_host_name(&self) -> Option<String> {
        self.connected_host.read().clone()
    }

    pub fn set_last_button(&self, button: Button) {
        *self.last_button.write() = Some(button);
    }

    pub fn get_last_button(&self) -> Option<Button> {
        *self.last_button.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_then_disconnect() {
        let state = AppState::new();
        state.set_connected("Living Room TV".into());
        assert_eq!(state.get_status(), ConnectionStatus::Connected);
        assert_eq!(state.get_host_name().as_deref(), Some("Living Room TV"));

        state.set_disconnected();
        assert_eq!(state.get_status(), ConnectionStatus::Disconnected);
        assert!(state.get_host_name().is_none());
    }

    #[test]
    fn test_last_button_tracking() {
        let state = AppState::new();
        assert!(state.get_last_button().is_none());
        state.set_last_button(Button::VolumeUp);
        assert_eq!(state.get_last_button(), Some(Button::VolumeUp));
    }
}
