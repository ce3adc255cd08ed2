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

//! System tray implementation using ksni.

use anyhow::Result;
use ksni::{self, menu::StandardItem, MenuItem, Tray, TrayService};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

use crate::remote::Button;
use crate::state::{AppState, ConnectionStatus};

/// Actions that can be triggered from the tray menu.
#[derive(Debug, Clone)]
pub enum TrayAction {
    Press(Button),
    Quit,
}

/// System tray icon and menu.
pub struct RemoteTray {
    state: Arc<AppState>,
    action_tx: mpsc::UnboundedSender<TrayAction>,
}

impl RemoteTray {
    pub fn new(state: Arc<AppState>, action_tx: mpsc::UnboundedSender<TrayAction>) -> Self {
        Self { state, action_tx }
    }
}

impl Tray for RemoteTray {
    fn icon_name(&self) -> String {
        self.state.get_status().icon_name().to_string()
    }

    fn title(&self) -> String {
        "TV Remote".to_string()
    }

    fn tool_tip(&self) -> ksni::ToolTip {
        let status = self.state.get_status();

        let description = match status {
            ConnectionStatus::Connected => {
                let host = self.state.get_host_name().unwrap_or_default();
                match self.state.get_last_button() {
                    Some(button) => format!("Connected to {}\nLast: {}", host, button.name()),
                    None => format!("Connected to {}", host),
                }
            }
            ConnectionStatus::Connecting => "Connecting...".to_string(),
            ConnectionStatus::Disconnected => "Waiting for television...".to_string(),
        };

        ksni::ToolTip {
            icon_name: String::new(),
            icon_pixmap: Vec::new(),
            title: "TV Remote".to_string(),
            description,
        }
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        let status = self.state.get_status();

        let status_text = match status {
            ConnectionStatus::Connected => {
                let host = self
                    .state
                    .get_host_name()
                    .unwrap_or_else(|| "Unknown".to_string());
                format!("● Connected: {}", host)
            }
            ConnectionStatus::Connecting => "◐ Connecting...".to_string(),
            ConnectionStatus::Disconnected => "○ Disconnected".to_string(),
        };

        vec![
            MenuItem::Standard(StandardItem {
                label: status_text,
                enabled: false,
                ..Default::default()
            }),
            MenuItem::Separator,
            MenuItem::Standard(StandardItem {
                label: "Power".to_string(),
                activate: Box::new(|tray: &mut Self| {
                    let _ = tray.action_tx.send(TrayAction::Press(Button::Power));
                }),
                ..Default::default()
            }),
            MenuItem::Standard(StandardItem {
                label: "Mute".to_string(),
                activate: Box::new(|tray: &mut Self| {
                    let _ = tray.action_tx.send(TrayAction::Press(Button::Mute));
                }),
                ..Default::default()
            }),
            MenuItem::Separator,
            MenuItem::Standard(StandardItem {
                label: "Quit".to_string(),
                activate: Box::new(|tray: &mut Self| {
                    let _ = tray.action_tx.send(TrayAction::Quit);
                }),
                ..Default::default()
            }),
        ]
    }

    fn id(&self) -> String {
        "tvremote".to_string()
    }

    fn category(&self) -> ksni::Category {
        ksni::Category::Hardware
    }
}

/// Run the system tray service.
pub fn run_tray(state: Arc<AppState>) -> Result<mpsc::UnboundedReceiver<TrayAction>> {
    let (action_tx, action_rx) = mpsc::unbounded_channel();

    let tray = RemoteTray::new(state, action_tx);
    let service = TrayService::new(tray);

    // ksni runs its own D-Bus loop.
    std::thread::spawn(move || {
        let _ = service.run();
    });

    info!("System tray started");

    Ok(action_rx)
}
