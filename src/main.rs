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

//! tvremote daemon entry point.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tvremote::bluetooth::{self, ConnectionEvent, ConnectionWatcher, HidServer};
use tvremote::config::Config;
use tvremote::state::AppState;
use tvremote::ui::{self, RemoteCommand, TrayAction};
use tvremote::{pairing, remote::Button};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tvremote=info".parse().unwrap()),
        )
        .init();

    info!("Starting tvremote v{}...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded");

    // Create application state
    let state = AppState::new();

    // Bring up the HID server
    let mut server = HidServer::new(&config).await?;
    server.set_name(&config.bluetooth.device_name).await?;
    server.start().await?;
    let session = server.session();

    // Pairing prompts are answered by our agent; keys stay in BlueZ.
    let _agent = pairing::register_agent(server.bluez_session(), config.bluetooth.auto_accept).await?;

    // Watch host connection state
    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<ConnectionEvent>(32);
    let watcher = ConnectionWatcher::new(server.adapter().clone(), event_tx.clone());
    tokio::spawn(async move {
        if let Err(e) = watcher.run().await {
            error!("Connection watcher failed: {}", e);
        }
    });

    // Feed connection events to the session and shared state
    let session_events = session.clone();
    let state_events = state.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            session_events.on_connection_state_changed(&event);
            match &event {
                ConnectionEvent::Connected { address, name } => {
                    state_events.set_connected(
                        name.clone().unwrap_or_else(|| address.to_string()),
                    );
                }
                ConnectionEvent::Connecting { .. } => state_events.set_connecting(),
                ConnectionEvent::Disconnected { .. } => state_events.set_disconnected(),
            }
        }
    });

    // Start front ends
    let mut tray_rx = ui::run_tray(state.clone())?;
    let mut command_rx = ui::run_terminal();

    println!("{}", ui::HELP_TEXT);
    info!("Ready. Pair the television with '{}'.", config.bluetooth.device_name);

    loop {
        tokio::select! {
            Some(command) = command_rx.recv() => {
                match command {
                    RemoteCommand::Press(button) => {
                        press(&session, &state, button);
                    }
                    RemoteCommand::Devices => {
                        match bluetooth::paired_hosts(server.adapter()).await {
                            Ok(hosts) if hosts.is_empty() => println!("No bonded devices."),
                            Ok(hosts) => {
                                for host in hosts {
                                    let marker = if host.connected { "*" } else { " " };
                                    println!("{} {}  {}", marker, host.address, host.name);
                                }
                            }
                            Err(e) => error!("Failed to list devices: {}", e),
                        }
                    }
                    RemoteCommand::Connect(address) => {
                        if let Err(e) =
                            bluetooth::connect_host(server.adapter(), address, &event_tx).await
                        {
                            error!("Connect failed: {}", e);
                        }
                    }
                    RemoteCommand::Status => {
                        match session.connected_host() {
                            Some((address, name)) => println!(
                                "Connected: {} ({})",
                                address,
                                name.as_deref().unwrap_or("unknown")
                            ),
                            None => println!("Disconnected"),
                        }
                    }
                    RemoteCommand::Help => println!("{}", ui::HELP_TEXT),
                    RemoteCommand::Quit => {
                        info!("Quit requested");
                        break;
                    }
                }
            }
            Some(action) = tray_rx.recv() => {
                match action {
                    TrayAction::Press(button) => press(&session, &state, button),
                    TrayAction::Quit => {
                        info!("Quit requested from tray");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("tvremote stopped");
    Ok(())
}

fn press(
    session: &std::sync::Arc<tvremote::bluetooth::HidSession>,
    state: &std::sync::Arc<AppState>,
    button: Button,
) {
    session.send_button(button);
    state.set_last_button(button);
}
