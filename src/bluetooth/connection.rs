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

//! Connection tracking.
//!
//! BlueZ owns the link; this module only observes it. Device property
//! events are translated into the `ConnectionEvent` stream the session
//! manager consumes. Hosts normally initiate the connection themselves
//! after bonding; `connect_host` covers the directed-reconnect case.

use anyhow::Result;
use bluer::{Adapter, Address, DeviceEvent, DeviceProperty};
use futures::StreamExt;
use std::collections::HashSet;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::session::ConnectionEvent;

/// How often the known-device list is refreshed for new bonds.
const DEVICE_SCAN_INTERVAL: Duration = Duration::from_secs(3);

/// A bonded host candidate.
#[derive(Debug, Clone)]
pub struct PairedHost {
    pub address: Address,
    pub name: String,
    pub connected: bool,
}

/// Watches device connection state and forwards changes as events.
pub struct ConnectionWatcher {
    adapter: Adapter,
    event_tx: mpsc::Sender<ConnectionEvent>,
}

impl ConnectionWatcher {
    pub fn new(adapter: Adapter, event_tx: mpsc::Sender<ConnectionEvent>) -> Self {
        Self { adapter, event_tx }
    }

    /// Run until the event channel closes. Spawns one watcher task per
    /// known device and picks up newly bonded devices as they appear.
    pub async fn run(self) -> Result<()> {
        let mut watched: HashSet<Address> = HashSet::new();
        let mut interval = tokio::time::interval(DEVICE_SCAN_INTERVAL);

        loop {
            interval.tick().await;
            if self.event_tx.is_closed() {
                break;
            }

            let addresses = self.adapter.device_addresses().await?;
            for address in addresses {
                if !watched.insert(address) {
                    continue;
                }
                let adapter = self.adapter.clone();
                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = watch_device(adapter, address, event_tx).await {
                        debug!("Device watcher for {} ended: {}", address, e);
                    }
                });
            }
        }

        Ok(())
    }
}

/// Watch one device's Connected property.
async fn watch_device(
    adapter: Adapter,
    address: Address,
    event_tx: mpsc::Sender<ConnectionEvent>,
) -> Result<()> {
    let device = adapter.device(address)?;
    let mut events = device.events().await?;

    // The device may already be up when the watcher starts.
    if device.is_connected().await? {
        let name = device.alias().await.ok();
        let _ = event_tx.send(ConnectionEvent::Connected { address, name }).await;
    }

    while let Some(DeviceEvent::PropertyChanged(property)) = events.next().await {
        match property {
            DeviceProperty::Connected(true) => {
                let name = device.alias().await.ok();
                info!("Link up: {}", address);
                if event_tx
                    .send(ConnectionEvent::Connected { address, name })
                    .await
                    .is_err()
                {
                    break;
                }
            }
            DeviceProperty::Connected(false) => {
                info!("Link down: {}", address);
                if event_tx
                    .send(ConnectionEvent::Disconnected { address })
                    .await
                    .is_err()
                {
                    break;
                }
            }
            other => {
                debug!("Device {} property changed: {:?}", address, other);
            }
        }
    }

    Ok(())
}

/// List bonded devices, the connect candidates for the front end.
pub async fn paired_hosts(adapter: &Adapter) -> Result<Vec<PairedHost>> {
    let mut hosts = Vec::new();
    for address in adapter.device_addresses().await? {
        let device = adapter.device(address)?;
        if !device.is_paired().await.unwrap_or(false) {
            continue;
        }
        hosts.push(PairedHost {
            address,
            name: device
                .alias()
                .await
                .unwrap_or_else(|_| address.to_string()),
            connected: device.is_connected().await.unwrap_or(false),
        });
    }
    Ok(hosts)
}

/// Ask BlueZ to bring up the link to a bonded host.
pub async fn connect_host(
    adapter: &Adapter,
    address: Address,
    event_tx: &mpsc::Sender<ConnectionEvent>,
) -> Result<()> {
    let device = adapter.device(address)?;
    if device.is_connected().await? {
        info!("Host {} already connected", address);
        return Ok(());
    }

    let _ = event_tx
        .send(ConnectionEvent::Connecting { address })
        .await;

    if let Err(e) = device.connect().await {
        // Connection failures are reported, not retried; the host side
        // can always initiate instead.
        warn!("Connect to {} failed: {}", address, e);
    }
    Ok(())
}
