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

//! HID over GATT server.
//!
//! Registers the HID application with BlueZ: the HID service carrying the
//! report map and the two input report characteristics, plus the battery
//! and device information services HOGP hosts expect, then starts LE
//! advertising as a remote control. Everything below the GATT surface
//! (ATT, bonding, encryption) is BlueZ's responsibility.

use anyhow::Result;
use bluer::adv::{Advertisement, AdvertisementHandle};
use bluer::gatt::local::{
    Application, ApplicationHandle, Characteristic, CharacteristicNotify,
    CharacteristicNotifyMethod, CharacteristicRead, CharacteristicWrite,
    CharacteristicWriteMethod, Descriptor, DescriptorRead, Service,
};
use bluer::{Adapter, Address};
use parking_lot::Mutex as SyncMutex;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info};

use super::constants::*;
use super::session::HidSession;
use crate::config::Config;
use crate::hid::descriptor::{
    CONSUMER_REPORT_ID, HID_INFORMATION, KEYBOARD_REPORT_ID, PROTOCOL_MODE_REPORT, REPORT_MAP,
    REPORT_TYPE_INPUT, REPORT_TYPE_OUTPUT,
};

/// Notification queue depth per input report characteristic.
const REPORT_QUEUE_DEPTH: usize = 32;

/// HID over GATT server for the remote.
pub struct HidServer {
    bluez: bluer::Session,
    adapter: Adapter,
    device_name: String,
    manufacturer: String,
    model: String,
    session: Arc<HidSession>,
    keyboard_rx: Arc<Mutex<mpsc::Receiver<Vec<u8>>>>,
    consumer_rx: Arc<Mutex<mpsc::Receiver<Vec<u8>>>>,
    _adv_handle: Option<AdvertisementHandle>,
    _app_handle: Option<ApplicationHandle>,
}

impl HidServer {
    /// Create a new server on the default adapter.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing Bluetooth HID server...");

        let bluez = bluer::Session::new().await?;
        info!("BlueZ session created");

        let adapter = bluez.default_adapter().await?;
        info!("Using Bluetooth adapter: {}", adapter.name());

        if !adapter.is_powered().await? {
            info!("Powering on Bluetooth adapter...");
            adapter.set_powered(true).await?;
        }

        let (keyboard_tx, keyboard_rx) = mpsc::channel(REPORT_QUEUE_DEPTH);
        let (consumer_tx, consumer_rx) = mpsc::channel(REPORT_QUEUE_DEPTH);

        Ok(Self {
            bluez,
            adapter,
            device_name: config.bluetooth.device_name.clone(),
            manufacturer: config.device_info.manufacturer.clone(),
            model: config.device_info.model.clone(),
            session: Arc::new(HidSession::new(keyboard_tx, consumer_tx)),
            keyboard_rx: Arc::new(Mutex::new(keyboard_rx)),
            consumer_rx: Arc::new(Mutex::new(consumer_rx)),
            _adv_handle: None,
            _app_handle: None,
        })
    }

    /// The session manager fed by this server.
    pub fn session(&self) -> Arc<HidSession> {
        self.session.clone()
    }

    /// The adapter the server runs on.
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// The underlying BlueZ session, needed for agent registration.
    pub fn bluez_session(&self) -> &bluer::Session {
        &self.bluez
    }

    /// Adapter address.
    pub async fn address(&self) -> Result<Address> {
        Ok(self.adapter.address().await?)
    }

    /// Set the name hosts see when pairing.
    pub async fn set_name(&self, name: &str) -> Result<()> {
        self.adapter.set_alias(name.to_string()).await?;
        info!("Bluetooth name set to: {}", name);
        Ok(())
    }

    /// Register the GATT application and start advertising. Calling this
    /// again re-registers; the new handles replace the old ones.
    pub async fn start(&mut self) -> Result<()> {
        self.adapter.set_pairable(true).await?;
        self.register_application().await?;
        self.start_advertising().await?;
        info!("HID server started");
        Ok(())
    }

    /// Register HID, battery, and device information services with BlueZ.
    async fn register_application(&mut self) -> Result<()> {
        let app = Application {
            services: vec![
                self.hid_service(),
                self.battery_service(),
                self.device_info_service(),
            ],
            ..Default::default()
        };

        self._app_handle = Some(self.adapter.serve_gatt_application(app).await?);
        info!("HID application registered ({} byte report map)", REPORT_MAP.len());
        Ok(())
    }

    fn hid_service(&self) -> Service {
        let keyboard_input = Self::input_report_characteristic(
            "keyboard",
            KEYBOARD_REPORT_ID,
            self.keyboard_rx.clone(),
        );
        let consumer_input = Self::input_report_characteristic(
            "consumer",
            CONSUMER_REPORT_ID,
            self.consumer_rx.clone(),
        );

        Service {
            uuid: HID_SERVICE_UUID,
            primary: true,
            characteristics: vec![
                Self::protocol_mode_characteristic(),
                Self::read_characteristic(HID_INFORMATION_UUID, HID_INFORMATION.to_vec()),
                Self::read_characteristic(REPORT_MAP_UUID, REPORT_MAP.to_vec()),
                Self::control_point_characteristic(),
                keyboard_input,
                consumer_input,
                Self::led_output_characteristic(),
            ],
            ..Default::default()
        }
    }

    fn battery_service(&self) -> Service {
        Service {
            uuid: BATTERY_SERVICE_UUID,
            primary: true,
            // Mains-powered; a constant full battery keeps HOGP hosts happy.
            characteristics: vec![Self::read_characteristic(BATTERY_LEVEL_UUID, vec![100])],
            ..Default::default()
        }
    }

    fn device_info_service(&self) -> Service {
        Service {
            uuid: DEVICE_INFO_SERVICE_UUID,
            primary: true,
            characteristics: vec![
                Self::read_characteristic(
                    MANUFACTURER_NAME_UUID,
                    self.manufacturer.as_bytes().to_vec(),
                ),
                Self::read_characteristic(MODEL_NUMBER_UUID, self.model.as_bytes().to_vec()),
                Self::read_characteristic(PNP_ID_UUID, PNP_ID.to_vec()),
            ],
            ..Default::default()
        }
    }

    /// Read-only characteristic with a fixed value.
    fn read_characteristic(uuid: uuid::Uuid, value: Vec<u8>) -> Characteristic {
        Characteristic {
            uuid,
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(move |_req| {
                    let value = value.clone();
                    Box::pin(async move { Ok(value) })
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Protocol Mode: report protocol, boot mode requests are ignored.
    fn protocol_mode_characteristic() -> Characteristic {
        Characteristic {
            uuid: PROTOCOL_MODE_UUID,
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(|_req| Box::pin(async { Ok(vec![PROTOCOL_MODE_REPORT]) })),
                ..Default::default()
            }),
            write: Some(CharacteristicWrite {
                write_without_response: true,
                method: CharacteristicWriteMethod::Fun(Box::new(|data, _req| {
                    Box::pin(async move {
                        debug!("Protocol mode write: {:02X?} (report mode only)", data);
                        Ok(())
                    })
                })),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// HID Control Point: suspend notifications are logged, not acted on.
    fn control_point_characteristic() -> Characteristic {
        Characteristic {
            uuid: HID_CONTROL_POINT_UUID,
            write: Some(CharacteristicWrite {
                write_without_response: true,
                method: CharacteristicWriteMethod::Fun(Box::new(|data, _req| {
                    Box::pin(async move {
                        match data.first() {
                            Some(0x00) => debug!("Host requested suspend"),
                            Some(0x01) => debug!("Host requested exit suspend"),
                            other => debug!("Control point write: {:?}", other),
                        }
                        Ok(())
                    })
                })),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Input report characteristic: notify loop draining the session's
    /// report queue, plus the Report Reference descriptor naming the
    /// report ID.
    fn input_report_characteristic(
        label: &'static str,
        report_id: u8,
        rx: Arc<Mutex<mpsc::Receiver<Vec<u8>>>>,
    ) -> Characteristic {
        Characteristic {
            uuid: REPORT_UUID,
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(|_req| Box::pin(async { Ok(Vec::new()) })),
                ..Default::default()
            }),
            notify: Some(CharacteristicNotify {
                notify: true,
                method: CharacteristicNotifyMethod::Fun(Box::new(move |mut notifier| {
                    let rx = rx.clone();
                    Box::pin(async move {
                        info!("Host subscribed to {} input reports", label);
                        loop {
                            let report = {
                                let mut rx = rx.lock().await;
                                rx.recv().await
                            };
                            match report {
                                Some(payload) => {
                                    debug!("Notifying {} report: {:02X?}", label, payload);
                                    if let Err(e) = notifier.notify(payload).await {
                                        error!("Failed to notify {} report: {}", label, e);
                                        break;
                                    }
                                }
                                None => break,
                            }
                        }
                        info!("{} input report subscription ended", label);
                    })
                })),
                ..Default::default()
            }),
            descriptors: vec![Self::report_reference(report_id, REPORT_TYPE_INPUT)],
            ..Default::default()
        }
    }

    /// Keyboard LED output report. The remote has no LEDs; writes are
    /// stored and logged so the host sees a well-behaved keyboard.
    fn led_output_characteristic() -> Characteristic {
        let led_state = Arc::new(SyncMutex::new(0u8));
        let read_state = led_state.clone();

        Characteristic {
            uuid: REPORT_UUID,
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(move |_req| {
                    let state = *read_state.lock();
                    Box::pin(async move { Ok(vec![state]) })
                }),
                ..Default::default()
            }),
            write: Some(CharacteristicWrite {
                write: true,
                write_without_response: true,
                method: CharacteristicWriteMethod::Fun(Box::new(move |data, _req| {
                    let led_state = led_state.clone();
                    Box::pin(async move {
                        if let Some(&bits) = data.first() {
                            *led_state.lock() = bits;
                            debug!("LED output report: 0b{:05b}", bits & 0x1F);
                        }
                        Ok(())
                    })
                })),
                ..Default::default()
            }),
            descriptors: vec![Self::report_reference(KEYBOARD_REPORT_ID, REPORT_TYPE_OUTPUT)],
            ..Default::default()
        }
    }

    /// Report Reference descriptor: (report ID, report type).
    fn report_reference(report_id: u8, report_type: u8) -> Descriptor {
        Descriptor {
            uuid: REPORT_REFERENCE_UUID,
            read: Some(DescriptorRead {
                read: true,
                fun: Box::new(move |_req| Box::pin(async move { Ok(vec![report_id, report_type]) })),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Start LE advertising with the remote-control appearance.
    async fn start_advertising(&mut self) -> Result<()> {
        let adv = Advertisement {
            service_uuids: vec![HID_SERVICE_UUID].into_iter().collect(),
            appearance: Some(APPEARANCE_REMOTE_CONTROL),
            discoverable: Some(true),
            local_name: Some(self.device_name.clone()),
            ..Default::default()
        };

        self._adv_handle = Some(self.adapter.advertise(adv).await?);
        info!("Advertising as '{}'", self.device_name);
        Ok(())
    }
}
