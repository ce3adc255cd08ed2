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

//! tvremote: Bluetooth HID remote control for televisions.
//!
//! Emulates a HID over GATT keyboard + consumer-control peripheral via
//! BlueZ. The Bluetooth transport, bonding, and pairing flow belong to
//! the platform stack; this crate assembles the report descriptor,
//! tracks the connected host, and frames input reports.

pub mod bluetooth;
pub mod config;
pub mod hid;
pub mod pairing;
pub mod remote;
pub mod state;
pub mod ui;
