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

//! Bluetooth SIG assigned numbers for the HID over GATT profile.

use uuid::Uuid;

/// Bluetooth base UUID with the 16-bit alias slot zeroed.
const SIG_BASE: u128 = 0x00000000_0000_1000_8000_00805F9B34FB;

/// Expand a 16-bit SIG-assigned UUID to its 128-bit form.
pub const fn sig_uuid(short: u16) -> Uuid {
    Uuid::from_u128(((short as u128) << 96) | SIG_BASE)
}

/// Human Interface Device service.
pub const HID_SERVICE_UUID: Uuid = sig_uuid(0x1812);

/// Battery service.
pub const BATTERY_SERVICE_UUID: Uuid = sig_uuid(0x180F);

/// Device Information service.
pub const DEVICE_INFO_SERVICE_UUID: Uuid = sig_uuid(0x180A);

/// HID Information characteristic. Properties: Read.
pub const HID_INFORMATION_UUID: Uuid = sig_uuid(0x2A4A);

/// Report Map characteristic. Properties: Read.
pub const REPORT_MAP_UUID: Uuid = sig_uuid(0x2A4B);

/// HID Control Point characteristic. Properties: Write Without Response.
pub const HID_CONTROL_POINT_UUID: Uuid = sig_uuid(0x2A4C);

/// Report characteristic (one instance per report). Properties vary by
/// report type; input reports are Read + Notify.
pub const REPORT_UUID: Uuid = sig_uuid(0x2A4D);

/// Protocol Mode characteristic. Properties: Read, Write Without Response.
pub const PROTOCOL_MODE_UUID: Uuid = sig_uuid(0x2A4E);

/// Report Reference descriptor carried by each Report characteristic.
pub const REPORT_REFERENCE_UUID: Uuid = sig_uuid(0x2908);

/// Battery Level characteristic. Properties: Read, Notify.
pub const BATTERY_LEVEL_UUID: Uuid = sig_uuid(0x2A19);

/// Manufacturer Name String characteristic.
pub const MANUFACTURER_NAME_UUID: Uuid = sig_uuid(0x2A29);

/// Model Number String characteristic.
pub const MODEL_NUMBER_UUID: Uuid = sig_uuid(0x2A24);

/// PnP ID characteristic, required by some HOGP hosts.
pub const PNP_ID_UUID: Uuid = sig_uuid(0x2A50);

/// PnP ID value: vendor ID source USB-IF, Linux Foundation VID, product
/// 0x0246, version 1.0.
pub const PNP_ID: [u8; 7] = [0x02, 0x6B, 0x1D, 0x46, 0x02, 0x00, 0x01];

/// GAP appearance: Generic Remote Control.
pub const APPEARANCE_REMOTE_CONTROL: u16 = 0x0180;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sig_uuid_expansion() {
        assert_eq!(
            HID_SERVICE_UUID.to_string(),
            "00001812-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(
            REPORT_REFERENCE_UUID.to_string(),
            "00002908-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_report_characteristics_distinct_from_map() {
        assert_ne!(REPORT_UUID, REPORT_MAP_UUID);
    }
}
