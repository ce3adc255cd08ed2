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

//! HID report map served to the host via the Report Map characteristic.
//!
//! Two collections multiplexed by report ID: ID 1 is a boot keyboard
//! (8-byte input report, 1-byte LED output report), ID 2 is a consumer
//! control device (16-bit little-endian usage, array input). The byte
//! layout here must match what `report.rs` produces, or the paired
//! television will misinterpret every report.

/// Report ID of the keyboard collection.
pub const KEYBOARD_REPORT_ID: u8 = 0x01;

/// Report ID of the consumer control collection.
pub const CONSUMER_REPORT_ID: u8 = 0x02;

/// Composite report map: boot keyboard + consumer control.
pub const REPORT_MAP: [u8; 90] = [
    // --- Keyboard (report ID 1) ---
    0x05, 0x01, //       Usage Page (Generic Desktop)
    0x09, 0x06, //       Usage (Keyboard)
    0xA1, 0x01, //       Collection (Application)
    0x85, KEYBOARD_REPORT_ID, // Report ID (1)
    0x05, 0x07, //         Usage Page (Key Codes)
    0x19, 0xE0, //         Usage Minimum (224)
    0x29, 0xE7, //         Usage Maximum (231)
    0x15, 0x00, //         Logical Minimum (0)
    0x25, 0x01, //         Logical Maximum (1)
    0x75, 0x01, //         Report Size (1)
    0x95, 0x08, //         Report Count (8)
    0x81, 0x02, //         Input (Data, Var, Abs) - modifier bits
    0x95, 0x01, //         Report Count (1)
    0x75, 0x08, //         Report Size (8)
    0x81, 0x03, //         Input (Cnst, Var, Abs) - reserved byte
    0x95, 0x05, //         Report Count (5)
    0x75, 0x01, //         Report Size (1)
    0x05, 0x08, //         Usage Page (LEDs)
    0x19, 0x01, //         Usage Minimum (1)
    0x29, 0x05, //         Usage Maximum (5)
    0x91, 0x02, //         Output (Data, Var, Abs) - LEDs
    0x95, 0x01, //         Report Count (1)
    0x75, 0x03, //         Report Size (3)
    0x91, 0x03, //         Output (Cnst, Var, Abs) - padding
    0x95, 0x06, //         Report Count (6)
    0x75, 0x08, //         Report Size (8)
    0x15, 0x00, //         Logical Minimum (0)
    0x25, 0x65, //         Logical Maximum (101)
    0x05, 0x07, //         Usage Page (Key Codes)
    0x19, 0x00, //         Usage Minimum (0)
    0x29, 0x65, //         Usage Maximum (101)
    0x81, 0x00, //         Input (Data, Array) - key array
    0xC0, //             End Collection
    // --- Consumer control (report ID 2) ---
    0x05, 0x0C, //       Usage Page (Consumer)
    0x09, 0x01, //       Usage (Consumer Control)
    0xA1, 0x01, //       Collection (Application)
    0x85, CONSUMER_REPORT_ID, // Report ID (2)
    0x15, 0x00, //         Logical Minimum (0)
    0x26, 0x9C, 0x02, //   Logical Maximum (668)
    0x19, 0x00, //         Usage Minimum (0)
    0x2A, 0x9C, 0x02, //   Usage Maximum (668)
    0x75, 0x10, //         Report Size (16)
    0x95, 0x01, //         Report Count (1)
    0x81, 0x00, //         Input (Data, Array) - usage code
    0xC0, //             End Collection
];

/// HID Information characteristic value: bcdHID 1.11, country code 0
/// (not localized), RemoteWake | NormallyConnectable.
pub const HID_INFORMATION: [u8; 4] = [0x11, 0x01, 0x00, 0x03];

/// Report Reference descriptor type values.
pub const REPORT_TYPE_INPUT: u8 = 0x01;
pub const REPORT_TYPE_OUTPUT: u8 = 0x02;

/// Report protocol mode (as opposed to boot protocol).
pub const PROTOCOL_MODE_REPORT: u8 = 0x01;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::{CONSUMER_REPORT_LEN, KEYBOARD_REPORT_LEN};

    #[test]
    fn test_report_map_is_well_formed() {
        // Two application collections, each closed. 65 keyboard bytes
        // plus 25 consumer bytes.
        let collections = REPORT_MAP.windows(2).filter(|w| w == &[0xA1, 0x01]).count();
        let ends = REPORT_MAP.iter().filter(|&&b| b == 0xC0).count();
        assert_eq!(collections, 2);
        assert_eq!(ends, 2);
        assert_eq!(REPORT_MAP.last(), Some(&0xC0));
        assert_eq!(REPORT_MAP.len(), 90);

        let keyboard_end = REPORT_MAP.iter().position(|&b| b == 0xC0).unwrap();
        assert_eq!(keyboard_end + 1, 65);
    }

    #[test]
    fn test_report_ids_declared() {
        let ids: Vec<u8> = REPORT_MAP
            .windows(2)
            .filter(|w| w[0] == 0x85)
            .map(|w| w[1])
            .collect();
        assert_eq!(ids, vec![KEYBOARD_REPORT_ID, CONSUMER_REPORT_ID]);
    }

    #[test]
    fn test_keyboard_collection_matches_report_layout() {
        // 8 modifier bits + 1 reserved byte + 6 key array bytes = 8 bytes,
        // which is what the keyboard report builder emits.
        assert_eq!(KEYBOARD_REPORT_LEN, 8);

        // Modifier usage range 224..=231 is declared.
        assert!(REPORT_MAP.windows(2).any(|w| w == [0x19, 0xE0]));
        assert!(REPORT_MAP.windows(2).any(|w| w == [0x29, 0xE7]));

        // Six-slot key array with usages 0..=101.
        assert!(REPORT_MAP.windows(4).any(|w| w == [0x95, 0x06, 0x75, 0x08]));
        assert!(REPORT_MAP.windows(2).any(|w| w == [0x29, 0x65]));
    }

    #[test]
    fn test_consumer_collection_matches_report_layout() {
        // One 16-bit field = 2 bytes, matching the consumer report builder.
        assert_eq!(CONSUMER_REPORT_LEN, 2);
        assert!(REPORT_MAP.windows(4).any(|w| w == [0x75, 0x10, 0x95, 0x01]));

        // Usage maximum covers AC Home (0x029C > 0x0223).
        assert!(REPORT_MAP.windows(3).any(|w| w == [0x2A, 0x9C, 0x02]));
    }

    #[test]
    fn test_hid_information() {
        // bcdHID 1.11 little-endian, flags RemoteWake | NormallyConnectable.
        assert_eq!(HID_INFORMATION[0], 0x11);
        assert_eq!(HID_INFORMATION[1], 0x01);
        assert_eq!(HID_INFORMATION[3], 0x03);
    }
}
