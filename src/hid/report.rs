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

//! Input report builders.
//!
//! Over GATT the report ID is not carried in the payload; each report
//! characteristic identifies its ID through a Report Reference descriptor.
//! `InputReport` keeps the pair together so the session manager can route
//! the payload to the right characteristic.

use super::descriptor::{CONSUMER_REPORT_ID, KEYBOARD_REPORT_ID};

/// Keyboard input report length: modifier, reserved, six key slots.
pub const KEYBOARD_REPORT_LEN: usize = 8;

/// Consumer control input report length: one 16-bit usage.
pub const CONSUMER_REPORT_LEN: usize = 2;

/// Which report characteristic a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportId {
    Keyboard,
    Consumer,
}

impl ReportId {
    /// Numeric report ID as declared in the report map.
    pub fn value(self) -> u8 {
        match self {
            ReportId::Keyboard => KEYBOARD_REPORT_ID,
            ReportId::Consumer => CONSUMER_REPORT_ID,
        }
    }
}

/// A framed input report ready to be notified to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputReport {
    pub id: ReportId,
    pub payload: Vec<u8>,
}

impl InputReport {
    /// Keyboard press report: key code in the third byte, modifier and
    /// reserved bytes zero, remaining key slots empty.
    pub fn keyboard_press(keycode: u8) -> Self {
        let mut payload = vec![0u8; KEYBOARD_REPORT_LEN];
        payload[2] = keycode;
        Self {
            id: ReportId::Keyboard,
            payload,
        }
    }

    /// Keyboard release report: all slots cleared.
    pub fn keyboard_release() -> Self {
        Self {
            id: ReportId::Keyboard,
            payload: vec![0u8; KEYBOARD_REPORT_LEN],
        }
    }

    /// Consumer control press report: usage code, little-endian.
    pub fn consumer_press(usage: u16) -> Self {
        Self {
            id: ReportId::Consumer,
            payload: usage.to_le_bytes().to_vec(),
        }
    }

    /// Consumer control release report.
    pub fn consumer_release() -> Self {
        Self {
            id: ReportId::Consumer,
            payload: vec![0u8; CONSUMER_REPORT_LEN],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::keys;

    #[test]
    fn test_keyboard_press_layout() {
        let report = InputReport::keyboard_press(keys::keyboard::ARROW_UP);
        assert_eq!(report.id, ReportId::Keyboard);
        assert_eq!(report.payload, vec![0x00, 0x00, 0x52, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_keyboard_release_is_all_zero() {
        let report = InputReport::keyboard_release();
        assert_eq!(report.payload, vec![0u8; KEYBOARD_REPORT_LEN]);
        assert_eq!(report.id, ReportId::Keyboard);
    }

    #[test]
    fn test_consumer_press_little_endian() {
        let report = InputReport::consumer_press(keys::consumer::VOLUME_UP);
        assert_eq!(report.id, ReportId::Consumer);
        assert_eq!(report.payload, vec![0xE9, 0x00]);

        let home = InputReport::consumer_press(keys::consumer::AC_HOME);
        assert_eq!(home.payload, vec![0x23, 0x02]);
    }

    #[test]
    fn test_consumer_release_is_zero() {
        let report = InputReport::consumer_release();
        assert_eq!(report.payload, vec![0x00, 0x00]);
        assert_eq!(report.id, ReportId::Consumer);
    }

    #[test]
    fn test_report_ids_match_descriptor() {
        assert_eq!(ReportId::Keyboard.value(), 1);
        assert_eq!(ReportId::Consumer.value(), 2);
    }
}
