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

//! USB HID usage codes used by the remote.
//!
//! Keyboard usages come from the Keyboard/Keypad page (0x07), consumer
//! usages from the Consumer page (0x0C) of the HID Usage Tables.

/// Keyboard/Keypad page usages (report ID 1).
pub mod keyboard {
    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;

    pub const F1: u8 = 0x3A;
    pub const F2: u8 = 0x3B;
    pub const F3: u8 = 0x3C;
    pub const F4: u8 = 0x3D;
    pub const F5: u8 = 0x3E;

    pub const ARROW_RIGHT: u8 = 0x4F;
    pub const ARROW_LEFT: u8 = 0x50;
    pub const ARROW_DOWN: u8 = 0x51;
    pub const ARROW_UP: u8 = 0x52;

    /// Highest key array usage declared in the report map.
    pub const USAGE_MAX: u8 = 0x65;

    /// Modifier usage range (left ctrl .. right GUI).
    pub const MODIFIER_MIN: u8 = 0xE0;
    pub const MODIFIER_MAX: u8 = 0xE7;
}

/// Consumer page usages (report ID 2).
pub mod consumer {
    pub const POWER: u16 = 0x0030;
    pub const MUTE: u16 = 0x00E2;
    pub const VOLUME_UP: u16 = 0x00E9;
    pub const VOLUME_DOWN: u16 = 0x00EA;

    /// AC Home. Television firmwares disagree on Home handling; some
    /// expect 0x0209 (AL Home) instead.
    pub const AC_HOME: u16 = 0x0223;

    /// Highest usage declared in the report map.
    pub const USAGE_MAX: u16 = 0x029C;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_usages_within_descriptor_range() {
        for code in [
            keyboard::ENTER,
            keyboard::ESCAPE,
            keyboard::F1,
            keyboard::F5,
            keyboard::ARROW_UP,
            keyboard::ARROW_DOWN,
            keyboard::ARROW_LEFT,
            keyboard::ARROW_RIGHT,
        ] {
            assert!(code <= keyboard::USAGE_MAX, "0x{code:02X} outside key array range");
        }
    }

    #[test]
    fn test_consumer_usages_within_descriptor_range() {
        for code in [
            consumer::POWER,
            consumer::MUTE,
            consumer::VOLUME_UP,
            consumer::VOLUME_DOWN,
            consumer::AC_HOME,
        ] {
            assert!(code <= consumer::USAGE_MAX, "0x{code:04X} outside usage range");
        }
    }
}
