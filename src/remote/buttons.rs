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

//! Semantic remote buttons and their HID actions.

use crate::hid::keys::{consumer, keyboard};

/// A button on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Power,
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
    Home,
    Settings,
    VolumeUp,
    VolumeDown,
    Mute,
    ChannelUp,
    ChannelDown,
    Netflix,
    YouTube,
    PrimeVideo,
    Media,
}

/// The HID report a button resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidAction {
    /// Keyboard usage, sent as report ID 1.
    Keyboard(u8),
    /// Consumer usage, sent as report ID 2.
    Consumer(u16),
}

impl Button {
    /// HID action for this button.
    ///
    /// Back (Escape), Home (AC Home), and Settings (F5) are known to vary
    /// across television firmwares; verify against the target set before
    /// relying on them.
    pub fn action(self) -> HidAction {
        match self {
            Button::Power => HidAction::Consumer(consumer::POWER),
            Button::Up => HidAction::Keyboard(keyboard::ARROW_UP),
            Button::Down => HidAction::Keyboard(keyboard::ARROW_DOWN),
            Button::Left => HidAction::Keyboard(keyboard::ARROW_LEFT),
            Button::Right => HidAction::Keyboard(keyboard::ARROW_RIGHT),
            Button::Ok => HidAction::Keyboard(keyboard::ENTER),
            Button::Back => HidAction::Keyboard(keyboard::ESCAPE),
            Button::Home => HidAction::Consumer(consumer::AC_HOME),
            Button::Settings => HidAction::Keyboard(keyboard::F5),
            Button::VolumeUp => HidAction::Consumer(consumer::VOLUME_UP),
            Button::VolumeDown => HidAction::Consumer(consumer::VOLUME_DOWN),
            Button::Mute => HidAction::Consumer(consumer::MUTE),
            // Channel rocker doubles as up/down navigation on the sets the
            // original remote targeted.
            Button::ChannelUp => HidAction::Keyboard(keyboard::ARROW_UP),
            Button::ChannelDown => HidAction::Keyboard(keyboard::ARROW_DOWN),
            Button::Netflix => HidAction::Keyboard(keyboard::F1),
            Button::YouTube => HidAction::Keyboard(keyboard::F2),
            Button::PrimeVideo => HidAction::Keyboard(keyboard::F3),
            Button::Media => HidAction::Keyboard(keyboard::F4),
        }
    }

    /// Parse a button from a terminal command word.
    pub fn parse(word: &str) -> Option<Self> {
        let button = match word.to_lowercase().as_str() {
            "power" => Button::Power,
            "up" => Button::Up,
            "down" => Button::Down,
            "left" => Button::Left,
            "right" => Button::Right,
            "ok" | "enter" | "select" => Button::Ok,
            "back" => Button::Back,
            "home" => Button::Home,
            "settings" => Button::Settings,
            "vol+" | "volup" => Button::VolumeUp,
            "vol-" | "voldown" => Button::VolumeDown,
            "mute" => Button::Mute,
            "ch+" | "chup" => Button::ChannelUp,
            "ch-" | "chdown" => Button::ChannelDown,
            "netflix" => Button::Netflix,
            "youtube" => Button::YouTube,
            "prime" => Button::PrimeVideo,
            "media" => Button::Media,
            _ => return None,
        };
        Some(button)
    }

    /// Display name for logs and the tray tooltip.
    pub fn name(self) -> &'static str {
        match self {
            Button::Power => "Power",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
            Button::Ok => "OK",
            Button::Back => "Back",
            Button::Home => "Home",
            Button::Settings => "Settings",
            Button::VolumeUp => "Volume Up",
            Button::VolumeDown => "Volume Down",
            Button::Mute => "Mute",
            Button::ChannelUp => "Channel Up",
            Button::ChannelDown => "Channel Down",
            Button::Netflix => "Netflix",
            Button::YouTube => "YouTube",
            Button::PrimeVideo => "Prime Video",
            Button::Media => "Media",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_buttons_are_keyboard_actions() {
        assert_eq!(Button::Up.action(), HidAction::Keyboard(0x52));
        assert_eq!(Button::Down.action(), HidAction::Keyboard(0x51));
        assert_eq!(Button::Left.action(), HidAction::Keyboard(0x50));
        assert_eq!(Button::Right.action(), HidAction::Keyboard(0x4F));
        assert_eq!(Button::Ok.action(), HidAction::Keyboard(0x28));
    }

    #[test]
    fn test_media_buttons_are_consumer_actions() {
        assert_eq!(Button::Power.action(), HidAction::Consumer(0x0030));
        assert_eq!(Button::VolumeUp.action(), HidAction::Consumer(0x00E9));
        assert_eq!(Button::VolumeDown.action(), HidAction::Consumer(0x00EA));
        assert_eq!(Button::Mute.action(), HidAction::Consumer(0x00E2));
        assert_eq!(Button::Home.action(), HidAction::Consumer(0x0223));
    }

    #[test]
    fn test_app_shortcuts_map_to_function_keys() {
        assert_eq!(Button::Netflix.action(), HidAction::Keyboard(0x3A));
        assert_eq!(Button::YouTube.action(), HidAction::Keyboard(0x3B));
        assert_eq!(Button::PrimeVideo.action(), HidAction::Keyboard(0x3C));
        assert_eq!(Button::Media.action(), HidAction::Keyboard(0x3D));
    }

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!(Button::parse("OK"), Some(Button::Ok));
        assert_eq!(Button::parse("enter"), Some(Button::Ok));
        assert_eq!(Button::parse("vol+"), Some(Button::VolumeUp));
        assert_eq!(Button::parse("ch-"), Some(Button::ChannelDown));
        assert_eq!(Button::parse("frobnicate"), None);
    }
}
