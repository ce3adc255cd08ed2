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

//! Terminal command loop.
//!
//! Reads one command per line from stdin and forwards it to the main
//! loop. The button vocabulary is the remote's; everything else here is
//! plumbing.

use bluer::Address;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::warn;

use crate::remote::Button;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCommand {
    /// Press a remote button.
    Press(Button),
    /// List bonded hosts.
    Devices,
    /// Connect to a bonded host.
    Connect(Address),
    /// Show connection status.
    Status,
    /// Print the command list.
    Help,
    /// Shut down.
    Quit,
}

impl RemoteCommand {
    /// Parse a command line. Returns None for empty or unknown input.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?;

        if let Some(button) = Button::parse(head) {
            return Some(RemoteCommand::Press(button));
        }

        match head.to_lowercase().as_str() {
            "devices" => Some(RemoteCommand::Devices),
            "connect" => {
                let addr = words.next()?;
                match addr.parse::<Address>() {
                    Ok(address) => Some(RemoteCommand::Connect(address)),
                    Err(e) => {
                        warn!("Invalid address '{}': {}", addr, e);
                        None
                    }
                }
            }
            "status" => Some(RemoteCommand::Status),
            "help" | "?" => Some(RemoteCommand::Help),
            "quit" | "exit" => Some(RemoteCommand::Quit),
            _ => None,
        }
    }
}

/// Command list printed on `help` and at startup.
pub const HELP_TEXT: &str = "\
Buttons:  power up down left right ok back home settings
          vol+ vol- mute ch+ ch- netflix youtube prime media
Control:  devices | connect <addr> | status | help | quit";

/// Spawn the stdin reader. Lines are parsed and sent as commands; the
/// task ends when stdin closes or the receiver is dropped.
pub fn run_terminal() -> mpsc::Receiver<RemoteCommand> {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match RemoteCommand::parse(trimmed) {
                Some(command) => {
                    if tx.send(command).await.is_err() {
                        break;
                    }
                }
                None => {
                    println!("Unknown command: {trimmed}");
                    println!("{HELP_TEXT}");
                }
            }
        }
    });

    rx
}
