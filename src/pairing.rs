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

//! Pairing agent.
//!
//! Bonding and key storage are BlueZ's job; this agent only answers the
//! interactive prompts. Televisions generally use numeric comparison or
//! just-works pairing, so the agent displays passkeys on the log and
//! confirms comparisons when `bluetooth.auto_accept` is set.

use anyhow::Result;
use bluer::agent::{Agent, AgentHandle, ReqError};
use bluer::Session;
use tracing::{info, warn};

/// Register the pairing agent with BlueZ.
///
/// The returned handle must be kept alive for the lifetime of the daemon;
/// dropping it unregisters the agent.
pub async fn register_agent(session: &Session, auto_accept: bool) -> Result<AgentHandle> {
    let agent = Agent {
        request_default: true,
        display_passkey: Some(Box::new(|req| {
            Box::pin(async move {
                info!(
                    "Pairing passkey for {}: {:06}",
                    req.device, req.passkey
                );
                Ok(())
            })
        })),
        display_pin_code: Some(Box::new(|req| {
            Box::pin(async move {
                info!("Pairing PIN for {}: {}", req.device, req.pincode);
                Ok(())
            })
        })),
        request_confirmation: Some(Box::new(move |req| {
            Box::pin(async move {
                if auto_accept {
                    info!(
                        "Confirming passkey {:06} for {} (auto-accept)",
                        req.passkey, req.device
                    );
                    Ok(())
                } else {
                    warn!(
                        "Rejecting passkey {:06} for {}: auto-accept disabled",
                        req.passkey, req.device
                    );
                    Err(ReqError::Rejected)
                }
            })
        })),
        request_authorization: Some(Box::new(move |req| {
            Box::pin(async move {
                if auto_accept {
                    info!("Authorizing pairing with {}", req.device);
                    Ok(())
                } else {
                    Err(ReqError::Rejected)
                }
            })
        })),
        authorize_service: Some(Box::new(|req| {
            Box::pin(async move {
                info!("Authorizing service {} for {}", req.service, req.device);
                Ok(())
            })
        })),
        ..Default::default()
    };

    let handle = session.register_agent(agent).await?;
    info!("Pairing agent registered (auto_accept={})", auto_accept);
    Ok(handle)
}
