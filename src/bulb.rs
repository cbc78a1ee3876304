//! Bulb control on top of the Tuya local protocol.
//!
//! The wire protocol lives in the `rustuya` crate; this module only decides
//! which DP (data point) payloads to send and decodes the status responses
//! the library broadcasts back.

use std::time::Duration;

use futures_util::StreamExt;
use log::debug;
use serde_json::{json, Value};
use tokio::time::timeout;

use crate::config::DeviceConfig;
use crate::error::AppError;

// DP IDs used by Tuya colour bulbs: 1 power switch, 21 work mode,
// 22 white-mode brightness (10-1000), 24 colour as an hsv16 hex string.
const BRIGHTNESS_DIM: u32 = 10;
const BRIGHTNESS_FULL: u32 = 1000;

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// One preset bulb operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Off,
    On,
    Purple,
    Yellow,
    Dim,
    Bright,
}

impl Action {
    /// The DP payload this action sends to the bulb.
    pub fn dps(&self) -> Value {
        match self {
            Action::Off => json!({ "1": false }),
            Action::On => json!({ "1": true }),
            Action::Purple => colour_dps(221, 186, 255),
            Action::Yellow => colour_dps(255, 255, 0),
            Action::Dim => brightness_dps(BRIGHTNESS_DIM),
            Action::Bright => brightness_dps(BRIGHTNESS_FULL),
        }
    }
}

fn colour_dps(r: u8, g: u8, b: u8) -> Value {
    json!({ "21": "colour", "24": colour_hex(r, g, b) })
}

fn brightness_dps(level: u32) -> Value {
    json!({ "21": "white", "22": level })
}

/// Encode an RGB colour as the hsv16 hex string the colour DP expects:
/// hue 0-360, saturation 0-1000, value 0-1000, each as 4 hex digits.
fn colour_hex(r: u8, g: u8, b: u8) -> String {
    let (h, s, v) = rgb_to_hsv(r, g, b);
    format!("{:04x}{:04x}{:04x}", h, s, v)
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u32, u32, u32) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    (
        hue.round() as u32 % 360,
        (saturation * 1000.0).round() as u32,
        (max * 1000.0).round() as u32,
    )
}

/// An open session to one bulb.
pub struct Bulb {
    device: rustuya::Device,
    name: String,
}

impl Bulb {
    /// Open a session to the bulb described by `config`.
    pub fn connect(name: &str, config: &DeviceConfig) -> Self {
        let device = rustuya::Device::new(
            config.device_id.as_str(),
            config.ip_address.as_str(),
            config.local_key.as_str(),
            config.version.as_str(),
        );
        Self {
            device,
            name: name.to_string(),
        }
    }

    /// Query the bulb and return its decoded status payload.
    pub async fn status(&self) -> Result<Value, AppError> {
        // Subscribe before sending so the response cannot be missed.
        let events = self.device.listener();
        tokio::pin!(events);

        self.device.status().await;

        loop {
            let message = match timeout(RESPONSE_TIMEOUT, events.next()).await {
                Ok(Some(result)) => result?,
                Ok(None) | Err(_) => {
                    return Err(AppError::DeviceUnresponsive(self.name.clone()));
                }
            };

            if message.cmd == rustuya::CommandType::HeartBeat as u32 || message.payload.is_empty()
            {
                continue;
            }

            let payload: Value = match serde_json::from_slice(&message.payload) {
                Ok(value) => value,
                Err(_) => {
                    debug!(
                        "skipping non-JSON payload from {}: {} bytes",
                        self.name,
                        message.payload.len()
                    );
                    continue;
                }
            };

            // Library events (connection results, decode failures) arrive on
            // the same stream as device status, tagged with an "Err" code.
            if let Some(code) = payload.get("Err").and_then(Value::as_str) {
                match code.parse::<u32>() {
                    Ok(0) => continue,
                    Ok(code) => return Err(rustuya::TuyaError::from_code(code).into()),
                    Err(_) => return Err(AppError::Device(rustuya::TuyaError::InvalidPayload)),
                }
            }

            return Ok(payload);
        }
    }

    /// Apply one preset action.
    pub async fn apply(&self, action: Action) -> Result<(), AppError> {
        debug!("applying {:?} to '{}'", action, self.name);
        self.device.set_dps(action.dps()).await;
        Ok(())
    }

    /// Stop the session and its background connection task.
    pub async fn shutdown(&self) {
        self.device.stop().await;
    }
}
