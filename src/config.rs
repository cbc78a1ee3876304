use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

/// Connection parameters for one bulb, as stored in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub device_id: String,
    pub ip_address: String,
    pub local_key: String,
    /// Tuya protocol version spoken by the device.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "3.3".to_string()
}

/// `~/.config/light/light.json`
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("light")
        .join("light.json")
}

/// Resolve a device name to its connection parameters.
///
/// The file is a JSON object mapping device names to configs. Entries for
/// other devices are not validated, so one broken entry does not block
/// lookups of the rest.
pub fn read_device(path: &Path, name: &str) -> Result<DeviceConfig, AppError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    let devices: HashMap<String, serde_json::Value> = serde_json::from_str(&raw)
        .map_err(|err| AppError::MalformedConfig(format!("{}: {}", path.display(), err)))?;

    let entry = devices
        .get(name)
        .ok_or_else(|| AppError::NameNotFound(name.to_string()))?;

    serde_json::from_value(entry.clone())
        .map_err(|err| AppError::MalformedConfig(format!("device '{}': {}", name, err)))
}
