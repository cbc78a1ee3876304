#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("No device named '{0}' in config")]
    NameNotFound(String),

    #[error("Malformed config: {0}")]
    MalformedConfig(String),

    #[error("No response from device '{0}'")]
    DeviceUnresponsive(String),

    #[error("Device error: {0}")]
    Device(#[from] rustuya::TuyaError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigNotFound(_) | AppError::MalformedConfig(_) => 2,
            AppError::NameNotFound(_) => 3,
            AppError::DeviceUnresponsive(_) | AppError::Device(_) => 4,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::ConfigNotFound(_) => "config_not_found",
            AppError::NameNotFound(_) => "name_not_found",
            AppError::MalformedConfig(_) => "malformed_config",
            AppError::DeviceUnresponsive(_) => "device_unresponsive",
            AppError::Device(_) => "device",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::ConfigNotFound("x".into()).exit_code(), 2);
        assert_eq!(AppError::MalformedConfig("x".into()).exit_code(), 2);
        assert_eq!(AppError::NameNotFound("x".into()).exit_code(), 3);
        assert_eq!(AppError::DeviceUnresponsive("x".into()).exit_code(), 4);
        assert_eq!(AppError::Device(rustuya::TuyaError::Offline).exit_code(), 4);
    }

    #[test]
    fn test_error_json_shape() {
        let err = AppError::NameNotFound("garage".into());
        let json = err.to_json();
        assert_eq!(json["error"], "name_not_found");
        assert_eq!(json["message"], "No device named 'garage' in config");
    }
}
