use crate::error_handler::AppError;

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:5000";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `host:port` to bind, from `API_ADDRESS`.
    pub address: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_API_ADDRESS.to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads `API_ADDRESS`, falling back to [`DEFAULT_API_ADDRESS`].
    ///
    /// # Errors
    /// `AppError::Config` when the value has no `:port` part.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var("API_ADDRESS") {
            Ok(v) if !v.trim().is_empty() => Self::from_address(&v),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_address(raw: &str) -> Result<Self, AppError> {
        let address = raw.trim();
        match address.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => Ok(Self {
                address: address.to_string(),
            }),
            _ => Err(AppError::Config(format!(
                "API_ADDRESS must look like host:port, got `{address}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_host_port() {
        let cfg = ApiConfig::from_address(" 0.0.0.0:8080 ").unwrap();
        assert_eq!(cfg.address, "0.0.0.0:8080");
        assert_eq!(ApiConfig::default().address, "127.0.0.1:5000");
    }

    #[test]
    fn rejects_missing_or_bad_port() {
        for raw in ["localhost", "localhost:http", ":5000", "127.0.0.1:70000"] {
            assert!(
                matches!(ApiConfig::from_address(raw), Err(AppError::Config(_))),
                "{raw} should be rejected"
            );
        }
    }
}
