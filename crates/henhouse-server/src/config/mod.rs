// SPDX-License-Identifier: Apache-2.0

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Server-wide knobs, filled from `HENHOUSE_*` env vars in `main`.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub max_uri_bytes: usize,
    pub max_header_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
    pub enable_audit_log: bool,
    pub token_secret: String,
    pub token_ttl_secs: u64,
    pub seed_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 64 * 1024,
            max_uri_bytes: 4 * 1024,
            max_header_bytes: 16 * 1024,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            enable_audit_log: false,
            token_secret: "henhouse-dev-secret".to_string(),
            token_ttl_secs: 24 * 60 * 60,
            seed_demo_data: true,
        }
    }
}

impl ApiConfig {
    /// Startup contract: reject configurations that would produce a server
    /// that cannot answer a single request correctly.
    pub fn validate_startup_config_contract(&self) -> Result<(), String> {
        if self.token_secret.is_empty() {
            return Err("token secret must not be empty".to_string());
        }
        if self.token_ttl_secs == 0 {
            return Err("token ttl must be positive".to_string());
        }
        if self.max_body_bytes == 0 {
            return Err("max body bytes must be positive".to_string());
        }
        if self.max_uri_bytes < 64 {
            return Err("max uri bytes must be at least 64".to_string());
        }
        if self.max_header_bytes < 256 {
            return Err("max header bytes must be at least 256".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_startup_contract() {
        assert!(ApiConfig::default()
            .validate_startup_config_contract()
            .is_ok());
    }

    #[test]
    fn empty_secret_fails_startup_contract() {
        let cfg = ApiConfig {
            token_secret: String::new(),
            ..ApiConfig::default()
        };
        assert!(cfg.validate_startup_config_contract().is_err());
    }

    #[test]
    fn zero_ttl_fails_startup_contract() {
        let cfg = ApiConfig {
            token_ttl_secs: 0,
            ..ApiConfig::default()
        };
        assert!(cfg.validate_startup_config_contract().is_err());
    }
}
