use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SHEETS_API_BASE, DEFAULT_SHEETS_RANGE,
    DEFAULT_TOKEN_URI, env,
};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

/// Target spreadsheet and the credentials to write to it.
///
/// The service-account key is expected base64-encoded (the JSON key file as
/// downloaded, base64'd into the environment). It is decoded once at startup
/// by `validate()`; a missing or undecodable key is fatal.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Spreadsheet to append to (the id from the sheet URL)
    pub spreadsheet_id: String,
    /// Base64-encoded service-account key JSON
    pub service_account_key: String,
    /// Anchor range rows are appended after
    pub range: String,
    pub api_base: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            service_account_key: String::new(),
            range: String::from(DEFAULT_SHEETS_RANGE),
            api_base: String::from(DEFAULT_SHEETS_API_BASE),
        }
    }
}

impl SheetsConfig {
    pub(crate) fn apply_env(&mut self) {
        env::override_string("REG_SHEET_ID", &mut self.spreadsheet_id);
        env::override_string("REG_SERVICE_ACCOUNT_KEY", &mut self.service_account_key);
        env::override_string("REG_SHEETS_RANGE", &mut self.range);
        env::override_string("REG_SHEETS_API_BASE", &mut self.api_base);
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.spreadsheet_id.is_empty() {
            return Err(ConfigError::sheets(
                "sheets.spreadsheet_id is required (REG_SHEET_ID)",
            ));
        }

        if self.range.is_empty() {
            return Err(ConfigError::sheets("sheets.range must not be empty"));
        }

        // Decoding is the real check; keep the failure at startup
        self.decode_key()?;

        Ok(())
    }

    /// Decode the base64 service-account key into its parsed form
    pub fn decode_key(&self) -> ConfigErrorResult<ServiceAccountKey> {
        if self.service_account_key.is_empty() {
            return Err(ConfigError::sheets(
                "sheets.service_account_key is required (REG_SERVICE_ACCOUNT_KEY)",
            ));
        }

        let raw = STANDARD
            .decode(self.service_account_key.trim())
            .map_err(|e| {
                ConfigError::sheets(format!("service_account_key is not valid base64: {e}"))
            })?;

        serde_json::from_slice(&raw).map_err(|e| {
            ConfigError::sheets(format!("service_account_key is not a valid key file: {e}"))
        })
    }
}

/// The fields of a service-account key file this system uses
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    String::from(DEFAULT_TOKEN_URI)
}
