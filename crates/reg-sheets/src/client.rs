//! The append-only sink: a Google Sheets values.append client behind a trait.

use crate::row::SheetRow;
use crate::{Result, SheetsError};

use reg_config::{ServiceAccountKey, SheetsConfig};

use std::panic::Location;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: u64 = 3600;
/// Refresh this long before the token actually expires
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

/// An append-only row sink. The store either accepts a whole batch or the
/// call fails; no partial-row commit is exposed.
#[async_trait]
pub trait RowAppender: Send + Sync {
    async fn append(&self, rows: Vec<SheetRow>) -> Result<()>;
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Appends rows to a spreadsheet via the Sheets REST API.
///
/// Authenticates as a service account: signs an RS256 assertion with the
/// key's private key, exchanges it at the token endpoint, and caches the
/// bearer token until shortly before expiry.
pub struct SheetsClient {
    http: ReqwestClient,
    api_base: String,
    spreadsheet_id: String,
    range: String,
    key: ServiceAccountKey,
    token: Mutex<Option<CachedToken>>,
}

#[derive(Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

impl SheetsClient {
    /// Create a client for the configured spreadsheet.
    ///
    /// `key` is the decoded service-account key; decoding (and failing fast
    /// on a bad key) happens at startup via `SheetsConfig::decode_key`.
    pub fn new(config: &SheetsConfig, key: ServiceAccountKey) -> Self {
        Self {
            http: ReqwestClient::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            range: config.range.clone(),
            key,
            token: Mutex::new(None),
        }
    }

    /// Get a bearer token, reusing the cached one while it is still fresh
    async fn bearer_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref()
            && Instant::now() < token.expires_at
        {
            return Ok(token.value.clone());
        }

        let token = self.fetch_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        let assertion = self.signed_assertion()?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Token {
                message: format!("token endpoint returned {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: TokenResponse = response.json().await?;
        debug!("Obtained sheets access token ({}s)", body.expires_in);

        let lifetime = body.expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        Ok(CachedToken {
            value: body.access_token,
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        })
    }

    /// Sign the JWT-bearer assertion for the token grant
    fn signed_assertion(&self) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = TokenClaims {
            iss: &self.key.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.key.token_uri,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let jwt = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)?;
        Ok(jwt)
    }

    fn append_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.api_base, self.spreadsheet_id, self.range
        )
    }

    /// Pre-seed the token cache so tests can exercise append without a
    /// signable key
    #[cfg(test)]
    pub(crate) async fn prime_token(&self, value: &str) {
        *self.token.lock().await = Some(CachedToken {
            value: value.to_string(),
            expires_at: Instant::now() + Duration::from_secs(TOKEN_LIFETIME_SECS),
        });
    }
}

#[async_trait]
impl RowAppender for SheetsClient {
    /// Append all rows of one submission in a single call
    async fn append(&self, rows: Vec<SheetRow>) -> Result<()> {
        let token = self.bearer_token().await?;

        let response = self
            .http
            .post(self.append_url())
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&serde_json::json!({ "values": &rows }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SheetsError::Append {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        debug!("Appended {} row(s) to {}", rows.len(), self.spreadsheet_id);
        Ok(())
    }
}
