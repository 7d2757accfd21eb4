// REST client for the hosted store's PostgREST interface.
//
// Authenticates every request with the configured key in both the `apikey`
// and `Authorization: Bearer` headers.

use reqwest::{
    Response,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{
    config::StoreConfig,
    error::{AppError, Result},
    infrastructure::store::{
        INVITE_CODES_TABLE, InviteCode, InviteCodeStore, PROFILES_TABLE, ProfileName,
        ProfileStore,
    },
};

/// Error body returned by PostgREST on non-2xx responses.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct RestStore {
    http: reqwest::Client,
    base_url: Url,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| AppError::Validation("Store API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| AppError::Validation("Store API key is not a valid header value".into()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("invite-codes-backend/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
        })
    }

    /// `{base}/rest/v1/{table}`
    fn table_url(&self, table: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/rest/v1/{table}"))
            .map_err(|e| AppError::Internal(format!("Invalid store URL: {e}")))
    }

    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return AppError::Transport(e),
        };

        if let Ok(err) = serde_json::from_str::<PostgrestError>(&body) {
            return AppError::Store(err.message);
        }

        if body.trim().is_empty() {
            AppError::Store(format!("Store responded with HTTP {status}"))
        } else {
            AppError::Store(body)
        }
    }
}

impl ProfileStore for RestStore {
    async fn find_profile_name(&self, user_id: &str) -> Result<Option<ProfileName>> {
        let url = self.table_url(PROFILES_TABLE)?;
        let id_filter = format!("eq.{user_id}");

        debug!(table = PROFILES_TABLE, "Fetching profile name");

        let response = self
            .http
            .get(url)
            .query(&[("select", "name"), ("id", id_filter.as_str()), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let rows: Vec<ProfileName> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}

impl InviteCodeStore for RestStore {
    async fn insert_invite_codes(&self, codes: &[InviteCode]) -> Result<()> {
        let url = self.table_url(INVITE_CODES_TABLE)?;

        debug!(table = INVITE_CODES_TABLE, count = codes.len(), "Inserting invite codes");

        let response = self
            .http
            .post(url)
            .header("Prefer", "return=minimal")
            .json(codes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }
}
