//! # API Gateway
//!
//! The sole channel through which every view reaches the backend. It
//! centralizes the three things every call needs and no view should
//! reimplement: bearer-token injection, timeouts, and error normalization.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gateway Request Flow                             │
//! │                                                                         │
//! │  view ──► endpoint module ──► Gateway::send()                           │
//! │                                   │                                     │
//! │                                   ├── read token FRESH from the         │
//! │                                   │   SessionStore (never cached, so    │
//! │                                   │   a logout between two calls is     │
//! │                                   │   honored immediately)              │
//! │                                   │                                     │
//! │                                   ├── attach Authorization: Bearer ...  │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                              backend REST API                           │
//! │                                   │                                     │
//! │            2xx ◄──────────────────┼──────────────────► non-2xx          │
//! │             │                                              │            │
//! │     decode JSON body                     ApiError::from_response        │
//! │                                          (401 → Unauthorized,           │
//! │                                           422 → field map, ...)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On 401/403 the gateway classifies and returns - it neither clears the
//! session nor navigates. That decision belongs to the calling view.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::endpoints::{
    AuthApi, CategoriesApi, ProductsApi, ReportsApi, SalesApi, StockApi, SuppliersApi, UsersApi,
};
use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// HTTP gateway to the backend API.
///
/// Cheap to clone: the underlying `reqwest::Client` is a connection-pool
/// handle and the session store is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl Gateway {
    /// Builds the gateway from configuration and the session collaborator.
    ///
    /// Both timeouts come from config so no request can hang a view forever.
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .connect_timeout(Duration::from_secs(config.api.connect_timeout_secs))
            .build()?;

        Ok(Gateway {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The session store this gateway reads its credential from.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // =========================================================================
    // Endpoint Accessors
    // =========================================================================
    // One typed contract per entity, mirroring the pages of the dashboard.

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    pub fn products(&self) -> ProductsApi {
        ProductsApi::new(self.clone())
    }

    pub fn categories(&self) -> CategoriesApi {
        CategoriesApi::new(self.clone())
    }

    pub fn suppliers(&self) -> SuppliersApi {
        SuppliersApi::new(self.clone())
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    pub fn sales(&self) -> SalesApi {
        SalesApi::new(self.clone())
    }

    pub fn stock(&self) -> StockApi {
        StockApi::new(self.clone())
    }

    pub fn reports(&self) -> ReportsApi {
        ReportsApi::new(self.clone())
    }

    // =========================================================================
    // Request Helpers (used by the endpoint modules)
    // =========================================================================

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request_json(Method::GET, path, &[], None::<&()>).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.request_json(Method::GET, path, query, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request_json(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::POST, path, &[], Some(body)).await.map(|_| ())
    }

    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.send(Method::POST, path, &[], None::<&()>).await.map(|_| ())
    }

    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        self.send(Method::PUT, path, &[], Some(body)).await.map(|_| ())
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request_json(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn put_empty(&self, path: &str) -> ApiResult<()> {
        self.send(Method::PUT, path, &[], None::<&()>).await.map(|_| ())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, &[], None::<&()>).await.map(|_| ())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let text = self.send(method, path, query, body).await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("{} (from {})", e, path)))
    }

    /// Sends one request and returns the raw success body.
    ///
    /// Non-2xx responses are normalized through [`ApiError::from_response`].
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<String> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let request_id = Uuid::new_v4();

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::ACCEPT, "application/json");

        if !query.is_empty() {
            builder = builder.query(query);
        }

        // Read fresh at call time: a logout/set_auth between two calls must
        // be honored immediately.
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        debug!(%request_id, %method, path, "API request");

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            debug!(%request_id, status = status.as_u16(), "API response");
            Ok(text)
        } else {
            let err = ApiError::from_response(status, &text);
            debug!(%request_id, status = status.as_u16(), error = %err, "API request failed");
            Err(err)
        }
    }
}
