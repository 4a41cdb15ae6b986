//! SDK for the ANS health-insurance operator expenses API.
//!
//! Provides a typed async client for the operator-expenses dashboard API:
//! paginated operator listings, per-operator detail and expense history, and
//! aggregate statistics. A single shared HTTP client carries the cross-cutting
//! behavior — a reference-counted global loading flag and a self-dismissing
//! error banner — so individual call sites stay thin.
//!
//! # Quick start
//!
//! ```no_run
//! use ans_sdk::{AnsSdk, ListOperadorasParams};
//!
//! # async fn example() -> ans_sdk::Result<()> {
//! let sdk = AnsSdk::builder().build()?;
//!
//! // One page of operators, with free-text search
//! let page = sdk
//!     .operadoras()
//!     .list(&ListOperadorasParams::default().with_busca("unimed"))
//!     .await?;
//!
//! // Aggregate snapshot
//! let stats = sdk.estatisticas().get().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod models;
pub mod state;
pub mod ui;

pub use api::{EstatisticaApi, ListOperadorasParams, OperadoraApi};
pub use error::{AnsError, Result};
pub use http::{HttpClient, RequestOptions};
pub use state::{EstatisticasState, OperadorasState};
pub use ui::{Severity, UiError, UiState};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// AnsSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AnsSdk`] instance.
///
/// Use [`AnsSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AnsSdkBuilder::build) to create the SDK.
pub struct AnsSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
    ui: Option<UiState>,
}

impl Default for AnsSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::REQUEST_TIMEOUT,
            ui: None,
        }
    }
}

impl AnsSdkBuilder {
    /// Set the API base URL.
    ///
    /// If not set, the `ANS_API_URL` environment variable is used, falling
    /// back to `http://localhost:8000`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Share an existing UI store instead of creating a fresh one.
    ///
    /// Useful when several clients should drive the same loading flag and
    /// error banner.
    pub fn ui(mut self, ui: UiState) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Build the SDK, constructing the shared HTTP client.
    pub fn build(self) -> Result<AnsSdk> {
        let base_url = self.base_url.unwrap_or_else(config::base_url_from_env);
        let ui = self.ui.unwrap_or_else(UiState::new);
        let http = HttpClient::new(base_url, self.timeout, ui)?;
        Ok(AnsSdk { http })
    }
}

// ---------------------------------------------------------------------------
// AnsSdk
// ---------------------------------------------------------------------------

/// The main entry point for the ANS operator-expenses SDK.
///
/// Wraps the shared [`HttpClient`] and exposes the per-endpoint interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`AnsSdk::builder()`].
pub struct AnsSdk {
    http: HttpClient,
}

impl AnsSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> AnsSdkBuilder {
        AnsSdkBuilder::default()
    }

    /// Access the operator endpoints (listing, detail, expense history).
    pub fn operadoras(&self) -> OperadoraApi<'_> {
        OperadoraApi::new(&self.http)
    }

    /// Access the aggregate statistics endpoints.
    pub fn estatisticas(&self) -> EstatisticaApi<'_> {
        EstatisticaApi::new(&self.http)
    }

    /// The shared UI store this SDK's requests publish into.
    pub fn ui(&self) -> &UiState {
        self.http.ui()
    }

    /// Return a reference to the underlying [`HttpClient`] for advanced usage.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

impl fmt::Display for AnsSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnsSdk(pending_requests={}, loading={})",
            self.http.pending_requests(),
            self.http.ui().loading()
        )
    }
}
