//! Shared HTTP client all API calls flow through.
//!
//! Cross-cutting behavior lives here so call sites never duplicate it: a
//! reference-counted pending-request counter drives the global loading flag,
//! and failures are classified into a single user-facing message that is
//! published to the [`UiState`] banner unless the call opted out. Opting out
//! of the banner suppresses only the banner; the error itself always reaches
//! the caller.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{AnsError, Result};
use crate::ui::UiState;

// ---------------------------------------------------------------------------
// RequestOptions
// ---------------------------------------------------------------------------

/// Per-call opt-outs for the global loading indicator and error banner.
#[derive(Debug, Clone, Copy)]
pub struct RequestOptions {
    pub show_global_loading: bool,
    pub show_global_alert: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            show_global_loading: true,
            show_global_alert: true,
        }
    }
}

impl RequestOptions {
    /// Keep the loading indicator but surface failures only to the caller.
    /// The API layer uses this for every endpoint, since each screen shows
    /// its own contextual error.
    pub fn without_alert() -> Self {
        Self {
            show_global_alert: false,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// HttpClient
// ---------------------------------------------------------------------------

pub struct HttpClient {
    client: Client,
    base_url: String,
    ui: UiState,
    pending: Mutex<usize>,
}

impl HttpClient {
    /// Build the client with a fixed request timeout and a shared UI store.
    pub fn new(base_url: impl Into<String>, timeout: Duration, ui: UiState) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AnsError::Setup)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ui,
            pending: Mutex::new(0),
        })
    }

    /// The UI store this client publishes into.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Number of tracked requests currently in flight.
    pub fn pending_requests(&self) -> usize {
        *self.lock_pending()
    }

    fn lock_pending(&self) -> MutexGuard<'_, usize> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET request and deserialize the JSON response body.
    pub async fn get_json<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        opts: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        // The guard decrements on drop, so the counter comes back down on
        // every exit path, success or failure.
        let _guard = opts.show_global_loading.then(|| self.track());

        let url = self.build_url(path);
        debug!(%url, "dispatching GET");

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        let result = match request.send().await {
            Ok(response) => self.handle_response(&url, response).await,
            Err(e) => {
                warn!(%url, error = %e, "no response received");
                Err(AnsError::from_transport(e))
            }
        };

        if let Err(ref err) = result {
            if opts.show_global_alert {
                self.ui.set_error(err.message());
            }
        }

        result
    }

    async fn handle_response<T: DeserializeOwned>(&self, url: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(AnsError::Unexpected)
        } else {
            let body = response.bytes().await.unwrap_or_default();
            error!(%url, status = status.as_u16(), "request failed");
            Err(AnsError::from_response(status.as_u16(), &body))
        }
    }

    // The counter and the flag must move together. Both transitions happen
    // under the same lock, so another request can never observe a nonzero
    // counter with the flag down.
    fn track(&self) -> LoadingGuard<'_> {
        let mut pending = self.lock_pending();
        *pending += 1;
        if *pending == 1 {
            self.ui.set_loading(true);
        }
        LoadingGuard { client: self }
    }

    fn untrack(&self) {
        let mut pending = self.lock_pending();
        // Clamped decrement: the counter never goes negative even if this is
        // called more times than track().
        *pending = pending.saturating_sub(1);
        if *pending == 0 {
            self.ui.set_loading(false);
        }
    }
}

struct LoadingGuard<'a> {
    client: &'a HttpClient,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.client.untrack();
    }
}
