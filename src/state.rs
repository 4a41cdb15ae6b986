//! Per-screen view state: fetched entity, local loading flag, local error.
//!
//! These are the Rust counterparts of per-screen reactive holders. Each
//! `load` call flips its own loading flag around a single API round trip and
//! captures the failure message locally — with the global banner opted out at
//! the API layer, this local field is the only user-visible failure surface.

use std::sync::Arc;

use crate::api::ListOperadorasParams;
use crate::models::{Estatisticas, Operadora, PaginationMeta};
use crate::AnsSdk;

// ---------------------------------------------------------------------------
// OperadorasState
// ---------------------------------------------------------------------------

/// State for the operator list screen: one page of results plus pagination
/// metadata and search.
pub struct OperadorasState {
    sdk: Arc<AnsSdk>,
    pub operadoras: Vec<Operadora>,
    pub meta: Option<PaginationMeta>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OperadorasState {
    pub fn new(sdk: Arc<AnsSdk>) -> Self {
        Self {
            sdk,
            operadoras: Vec::new(),
            meta: None,
            loading: false,
            error: None,
        }
    }

    /// Fetch one page of operators, replacing the current contents.
    ///
    /// On failure the list and metadata are reset and `error` carries the
    /// classified message. `loading` is cleared on every outcome.
    pub async fn load(&mut self, params: &ListOperadorasParams) {
        self.loading = true;
        self.error = None;

        match self.sdk.operadoras().list(params).await {
            Ok(page) => {
                self.operadoras = page.data;
                self.meta = Some(page.meta);
            }
            Err(err) => {
                self.error = Some(non_empty_or(err.message(), "Erro ao carregar operadoras"));
                self.operadoras.clear();
                self.meta = None;
            }
        }

        self.loading = false;
    }

    pub fn has_results(&self) -> bool {
        !self.operadoras.is_empty()
    }

    pub fn current_page(&self) -> u32 {
        self.meta.as_ref().map(|m| m.page).unwrap_or(1)
    }

    pub fn total_pages(&self) -> u32 {
        self.meta.as_ref().map(|m| m.total_pages).unwrap_or(0)
    }

    pub fn has_next(&self) -> bool {
        self.meta.as_ref().map(|m| m.has_next).unwrap_or(false)
    }

    pub fn has_prev(&self) -> bool {
        self.meta.as_ref().map(|m| m.has_prev).unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// EstatisticasState
// ---------------------------------------------------------------------------

/// State for the statistics screen: the aggregate snapshot, no pagination.
pub struct EstatisticasState {
    sdk: Arc<AnsSdk>,
    pub estatisticas: Option<Estatisticas>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EstatisticasState {
    pub fn new(sdk: Arc<AnsSdk>) -> Self {
        Self {
            sdk,
            estatisticas: None,
            loading: false,
            error: None,
        }
    }

    /// Fetch the aggregate snapshot, replacing the current one.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.sdk.estatisticas().get().await {
            Ok(snapshot) => self.estatisticas = Some(snapshot),
            Err(err) => {
                self.error = Some(non_empty_or(err.message(), "Erro ao carregar estatísticas"));
                self.estatisticas = None;
            }
        }

        self.loading = false;
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
