//! Operator endpoints: paginated listing, detail lookup, expense history.

use serde::Serialize;

use crate::config::{paths, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::error::Result;
use crate::http::{HttpClient, RequestOptions};
use crate::models::{DespesasHistorico, Operadora, OperadoraDetail, PaginatedResponse};

// ---------------------------------------------------------------------------
// ListOperadorasParams
// ---------------------------------------------------------------------------

/// Parameters for the paginated operator listing.
#[derive(Debug, Clone)]
pub struct ListOperadorasParams {
    pub page: u32,
    pub limit: u32,
    /// Free-text search over operator names; omitted from the query string
    /// when `None`.
    pub busca: Option<String>,
}

impl Default for ListOperadorasParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            busca: None,
        }
    }
}

impl ListOperadorasParams {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_busca(mut self, busca: impl Into<String>) -> Self {
        self.busca = Some(busca.into());
        self
    }
}

// ---------------------------------------------------------------------------
// OperadoraApi
// ---------------------------------------------------------------------------

/// Query interface for the `/api/operadoras` endpoints.
pub struct OperadoraApi<'a> {
    http: &'a HttpClient,
}

impl<'a> OperadoraApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List operators, paginated, with optional free-text search.
    pub async fn list(
        &self,
        params: &ListOperadorasParams,
    ) -> Result<PaginatedResponse<Operadora>> {
        #[derive(Serialize)]
        struct Query<'q> {
            page: u32,
            limit: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            busca: Option<&'q str>,
        }

        self.http
            .get_json(
                paths::OPERADORAS,
                Some(&Query {
                    page: params.page,
                    limit: params.limit,
                    busca: params.busca.as_deref(),
                }),
                RequestOptions::without_alert(),
            )
            .await
    }

    /// Fetch the extended record for one operator by CNPJ.
    pub async fn get(&self, cnpj: &str) -> Result<OperadoraDetail> {
        self.http
            .get_json::<_, ()>(&paths::operadora(cnpj), None, RequestOptions::without_alert())
            .await
    }

    /// Fetch the quarterly expense history for one operator by CNPJ.
    pub async fn despesas(&self, cnpj: &str) -> Result<DespesasHistorico> {
        self.http
            .get_json::<_, ()>(
                &paths::operadora_despesas(cnpj),
                None,
                RequestOptions::without_alert(),
            )
            .await
    }
}
