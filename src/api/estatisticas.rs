//! Aggregate statistics endpoints.

use crate::config::paths;
use crate::error::Result;
use crate::http::{HttpClient, RequestOptions};
use crate::models::{DespesasPorUF, Estatisticas};

/// Query interface for the aggregate statistics endpoints.
pub struct EstatisticaApi<'a> {
    http: &'a HttpClient,
}

impl<'a> EstatisticaApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the aggregate expense snapshot across all operators.
    pub async fn get(&self) -> Result<Estatisticas> {
        self.http
            .get_json::<_, ()>(paths::ESTATISTICAS, None, RequestOptions::without_alert())
            .await
    }

    /// Fetch total expenses per federative unit (parallel arrays).
    pub async fn despesas_por_uf(&self) -> Result<DespesasPorUF> {
        self.http
            .get_json::<_, ()>(paths::DESPESAS_POR_UF, None, RequestOptions::without_alert())
            .await
    }
}
