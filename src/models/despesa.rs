use serde::{Deserialize, Serialize};

use super::operadora::Operadora;

// ---------------------------------------------------------------------------
// DespesaItem — One expense observation (year/quarter)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DespesaItem {
    pub ano: i32,
    /// Quarter, 1 through 4.
    pub trimestre: u8,
    pub valor_despesas: f64,
    /// Server-derived display label, e.g. `"1T2024"`.
    pub periodo: String,
}

// ---------------------------------------------------------------------------
// DespesasHistorico — Expense time series for one operator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DespesasHistorico {
    pub operadora: Operadora,
    pub despesas: Vec<DespesaItem>,
    pub total_registros: i64,
    pub soma_total: f64,
    pub media: f64,
}

// ---------------------------------------------------------------------------
// DespesasPorUF — Per-region totals as parallel arrays
// ---------------------------------------------------------------------------

/// Index `i` of `ufs` corresponds to index `i` of `valores`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DespesasPorUF {
    pub ufs: Vec<String>,
    pub valores: Vec<f64>,
}
