use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Estatisticas — Aggregate snapshot across all operators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estatisticas {
    pub total_despesas: f64,
    pub media_despesas: f64,
    pub total_operadoras: i64,
    pub total_registros: i64,
    /// At most five entries, descending by `total_despesas`.
    pub top_5_operadoras: Vec<TopOperadora>,
    pub periodo_analise: PeriodoAnalise,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopOperadora {
    pub razao_social: String,
    pub uf: Option<String>,
    pub total_despesas: f64,
}

/// Year/quarter range the aggregates were computed over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodoAnalise {
    pub ano_inicial: i32,
    pub ano_final: i32,
    pub trimestre_inicial: u8,
    pub trimestre_final: u8,
}
