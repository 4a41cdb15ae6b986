use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operadora — Health-insurance operator summary (list endpoint)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operadora {
    pub id: i64,
    pub registro_ans: Option<String>,
    /// 14-digit numeric string, unformatted.
    pub cnpj: String,
    pub razao_social: String,
    pub modalidade: Option<String>,
    pub uf: Option<String>,
    pub total_despesas: Option<f64>,
}

// ---------------------------------------------------------------------------
// OperadoraDetail — Extended record (detail endpoint)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperadoraDetail {
    pub id: i64,
    pub registro_ans: Option<String>,
    pub cnpj: String,
    pub razao_social: String,
    pub modalidade: Option<String>,
    pub uf: Option<String>,
    pub data_cadastro: Option<String>,
    pub total_registros: i64,
    pub media_despesas: f64,
    pub total_despesas: f64,
}
