//! Shared test fixtures for the ANS SDK integration tests.
//!
//! Provides `setup_sdk()` which starts a wiremock server and builds an SDK
//! pointed at it, plus sample JSON payload builders matching the wire
//! contract.

#![allow(dead_code)]

use ans_sdk::AnsSdk;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Start a mock API server and an SDK pointed at it.
pub async fn setup_sdk() -> (MockServer, AnsSdk) {
    let server = MockServer::start().await;
    let sdk = AnsSdk::builder().base_url(server.uri()).build().unwrap();
    (server, sdk)
}

pub fn operadora_json(id: i64, cnpj: &str, razao_social: &str) -> Value {
    json!({
        "id": id,
        "registro_ans": "123456",
        "cnpj": cnpj,
        "razao_social": razao_social,
        "modalidade": "Cooperativa Médica",
        "uf": "SP",
        "total_despesas": 1_250_000.0
    })
}

pub fn meta_json(page: u32, limit: u32, total: u64, total_pages: u32) -> Value {
    json!({
        "page": page,
        "limit": limit,
        "total": total,
        "total_pages": total_pages,
        "has_next": page < total_pages,
        "has_prev": page > 1
    })
}

pub fn paginated_json(data: Vec<Value>, meta: Value) -> Value {
    json!({ "data": data, "meta": meta })
}

pub fn operadora_detail_json(cnpj: &str) -> Value {
    json!({
        "id": 1,
        "registro_ans": "123456",
        "cnpj": cnpj,
        "razao_social": "Operadora Exemplo S.A.",
        "modalidade": "Medicina de Grupo",
        "uf": "RJ",
        "data_cadastro": "2005-03-18",
        "total_registros": 12,
        "media_despesas": 104_166.67,
        "total_despesas": 1_250_000.0
    })
}

pub fn despesas_historico_json(cnpj: &str) -> Value {
    json!({
        "operadora": operadora_json(1, cnpj, "Operadora Exemplo S.A."),
        "despesas": [
            { "ano": 2023, "trimestre": 4, "valor_despesas": 300_000.0, "periodo": "4T2023" },
            { "ano": 2024, "trimestre": 1, "valor_despesas": 350_000.0, "periodo": "1T2024" }
        ],
        "total_registros": 2,
        "soma_total": 650_000.0,
        "media": 325_000.0
    })
}

pub fn estatisticas_json() -> Value {
    json!({
        "total_despesas": 9_800_000_000.0,
        "media_despesas": 12_250_000.0,
        "total_operadoras": 800,
        "total_registros": 9600,
        "top_5_operadoras": [
            { "razao_social": "Maior Operadora", "uf": "SP", "total_despesas": 900_000_000.0 },
            { "razao_social": "Segunda Operadora", "uf": null, "total_despesas": 700_000_000.0 }
        ],
        "periodo_analise": {
            "ano_inicial": 2022,
            "ano_final": 2024,
            "trimestre_inicial": 1,
            "trimestre_final": 4
        }
    })
}

pub fn despesas_por_uf_json() -> Value {
    json!({
        "ufs": ["SP", "RJ", "MG"],
        "valores": [4_000_000_000.0, 2_500_000_000.0, 1_200_000_000.0]
    })
}
