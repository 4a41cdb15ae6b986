//! Endpoint tests against a mock API server: payload parsing, query
//! parameters, and failure classification.

mod common;

use std::time::Duration;

use ans_sdk::{AnsSdk, ListOperadorasParams};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_parses_paginated_envelope() {
    let (server, sdk) = common::setup_sdk().await;

    let body = common::paginated_json(
        vec![
            common::operadora_json(1, "12345678000199", "Operadora Um"),
            common::operadora_json(2, "98765432000110", "Operadora Dois"),
        ],
        common::meta_json(1, 10, 2, 1),
    );
    Mock::given(method("GET"))
        .and(path("/api/operadoras"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let page = sdk
        .operadoras()
        .list(&ListOperadorasParams::default())
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].cnpj, "12345678000199");
    assert_eq!(page.data[1].razao_social, "Operadora Dois");
    assert_eq!(page.meta.total, 2);
    assert!(!page.meta.has_next);
}

#[tokio::test]
async fn list_sends_busca_when_present() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras"))
        .and(query_param("busca", "unimed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::paginated_json(
            vec![],
            common::meta_json(1, 10, 0, 0),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListOperadorasParams::default().with_busca("unimed");
    sdk.operadoras().list(&params).await.unwrap();
}

#[tokio::test]
async fn list_omits_busca_when_absent() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras"))
        .and(query_param_is_missing("busca"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::paginated_json(
            vec![],
            common::meta_json(1, 10, 0, 0),
        )))
        .expect(1)
        .mount(&server)
        .await;

    sdk.operadoras()
        .list(&ListOperadorasParams::default())
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// detail / despesas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_parses_operator_detail() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras/12345678000199"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::operadora_detail_json("12345678000199")),
        )
        .mount(&server)
        .await;

    let detail = sdk.operadoras().get("12345678000199").await.unwrap();
    assert_eq!(detail.cnpj, "12345678000199");
    assert_eq!(detail.total_registros, 12);
    assert_eq!(detail.total_despesas, 1_250_000.0);
    assert_eq!(detail.data_cadastro.as_deref(), Some("2005-03-18"));
}

#[tokio::test]
async fn despesas_parses_expense_history() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras/12345678000199/despesas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::despesas_historico_json("12345678000199")),
        )
        .mount(&server)
        .await;

    let historico = sdk.operadoras().despesas("12345678000199").await.unwrap();
    assert_eq!(historico.despesas.len(), 2);
    assert_eq!(historico.despesas[0].trimestre, 4);
    assert_eq!(historico.despesas[1].periodo, "1T2024");
    assert_eq!(historico.soma_total, 650_000.0);
    assert_eq!(historico.operadora.cnpj, "12345678000199");
}

// ---------------------------------------------------------------------------
// estatisticas / despesas-por-uf
// ---------------------------------------------------------------------------

#[tokio::test]
async fn estatisticas_parses_snapshot() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/estatisticas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::estatisticas_json()))
        .mount(&server)
        .await;

    let stats = sdk.estatisticas().get().await.unwrap();
    assert_eq!(stats.total_operadoras, 800);
    assert_eq!(stats.top_5_operadoras.len(), 2);
    assert_eq!(stats.top_5_operadoras[0].razao_social, "Maior Operadora");
    assert!(stats.top_5_operadoras[1].uf.is_none());
    assert_eq!(stats.periodo_analise.ano_final, 2024);
}

#[tokio::test]
async fn despesas_por_uf_parses_parallel_arrays() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/despesas-por-uf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::despesas_por_uf_json()))
        .mount(&server)
        .await;

    let por_uf = sdk.estatisticas().despesas_por_uf().await.unwrap();
    assert_eq!(por_uf.ufs.len(), por_uf.valores.len());
    assert_eq!(por_uf.ufs[0], "SP");
    assert_eq!(por_uf.valores[0], 4_000_000_000.0);
}

// ---------------------------------------------------------------------------
// failure classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_detail_string_is_used_verbatim() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras/000"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "detail": "Operadora não encontrada" })),
        )
        .mount(&server)
        .await;

    let err = sdk.operadoras().get("000").await.unwrap_err();
    assert_eq!(err.message(), "Operadora não encontrada");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn validation_issue_list_is_joined() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/operadoras"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "detail": [{ "msg": "required" }] })),
        )
        .mount(&server)
        .await;

    let err = sdk
        .operadoras()
        .list(&ListOperadorasParams::default())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Erro de validação: required");
}

#[tokio::test]
async fn connection_refused_yields_connectivity_message() {
    // Port 9 (discard) is not listening.
    let sdk = AnsSdk::builder().base_url("http://127.0.0.1:9").build().unwrap();

    let err = sdk.estatisticas().get().await.unwrap_err();
    assert_eq!(
        err.message(),
        "Não foi possível conectar ao servidor. Verifique sua conexão."
    );
    assert!(err.status().is_none());
}

#[tokio::test]
async fn timeout_yields_connectivity_message() {
    let server = wiremock::MockServer::start().await;
    let sdk = AnsSdk::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/estatisticas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::estatisticas_json())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let err = sdk.estatisticas().get().await.unwrap_err();
    assert_eq!(
        err.message(),
        "Não foi possível conectar ao servidor. Verifique sua conexão."
    );
}

#[tokio::test]
async fn api_failures_do_not_raise_the_global_banner() {
    let (server, sdk) = common::setup_sdk().await;

    Mock::given(method("GET"))
        .and(path("/api/estatisticas"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({ "detail": "interno" })),
        )
        .mount(&server)
        .await;

    let err = sdk.estatisticas().get().await.unwrap_err();
    // The failure reaches the caller but the shared banner stays empty.
    assert_eq!(err.message(), "interno");
    assert!(sdk.ui().error().is_none());
}
