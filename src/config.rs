use std::time::Duration;

/// Fallback when `ANS_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable carrying the API base URL.
pub const BASE_URL_ENV: &str = "ANS_API_URL";

/// Fixed per-request timeout for all API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How long a published error stays visible before it is auto-dismissed.
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(5);

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

pub mod paths {
    pub const OPERADORAS: &str = "/api/operadoras";
    pub const ESTATISTICAS: &str = "/api/estatisticas";
    pub const DESPESAS_POR_UF: &str = "/api/despesas-por-uf";

    pub fn operadora(cnpj: &str) -> String {
        format!("{}/{}", OPERADORAS, cnpj_segment(cnpj))
    }

    pub fn operadora_despesas(cnpj: &str) -> String {
        format!("{}/{}/despesas", OPERADORAS, cnpj_segment(cnpj))
    }

    // A CNPJ is digits-only on the wire, but callers may hold the masked
    // form ("NN.NNN.NNN/NNNN-NN"). Stripping everything else keeps the
    // separators, `/` included, out of the request path.
    fn cnpj_segment(cnpj: &str) -> String {
        cnpj.chars().filter(char::is_ascii_digit).collect()
    }
}

/// Resolve the API base URL from the environment, falling back to the
/// local default.
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}
