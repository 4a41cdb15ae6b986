//! Error types and failure classification for API calls.
//!
//! Every failed request is reduced to a single human-readable message before
//! it reaches callers or the global UI store. The API reports errors as
//! `{"detail": ...}` where `detail` is either a plain string or a list of
//! validation issues `[{"msg": ...}, ...]`.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum AnsError {
    /// The server answered with a non-2xx status. `message` already carries
    /// the classified, user-facing text.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request went out but no response came back (timeout, DNS failure,
    /// connection refused).
    #[error("Não foi possível conectar ao servidor. Verifique sua conexão.")]
    Network(#[source] reqwest::Error),

    /// Anything that fits neither bucket, including malformed success bodies.
    #[error("Ocorreu um erro inesperado. Tente novamente mais tarde.")]
    Unexpected(#[source] reqwest::Error),

    /// The client itself could not be constructed (invalid base URL, TLS
    /// backend failure).
    #[error("Falha ao inicializar o cliente HTTP: {0}")]
    Setup(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AnsError>;

impl AnsError {
    /// The classified, user-facing message for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of a server-returned error, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnsError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a transport-level `reqwest` failure (no response received).
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            AnsError::Network(err)
        } else {
            AnsError::Unexpected(err)
        }
    }

    /// Classify a non-2xx response from its status and raw body.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(ErrorBody {
                detail: Some(Detail::Message(msg)),
            }) if !msg.is_empty() => msg,
            Ok(ErrorBody {
                detail: Some(Detail::Issues(issues)),
            }) if !issues.is_empty() => {
                let msgs: Vec<&str> = issues.iter().map(|i| i.msg.as_str()).collect();
                format!("Erro de validação: {}", msgs.join("; "))
            }
            _ => format!("Erro {}: Falha na comunicação com o servidor.", status),
        };
        AnsError::Server { status, message }
    }
}

// ---------------------------------------------------------------------------
// Wire error body
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Detail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Debug, Deserialize)]
struct ValidationIssue {
    msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        let err =
            AnsError::from_response(404, r#"{"detail": "Operadora não encontrada"}"#.as_bytes());
        assert_eq!(err.message(), "Operadora não encontrada");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn validation_issues_are_joined() {
        let body = r#"{"detail": [{"msg": "required"}, {"msg": "invalid cnpj"}]}"#.as_bytes();
        let err = AnsError::from_response(422, body);
        assert_eq!(err.message(), "Erro de validação: required; invalid cnpj");
    }

    #[test]
    fn unknown_body_falls_back_to_status_message() {
        let err = AnsError::from_response(500, b"<html>oops</html>");
        assert_eq!(
            err.message(),
            "Erro 500: Falha na comunicação com o servidor."
        );
    }

    #[test]
    fn empty_detail_falls_back_to_status_message() {
        let err = AnsError::from_response(502, r#"{"detail": ""}"#.as_bytes());
        assert_eq!(
            err.message(),
            "Erro 502: Falha na comunicação com o servidor."
        );
    }
}
