//! Per-endpoint API access functions.
//!
//! Each module provides a wrapper struct that borrows the shared
//! [`HttpClient`](crate::http::HttpClient) and exposes one method per remote
//! endpoint. Every call opts out of the global error banner — screens surface
//! their own contextual errors — while still driving the global loading flag.

pub mod estatisticas;
pub mod operadoras;

pub use estatisticas::EstatisticaApi;
pub use operadoras::{ListOperadorasParams, OperadoraApi};
