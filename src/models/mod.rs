//! Wire payload shapes for the ANS operator-expenses API.
//!
//! Field names match the JSON contract exactly (snake_case Portuguese);
//! nullable fields are `Option`. All shapes are plain values constructed
//! fresh on each API call.

pub mod despesa;
pub mod estatisticas;
pub mod operadora;
pub mod page;

pub use despesa::*;
pub use estatisticas::*;
pub use operadora::*;
pub use page::*;
