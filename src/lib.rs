//! ArgGuard: emparejamiento léxico entre argumentos y parámetros.
//!
//! Sugiere qué argumento de una llamada encaja mejor con un parámetro
//! comparando los términos de sus identificadores (`keepPath` ↔ `pathToKeep`).
//! Es una señal heurística para herramientas de lint/refactor que detectan
//! argumentos intercambiados; no recorre ASTs ni emite diagnósticos.

pub mod core;
pub mod reserved;

pub use crate::core::error::SelectionError;
pub use crate::core::ranking::{best_arg_for_param, best_arg_index};
pub use crate::core::similarity::{lexical_similarity, similarities};
pub use crate::core::terms::{split_terms, TermSet};
pub use crate::reserved::{is_reserved, ReservedConfig, RESERVED_TERMS};
