//! Errores de precondición de la selección.

use thiserror::Error;

/// Violación de la alineación puntuaciones ↔ argumentos.
/// Es un error del llamador: nunca se trunca ni se rellena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No hay puntuaciones ni argumentos entre los que elegir.")]
    Empty,

    #[error(
        "Vectores desalineados: {scores} puntuaciones para {args} argumentos.\n    -> Cada puntuación debe corresponder al argumento en el mismo índice."
    )]
    LengthMismatch { scores: usize, args: usize },
}
