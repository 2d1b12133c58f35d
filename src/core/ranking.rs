//! Selección del argumento más parecido a un parámetro.
//!
//! Arg-max de izquierda a derecha: gana el primer índice que alcanza el máximo.
//! Con empates (p. ej. `[0.5, 0.5, 0.5]`) la elección es arbitraria y no
//! significa que el argumento sea el correcto; solo se registra el empate.

use tracing::debug;

use crate::core::error::SelectionError;

/// Índice de la puntuación máxima, quedándose con el primero en caso de empate.
///
/// Un `NaN` nunca reemplaza al máximo en curso (las comparaciones con `NaN`
/// son falsas), así que un `NaN` en la posición 0 gana siempre.
pub fn best_arg_index(scores: &[f64]) -> Result<usize, SelectionError> {
    let (first, rest) = scores.split_first().ok_or(SelectionError::Empty)?;

    let mut max_index = 0;
    let mut max = *first;
    for (offset, &score) in rest.iter().enumerate() {
        if max < score {
            max = score;
            max_index = offset + 1;
        }
    }

    let tied = scores.iter().filter(|&&score| score == max).count();
    if tied > 1 {
        debug!(
            max_index,
            max,
            tied,
            "empate en la puntuación máxima; se elige el primer índice"
        );
    }

    Ok(max_index)
}

/// Argumento sugerido para un parámetro dado el vector de similitudes.
///
/// `scores[j]` debe ser la similitud de `args[j]` con el parámetro. Ambos
/// deben tener la misma longitud y no estar vacíos.
pub fn best_arg_for_param<'a, S: AsRef<str>>(
    scores: &[f64],
    args: &'a [S],
) -> Result<&'a str, SelectionError> {
    if scores.is_empty() || args.is_empty() {
        return Err(SelectionError::Empty);
    }
    if scores.len() != args.len() {
        return Err(SelectionError::LengthMismatch {
            scores: scores.len(),
            args: args.len(),
        });
    }

    let index = best_arg_index(scores)?;
    Ok(args[index].as_ref())
}
