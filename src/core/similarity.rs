//! Similitud léxica entre identificadores.
//!
//! Coeficiente de Dice sobre conjuntos de términos:
//! `2·|A ∩ B| / (|A| + |B|)`. Es simétrico y está en [0, 1], pero no es
//! inyectivo: `fooBar` y `barFoo` puntúan 1.0 aunque nombren cosas distintas.

use crate::core::terms::split_terms;

/// Similitud entre el nombre de un argumento y el de un parámetro.
///
/// Si ninguno de los dos produce términos (p. ej. `""` vs `""`) devuelve 0.0
/// en vez de propagar un `NaN` hacia la selección.
pub fn lexical_similarity(arg: &str, param: &str) -> f64 {
    let arg_terms = split_terms(arg);
    let param_terms = split_terms(param);

    let total_terms = arg_terms.len() + param_terms.len();
    if total_terms == 0 {
        return 0.0;
    }

    let common_terms = arg_terms.intersection(&param_terms).count() * 2;
    common_terms as f64 / total_terms as f64
}

/// Similitud de un argumento contra cada parámetro candidato.
/// El elemento `i` corresponde a `params[i]`; la alineación por índice es el contrato.
pub fn similarities<S: AsRef<str>>(arg: &str, params: &[S]) -> Vec<f64> {
    params
        .iter()
        .map(|param| lexical_similarity(arg, param.as_ref()))
        .collect()
}
