//! Flujo completo sobre una llamada: parámetros × argumentos → sugerencias.

use argguard::{
    best_arg_for_param, is_reserved, lexical_similarity, similarities, SelectionError,
};

/// Para cada parámetro, el argumento que mejor encaja.
fn suggest(params: &[&str], args: &[&str]) -> Vec<String> {
    params
        .iter()
        .map(|param| {
            let scores = similarities(param, args);
            best_arg_for_param(&scores, args).unwrap().to_string()
        })
        .collect()
}

#[test]
fn swapped_arguments_are_reordered() {
    // fn copy(source_path, target_path) llamada como copy(targetPath, sourcePath)
    let params = ["sourcePath", "targetPath"];
    let args = ["targetPath", "sourcePath"];

    assert_eq!(suggest(&params, &args), ["sourcePath", "targetPath"]);
}

#[test]
fn parameter_order_is_kept_when_already_correct() {
    let params = ["keepPath", "deletePath"];
    let args = ["pathToKeep", "pathToDelete"];

    assert_eq!(suggest(&params, &args), ["pathToKeep", "pathToDelete"]);
}

#[test]
fn unrelated_arguments_fall_back_to_the_first() {
    // Sin términos comunes todas las puntuaciones son 0.0: empate, gana el índice 0.
    let params = ["timeout"];
    let args = ["alpha", "beta", "gamma"];

    assert_eq!(suggest(&params, &args), ["alpha"]);
}

#[test]
fn generic_names_can_be_filtered_by_callers() {
    let args = ["index", "userId", "value"];
    let specific: Vec<&str> = args.iter().copied().filter(|a| !is_reserved(a)).collect();

    assert_eq!(specific, ["userId"]);
    assert_eq!(lexical_similarity("index", "index"), 1.0);
}

#[test]
fn misaligned_scores_are_reported() {
    let scores = similarities("userId", &["userName"]);
    let err = best_arg_for_param(&scores, &["userName", "id"]).unwrap_err();

    assert_eq!(err, SelectionError::LengthMismatch { scores: 1, args: 2 });
}
