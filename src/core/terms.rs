//! Descomposición de identificadores en términos.
//!
//! `keepPath` → {"keep", "path"}. Cada mayúscula ASCII abre una palabra nueva;
//! el resultado es un conjunto, así que el orden y las repeticiones se pierden.
//!
//! Limitación conocida: las constantes en `UPPER_SNAKE_CASE` no se tratan aparte.
//! `MAX_VALUE` produce una letra por término ({"m", "a", "x", "v", "l", "u", "e"}).

use std::collections::HashSet;

/// Conjunto de términos en minúsculas de un identificador.
pub type TermSet = HashSet<String>;

/// Marcador de frontera de palabra tras convertir camelCase.
const WORD_SEPARATOR: char = '_';

/// Parte un identificador camelCase/PascalCase en su conjunto de términos.
/// Un identificador vacío produce un conjunto vacío.
pub fn split_terms(identifier: &str) -> TermSet {
    // TODO: tratar constantes UPPER_SNAKE_CASE como palabras completas.
    let mut marked = String::with_capacity(identifier.len() + 4);
    for c in identifier.chars() {
        if c.is_ascii_uppercase() {
            marked.push(WORD_SEPARATOR);
            marked.push(c.to_ascii_lowercase());
        } else {
            marked.push(c);
        }
    }

    marked
        .split(WORD_SEPARATOR)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> TermSet {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn splits_lower_camel_case() {
        assert_eq!(split_terms("keepPath"), set(&["keep", "path"]));
    }

    #[test]
    fn splits_upper_camel_case() {
        assert_eq!(split_terms("UserId"), set(&["user", "id"]));
        assert_eq!(split_terms("PathToKeep"), set(&["path", "to", "keep"]));
    }

    #[test]
    fn empty_identifier_has_no_terms() {
        assert!(split_terms("").is_empty());
        assert!(split_terms("___").is_empty());
    }

    #[test]
    fn duplicate_terms_collapse() {
        assert_eq!(split_terms("fooBarFoo"), set(&["foo", "bar"]));
    }

    #[test]
    fn existing_underscores_also_split() {
        assert_eq!(split_terms("keep_path"), set(&["keep", "path"]));
    }

    #[test]
    fn fragments_are_trimmed() {
        assert_eq!(split_terms(" spaced Name "), set(&["spaced", "name"]));
    }

    #[test]
    fn upper_snake_case_degenerates_to_letters() {
        // Limitación documentada: no es un bug a corregir aquí.
        assert_eq!(
            split_terms("MAX_VALUE"),
            set(&["m", "a", "x", "v", "l", "u", "e"])
        );
    }

    #[test]
    fn acronyms_split_per_letter() {
        assert_eq!(split_terms("userID"), set(&["user", "i", "d"]));
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(split_terms("añoFiscal"), set(&["año", "fiscal"]));
    }
}
