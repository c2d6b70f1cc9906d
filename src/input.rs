//! Entrada de códigos
//!
//! Aceita um bloco de texto livre com códigos separados por vírgula e/ou
//! quebra de linha, como no campo de busca original. A ordem e as
//! duplicatas são preservadas; o aparo de espaços acontece aqui, nunca
//! dentro do matcher.

use crate::error::{GaussError, Result};
use dialoguer::Input;

/// Separa o bloco de entrada em códigos individuais.
///
/// Vírgulas e quebras de linha são equivalentes; entradas vazias são
/// descartadas.
pub fn parse_code_input(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a lista de códigos de uma ação da CLI.
///
/// Prioridade: argumentos posicionais, depois arquivo `--input`, depois
/// prompt interativo. Lista vazia após o parse aborta a ação antes de
/// qualquer cálculo ou escrita.
pub fn resolve_codes(args: &[String], input_file: Option<&std::path::Path>) -> Result<Vec<String>> {
    let raw = if !args.is_empty() {
        args.join("\n")
    } else if let Some(path) = input_file {
        std::fs::read_to_string(path)?
    } else {
        prompt_codes()?
    };

    let codes = parse_code_input(&raw);
    if codes.is_empty() {
        return Err(GaussError::EmptyCodeInput);
    }
    Ok(codes)
}

/// Pede os códigos interativamente quando nada foi passado na linha de
/// comando.
fn prompt_codes() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Insira um ou mais códigos (separados por vírgula)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| GaussError::Prompt(e.to_string()))?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commas_and_newlines() {
        let codes = parse_code_input("A1, B2\nC3,D4");
        assert_eq!(codes, vec!["A1", "B2", "C3", "D4"]);
    }

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let codes = parse_code_input("  A1 ,, \n , B2  \n\n");
        assert_eq!(codes, vec!["A1", "B2"]);
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let codes = parse_code_input("B2, A1, B2");
        assert_eq!(codes, vec!["B2", "A1", "B2"]);
    }

    #[test]
    fn test_parse_empty_block() {
        assert!(parse_code_input("").is_empty());
        assert!(parse_code_input(" , \n ,").is_empty());
    }

    #[test]
    fn test_resolve_codes_empty_args_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codigos.txt");
        std::fs::write(&path, " \n , ").unwrap();

        let err = resolve_codes(&[], Some(&path)).unwrap_err();
        assert!(matches!(err, GaussError::EmptyCodeInput));
    }

    #[test]
    fn test_resolve_codes_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codigos.txt");
        std::fs::write(&path, "A1\nB2, C3").unwrap();

        let codes = resolve_codes(&[], Some(&path)).unwrap();
        assert_eq!(codes, vec!["A1", "B2", "C3"]);
    }
}
