//! Busca de códigos na tabela de referência
//!
//! Agrupa as linhas correspondentes por código Gauss, na ordem em que os
//! grupos aparecem na planilha, e acrescenta um registro "não encontrado"
//! para cada ocorrência de código solicitado sem correspondência.

pub mod types;

pub use types::{MatchedGroup, ResultRecord, CODE_SEPARATOR, NOT_FOUND, STATUS_ACTIVE};

use crate::table::ReferenceTable;
use std::collections::HashSet;

/// Busca os códigos solicitados na tabela.
///
/// A comparação é textual exata; aparar espaços é responsabilidade de quem
/// monta a lista de entrada. Lista vazia produz resultado vazio, sem erro.
pub fn match_codes(requested: &[String], table: &ReferenceTable) -> Vec<ResultRecord> {
    let wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();

    // Partição por código Gauss, na ordem da primeira aparição na tabela.
    let mut groups: Vec<MatchedGroup> = Vec::new();
    for row in table.rows() {
        if !wanted.contains(row.code.as_str()) {
            continue;
        }
        match groups.iter_mut().find(|g| g.group_key == row.group_key) {
            Some(group) => group.codes.push(row.code.clone()),
            None => groups.push(MatchedGroup {
                group_key: row.group_key.clone(),
                brand: row.brand.clone(),
                product: row.product.clone(),
                status: row.status.clone(),
                codes: vec![row.code.clone()],
            }),
        }
    }

    let mut records: Vec<ResultRecord> =
        groups.into_iter().map(ResultRecord::Matched).collect();

    // Cada ocorrência de entrada sem correspondência gera seu próprio
    // registro, inclusive duplicatas.
    for code in requested {
        let found = records.iter().any(|r| match r {
            ResultRecord::Matched(g) => {
                g.codes.iter().any(|c| c == code) || g.joined_codes() == *code
            }
            ResultRecord::Unmatched { .. } => false,
        });
        if !found {
            records.push(ResultRecord::Unmatched { code: code.clone() });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CrossRow;

    fn row(code: &str, group: &str, brand: &str, product: &str, status: &str) -> CrossRow {
        CrossRow {
            code: code.into(),
            group_key: group.into(),
            brand: brand.into(),
            product: product.into(),
            status: status.into(),
        }
    }

    fn sample_table() -> ReferenceTable {
        ReferenceTable::new(vec![
            row("A1", "G1", "X", "P1", "Ativo"),
            row("A2", "G1", "X", "P1", "Ativo"),
            row("B1", "G2", "Y", "P2", "Inativo"),
            row("B2", "G2", "Y", "P2", "Inativo"),
        ])
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_groups_equivalent_codes() {
        let records = match_codes(&codes(&["A1", "A2", "Z9"]), &sample_table());

        assert_eq!(records.len(), 2);
        match &records[0] {
            ResultRecord::Matched(g) => {
                assert_eq!(g.group_key, "G1");
                assert_eq!(g.brand, "X");
                assert_eq!(g.joined_codes(), "A1, A2");
            }
            other => panic!("esperava grupo G1, veio {:?}", other),
        }
        assert_eq!(records[1], ResultRecord::Unmatched { code: "Z9".into() });
        assert_eq!(records[1].group_key(), NOT_FOUND);
        assert_eq!(records[1].status(), NOT_FOUND);
    }

    #[test]
    fn test_group_order_follows_table_not_input() {
        let records = match_codes(&codes(&["B2", "A1"]), &sample_table());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group_key(), "G1");
        assert_eq!(records[1].group_key(), "G2");
    }

    #[test]
    fn test_every_requested_code_lands_in_exactly_one_record() {
        let requested = codes(&["A1", "B1", "Z9", "A2"]);
        let records = match_codes(&requested, &sample_table());

        for code in &requested {
            let hits = records
                .iter()
                .filter(|r| r.codes().contains(&code.as_str()))
                .count();
            assert_eq!(hits, 1, "código {} apareceu em {} registros", code, hits);
        }
    }

    #[test]
    fn test_duplicate_unmatched_input_yields_two_records() {
        let records = match_codes(&codes(&["Z9", "Z9"]), &sample_table());

        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| *r == ResultRecord::Unmatched { code: "Z9".into() }));
    }

    #[test]
    fn test_duplicate_matched_input_collapses() {
        // Duplicata de código encontrado não gera registro extra: o
        // agrupamento é dirigido pela tabela, não pela entrada.
        let records = match_codes(&codes(&["A1", "A1"]), &sample_table());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].joined_codes(), "A1");
    }

    #[test]
    fn test_exact_match_no_normalization() {
        let records = match_codes(&codes(&["a1", " A1"]), &sample_table());

        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| matches!(r, ResultRecord::Unmatched { .. })));
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        let records = match_codes(&[], &sample_table());
        assert!(records.is_empty());
    }
}
