//! Tipos do resultado da busca

/// Marcador exibido/exportado para códigos sem correspondência.
pub const NOT_FOUND: &str = "Não encontrado";

/// Valor exato de status usado pelo filtro "apenas ativos".
pub const STATUS_ACTIVE: &str = "Ativo";

/// Separador textual entre códigos equivalentes de um mesmo grupo.
pub const CODE_SEPARATOR: &str = ", ";

/// Grupo de códigos equivalentes encontrado na tabela.
///
/// `brand`, `product` e `status` vêm da primeira linha do grupo na ordem
/// da planilha; assume-se que são uniformes dentro do grupo (comportamento
/// herdado, não validado).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedGroup {
    pub group_key: String,
    pub brand: String,
    pub product: String,
    pub status: String,
    /// Códigos solicitados que caíram neste grupo, na ordem da planilha.
    pub codes: Vec<String>,
}

impl MatchedGroup {
    /// Códigos do grupo em uma única célula de texto.
    pub fn joined_codes(&self) -> String {
        self.codes.join(CODE_SEPARATOR)
    }
}

/// Um registro do resultado: grupo encontrado ou código sem correspondência.
///
/// A variante explícita substitui o texto-sentinela nos campos internos;
/// o marcador "Não encontrado" só aparece na borda de exibição/exportação.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRecord {
    Matched(MatchedGroup),
    Unmatched { code: String },
}

impl ResultRecord {
    /// Código Gauss como exibido/exportado.
    pub fn group_key(&self) -> &str {
        match self {
            ResultRecord::Matched(g) => &g.group_key,
            ResultRecord::Unmatched { .. } => NOT_FOUND,
        }
    }

    pub fn brand(&self) -> &str {
        match self {
            ResultRecord::Matched(g) => &g.brand,
            ResultRecord::Unmatched { .. } => NOT_FOUND,
        }
    }

    pub fn product(&self) -> &str {
        match self {
            ResultRecord::Matched(g) => &g.product,
            ResultRecord::Unmatched { .. } => NOT_FOUND,
        }
    }

    /// Status exibido; registros sem correspondência rendem o marcador,
    /// portanto nunca passam pelo filtro de ativos.
    pub fn status(&self) -> &str {
        match self {
            ResultRecord::Matched(g) => &g.status,
            ResultRecord::Unmatched { .. } => NOT_FOUND,
        }
    }

    /// Célula de código: junção por ", " no grupo, o próprio código se
    /// não encontrado.
    pub fn joined_codes(&self) -> String {
        match self {
            ResultRecord::Matched(g) => g.joined_codes(),
            ResultRecord::Unmatched { code } => code.clone(),
        }
    }

    /// Códigos individuais do registro, na ordem preservada.
    pub fn codes(&self) -> Vec<&str> {
        match self {
            ResultRecord::Matched(g) => g.codes.iter().map(String::as_str).collect(),
            ResultRecord::Unmatched { code } => vec![code.as_str()],
        }
    }
}
