use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaussError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Planilha de referência não encontrada: {0}")]
    TableNotFound(String),

    #[error("Planilha de referência sem abas")]
    EmptyWorkbook,

    #[error("Coluna obrigatória ausente na planilha: {0}")]
    MissingColumn(String),

    #[error("Erro ao ler a planilha: {0}")]
    ExcelRead(String),

    #[error("Erro ao gerar a planilha: {0}")]
    ExcelWrite(String),

    #[error("Por favor, insira um ou mais códigos")]
    EmptyCodeInput,

    #[error("Erro de leitura da entrada: {0}")]
    Prompt(String),

    #[error("Erro de JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Erro de E/S: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GaussError>;
