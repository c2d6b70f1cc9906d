use crate::error::{GaussError, Result};
use crate::table::DEFAULT_TABLE_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Caminho da planilha de referência padrão.
    pub table_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GaussError::Config("Diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("gauss-cross").join("config.json"))
    }

    /// Planilha efetiva: opção da linha de comando, depois a configurada,
    /// depois o nome padrão no diretório atual.
    pub fn resolve_table_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.table_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_FILE))
    }

    pub fn set_table_path(&mut self, path: PathBuf) -> Result<()> {
        self.table_path = Some(path);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table_path_precedence() {
        let config = Config {
            table_path: Some(PathBuf::from("/dados/cross.xlsx")),
        };

        assert_eq!(
            config.resolve_table_path(Some(PathBuf::from("outra.xlsx"))),
            PathBuf::from("outra.xlsx")
        );
        assert_eq!(
            config.resolve_table_path(None),
            PathBuf::from("/dados/cross.xlsx")
        );

        let empty = Config::default();
        assert_eq!(
            empty.resolve_table_path(None),
            PathBuf::from(DEFAULT_TABLE_FILE)
        );
    }
}
