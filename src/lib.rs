//! Biblioteca da consulta de referência cruzada Gauss
//!
//! Núcleo: `matcher` (agrupamento por código Gauss) e `export` (filtro de
//! ativos e achatamento em linhas). `table`, `input` e `export::excel` são
//! as bordas de E/S.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod matcher;
pub mod table;

pub use config::Config;
pub use error::{GaussError, Result};
pub use export::{build_rows, CodeLayout, ExportRow};
pub use matcher::{match_codes, MatchedGroup, ResultRecord};
pub use table::{CrossRow, ReferenceTable};
