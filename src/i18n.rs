//! User-facing message catalogs.
//!
//! Messages are looked up by key in a [`Catalog`] resolved once at startup
//! for the chosen [`Language`]. Templates use `{name}` placeholders.
//! A key missing from the catalog renders as the key itself.
//!
//! ```
//! use namedupe::i18n::{Catalog, Language};
//!
//! let catalog = Catalog::new(Language::Pt);
//! assert_eq!(
//!     catalog.format("status_removed", &[("count", "3")]),
//!     "Concluído: 3 arquivos removidos"
//! );
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Brazilian Portuguese
    #[value(alias = "pt-br")]
    #[serde(alias = "pt-br")]
    Pt,
}

const EN: &[(&str, &str)] = &[
    ("folder_1", "Folder 1"),
    ("folder_2", "Folder 2"),
    ("ext_ycd", "Animations"),
    ("ext_ydr", "Models"),
    ("ext_ytyp", "Types"),
    ("ext_ybn", "Collisions"),
    ("status_scanning", "Scanning..."),
    ("status_complete", "Scan complete!"),
    ("status_deleting", "Moving to recycle bin..."),
    ("col_filename", "Filename"),
    ("col_path1", "Folder 1 Path"),
    ("col_path2", "Folder 2 Path"),
    ("col_size", "Size"),
    ("summary_found", "Found {count} duplicate file(s) | Total: {size}"),
    ("summary_none", "No duplicate files found!"),
    ("summary_skipped", "{count} unreadable entr(ies) skipped under {path}"),
    ("warn_select_folders", "Please select both folders before scanning!"),
    ("err_folder1_not_found", "Folder 1 not found: {path}"),
    ("err_folder2_not_found", "Folder 2 not found: {path}"),
    ("warn_select_extension", "Please select at least one extension!"),
    ("info_no_duplicates", "No duplicates to remove!"),
    (
        "confirm_delete_msg",
        "Move {count} file(s) from {folder} to Recycle Bin? Files can be recovered from the Recycle Bin. [y/N] ",
    ),
    ("delete_cancelled", "Nothing was moved."),
    ("complete_msg", "Files moved to recycle bin: {success} | Errors: {errors}"),
    ("status_removed", "Complete: {count} files removed"),
    ("err_scan", "Error during scan: {error}"),
    ("err_scan_busy", "A scan is already running."),
    ("progress_scanning", "Scanning {path}"),
    ("progress_scanned", "Scanned {path}"),
    ("progress_files", "files"),
];

const PT: &[(&str, &str)] = &[
    ("folder_1", "Pasta 1"),
    ("folder_2", "Pasta 2"),
    ("ext_ycd", "Animações"),
    ("ext_ydr", "Modelos"),
    ("ext_ytyp", "Tipos"),
    ("ext_ybn", "Colisões"),
    ("status_scanning", "Verificando..."),
    ("status_complete", "Verificação concluída!"),
    ("status_deleting", "Movendo para lixeira..."),
    ("col_filename", "Arquivo"),
    ("col_path1", "Caminho Pasta 1"),
    ("col_path2", "Caminho Pasta 2"),
    ("col_size", "Tamanho"),
    (
        "summary_found",
        "Encontrados {count} arquivo(s) duplicado(s) | Total: {size}",
    ),
    ("summary_none", "Nenhum arquivo duplicado encontrado!"),
    ("summary_skipped", "{count} entrada(s) ilegível(is) ignorada(s) em {path}"),
    ("warn_select_folders", "Selecione as duas pastas antes de verificar!"),
    ("err_folder1_not_found", "Pasta 1 não encontrada: {path}"),
    ("err_folder2_not_found", "Pasta 2 não encontrada: {path}"),
    ("warn_select_extension", "Selecione pelo menos uma extensão!"),
    ("info_no_duplicates", "Nenhum duplicado para remover!"),
    (
        "confirm_delete_msg",
        "Mover {count} arquivo(s) da {folder} para a Lixeira? Os arquivos podem ser recuperados da Lixeira. [s/N] ",
    ),
    ("delete_cancelled", "Nenhum arquivo foi movido."),
    ("complete_msg", "Arquivos movidos para lixeira: {success} | Erros: {errors}"),
    ("status_removed", "Concluído: {count} arquivos removidos"),
    ("err_scan", "Erro ao verificar: {error}"),
    ("err_scan_busy", "Uma verificação já está em andamento."),
    ("progress_scanning", "Verificando {path}"),
    ("progress_scanned", "Verificado {path}"),
    ("progress_files", "arquivos"),
];

/// Resolved key → template mapping for one language.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: Language,
    messages: HashMap<&'static str, &'static str>,
}

impl Catalog {
    /// Resolve the catalog for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let table = match language {
            Language::En => EN,
            Language::Pt => PT,
        };
        Self {
            language,
            messages: table.iter().copied().collect(),
        }
    }

    /// The catalog's language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw template for `key`, or the key itself when unknown.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).copied().unwrap_or(key)
    }

    /// Template for `key` with `{name}` placeholders replaced.
    #[must_use]
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.t(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Whether `answer` is an affirmative reply in this language.
    #[must_use]
    pub fn is_yes(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        match self.language {
            Language::En => matches!(answer.as_str(), "y" | "yes"),
            Language::Pt => matches!(answer.as_str(), "s" | "sim" | "y" | "yes"),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
