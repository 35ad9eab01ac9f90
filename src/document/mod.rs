//! # Documents
//!
//! Upload validation, text extraction and the light normalisation applied
//! before a document is handed to content generation.

pub mod extract;

pub use extract::{PlainTextExtractor, TextExtractor};

use crate::config::DocumentSettings;
use crate::preprocessing::{Cleaner, Tokenizer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, instrument, warn};

const SUMMARY_SENTENCES: usize = 3;
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("File size must be less than {}MB", .max / (1024 * 1024))]
    TooLarge { size: u64, max: u64 },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from document: {0}")]
    Extraction(String),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Md,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Md => "md",
        }
    }

    /// Lowercased text after the last `.` of a file name, empty without one.
    pub fn extension(name: &str) -> String {
        name.rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            "md" => Ok(DocumentFormat::Md),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub text: String,
    pub key_points: Vec<String>,
    pub word_count: usize,
    pub character_count: usize,
}

pub struct DocumentService {
    settings: DocumentSettings,
    extractor: Box<dyn TextExtractor>,
}

impl DocumentService {
    pub fn new(settings: DocumentSettings) -> Self {
        Self::with_extractor(settings, Box::new(PlainTextExtractor))
    }

    pub fn with_extractor(settings: DocumentSettings, extractor: Box<dyn TextExtractor>) -> Self {
        Self {
            settings,
            extractor,
        }
    }

    /// Checks size and extension, reporting every problem at once.
    pub fn validate_file(&self, name: &str, size: u64) -> Validation {
        let mut errors = Vec::new();

        if size > self.settings.max_file_size {
            errors.push(
                DocumentError::TooLarge {
                    size,
                    max: self.settings.max_file_size,
                }
                .to_string(),
            );
        }

        let extension = DocumentFormat::extension(name);
        if !self.settings.supported_formats.iter().any(|f| *f == extension) {
            errors.push(format!(
                "Unsupported file format. Supported formats: {}",
                self.settings.supported_formats.join(", ")
            ));
        }

        Validation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Validates and extracts a file, capping the text at the stored maximum.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn load(&self, path: &Path) -> Result<String, DocumentError> {
        let size = tokio::fs::metadata(path)
            .await
            .map_err(|source| DocumentError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let validation = self.validate_file(&name, size);
        if !validation.is_valid {
            warn!(errors = ?validation.errors, "Rejected document");
            return Err(DocumentError::Invalid(validation.errors));
        }

        let format: DocumentFormat = DocumentFormat::extension(&name).parse()?;
        let text = self.extractor.extract(path, format).await?;
        let max = self.settings.max_text_length;
        let text = if text.chars().count() > max {
            warn!(max, "Extracted text truncated");
            Cleaner::truncate(&text, max).to_string()
        } else {
            text
        };

        info!(%format, size, chars = text.chars().count(), "Document loaded");
        Ok(text)
    }

    /// Uses the configured processing length.
    pub fn process(&self, text: &str) -> ProcessedDocument {
        process_document(text, self.settings.processing_max_length)
    }
}

/// Collapses whitespace, truncates to `max_length` with `...`, and pulls out
/// key points.
pub fn process_document(text: &str, max_length: usize) -> ProcessedDocument {
    let text = Cleaner::truncate_marked(&Cleaner::normalize(text), max_length);
    ProcessedDocument {
        key_points: Tokenizer::document_key_points(&text),
        word_count: text.split(' ').filter(|w| !w.is_empty()).count(),
        character_count: text.chars().count(),
        text,
    }
}

/// First three sentences joined with `. `, cut at `max_length` with `...`.
pub fn generate_summary(text: &str, max_length: usize) -> String {
    let sentences: Vec<&str> = Tokenizer::sentences(text)
        .filter(|s| s.trim().chars().count() > 10)
        .take(SUMMARY_SENTENCES)
        .collect();
    let summary = sentences.join(". ");
    Cleaner::truncate_marked(summary.trim(), max_length)
}
