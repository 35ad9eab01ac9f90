//! Text extraction behind a trait so binary formats can be plugged in.

use super::{DocumentError, DocumentFormat};
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, DocumentError>;
}

/// Reads `txt` and `md` files as UTF-8. Binary formats are refused.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path, format: DocumentFormat) -> Result<String, DocumentError> {
        match format {
            DocumentFormat::Txt | DocumentFormat::Md => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                }),
            DocumentFormat::Pdf | DocumentFormat::Docx => Err(DocumentError::Extraction(format!(
                "No {} extractor is configured",
                format
            ))),
        }
    }
}
