//! PDF 文本提取器
//!
//! 基于 pdf-extract 按页提取：逐页取文本，跳过无文本的页
//! （如纯扫描页），页与页之间以单个空格拼接

use std::path::Path;

use crate::application::ports::{ExtractError, TextExtractorPort};
use crate::domain::DocumentFormat;

/// PDF 提取器
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractorPort for PdfTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_by_pages(path)
            .map_err(|e| ExtractError::ParseFailed(e.to_string()))?;

        let mut text = String::new();
        for page in &pages {
            let page_text = page.trim();
            if page_text.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(page_text);
        }

        tracing::debug!(
            path = %path.display(),
            pages = pages.len(),
            chars = text.chars().count(),
            "PDF text extracted"
        );

        Ok(text)
    }
}
