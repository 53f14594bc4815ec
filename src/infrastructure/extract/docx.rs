//! Word 文档文本提取器
//!
//! 基于 docx-rs 遍历文档顶层段落：跳过去除空白后为空的段落，
//! 其余按文档顺序以单个空格拼接。不处理表格、图片和嵌入对象

use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::application::ports::{ExtractError, TextExtractorPort};
use crate::domain::DocumentFormat;

/// DOCX 提取器
#[derive(Debug, Default)]
pub struct DocxTextExtractor;

impl DocxTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// 拼接段落内所有 Run 的文本
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

impl TextExtractorPort for DocxTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path)?;
        let docx = docx_rs::read_docx(&bytes)
            .map_err(|e| ExtractError::ParseFailed(e.to_string()))?;

        let mut text = String::new();
        let mut paragraphs = 0usize;
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                paragraphs += 1;
                let content = paragraph_text(paragraph);
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(trimmed);
            }
        }

        tracing::debug!(
            path = %path.display(),
            paragraphs,
            chars = text.chars().count(),
            "DOCX text extracted"
        );

        Ok(text)
    }
}
