//! 文本提取器适配器
//!
//! 每种支持的文档格式一个实现，均为阻塞调用

pub mod docx;
pub mod pdf;

pub use docx::DocxTextExtractor;
pub use pdf::PdfTextExtractor;
