//! 文档格式
//!
//! 按文件名扩展名分发到对应的提取器。
//! 匹配规则：扩展名精确后缀匹配，区分大小写（`.pdf` / `.docx`）

/// 支持的文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// 根据上传文件名判断格式
    ///
    /// 只接受小写的 `.pdf` / `.docx` 后缀，其余返回 `None`
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    /// 格式对应的扩展名（不含点号）
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
