//! Temp Store Port - 临时文件存储抽象
//!
//! 进程唯一的临时文件命名空间。上传文档与生成的音频都落在这里，
//! 文件名由 UUID 构造保证唯一，不依赖任何跨请求协调

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// 落盘后的上传文档
///
/// 生命周期与一次请求绑定：提取完成后即不再需要，
/// Drop 时删除底层文件
#[derive(Debug)]
pub struct StagedDocument {
    path: PathBuf,
}

impl StagedDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedDocument {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::debug!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove staged document"
            );
        }
    }
}

/// 已分配的音频文件位置
///
/// 音频必须在请求结束后继续存在（在线播放通过独立端点按名取回），
/// 由后台清理任务按 TTL 回收，这里不做 Drop 清理
#[derive(Debug, Clone)]
pub struct AudioHandle {
    /// 对外暴露的文件名（`<uuid>.mp3`）
    pub name: String,
    /// 完整落盘路径
    pub path: PathBuf,
}

/// Temp Store Port
#[async_trait]
pub trait TempStorePort: Send + Sync {
    /// 将上传内容写入唯一命名的临时文件，保留原始扩展名
    async fn stage_document(
        &self,
        bytes: &[u8],
        extension: &str,
    ) -> Result<StagedDocument, StorageError>;

    /// 为生成的音频分配唯一文件名（不创建文件）
    fn allocate_audio(&self) -> AudioHandle;

    /// 按对外文件名解析音频路径
    ///
    /// 文件名必须符合生成规则（UUID + `.mp3`），否则返回 `None`；
    /// 校验在路径拼接之前完成
    fn resolve_audio(&self, name: &str) -> Option<PathBuf>;
}
