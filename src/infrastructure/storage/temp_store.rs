//! Temp File Store - 临时文件存储实现
//!
//! 实现 TempStorePort trait。
//! 存储根目录来自配置，不使用进程环境里的系统临时目录。
//! 文件名一律由 UUID v4 构造，唯一性由构造保证，无需跨请求协调

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioHandle, StagedDocument, StorageError, TempStorePort};

/// 生成的音频文件扩展名
const AUDIO_EXTENSION: &str = ".mp3";

/// 校验对外音频文件名是否符合生成规则
///
/// 合法形式：36 字符的小写连字符 UUID 加 `.mp3`。
/// 这是 /audio/{filename} 端点的信任边界：
/// 校验必须在任何路径拼接之前完成
pub fn is_generated_audio_name(name: &str) -> bool {
    let Some(stem) = name.strip_suffix(AUDIO_EXTENSION) else {
        return false;
    };
    if stem.len() != 36 || !stem.is_ascii() {
        return false;
    }
    stem.char_indices().all(|(i, c)| match i {
        8 | 13 | 18 | 23 => c == '-',
        _ => matches!(c, '0'..='9' | 'a'..='f'),
    })
}

/// 临时文件存储
pub struct TempFileStore {
    /// 存储根目录
    root: PathBuf,
}

impl TempFileStore {
    /// 创建存储，确保根目录存在
    pub async fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// 存储根目录
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 删除根目录下修改时间早于 ttl 的文件
    ///
    /// 返回删除的文件数。只处理普通文件，子目录不受影响
    pub async fn sweep_expired(&self, ttl: Duration) -> Result<u64, StorageError> {
        let mut removed = 0u64;
        let mut entries = fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let metadata = match entry.metadata().await {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };
            let expired = metadata
                .modified()
                .ok()
                .and_then(|t| t.elapsed().ok())
                .map(|age| age >= ttl)
                .unwrap_or(false);
            if !expired {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to sweep file");
                }
            }
        }

        if removed > 0 {
            tracing::info!(removed, "Swept expired scratch files");
        }

        Ok(removed)
    }
}

#[async_trait]
impl TempStorePort for TempFileStore {
    async fn stage_document(
        &self,
        bytes: &[u8],
        extension: &str,
    ) -> Result<StagedDocument, StorageError> {
        let path = self.root.join(format!("{}.{}", Uuid::new_v4(), extension));
        fs::write(&path, bytes).await?;

        tracing::debug!(
            path = %path.display(),
            size = bytes.len(),
            "Staged uploaded document"
        );

        Ok(StagedDocument::new(path))
    }

    fn allocate_audio(&self) -> AudioHandle {
        let name = format!("{}{}", Uuid::new_v4(), AUDIO_EXTENSION);
        let path = self.root.join(&name);
        AudioHandle { name, path }
    }

    fn resolve_audio(&self, name: &str) -> Option<PathBuf> {
        if !is_generated_audio_name(name) {
            return None;
        }
        Some(self.root.join(name))
    }
}
