//! 音频清理任务
//!
//! 在线播放要求生成的音频在请求结束后继续存在，
//! 因此音频不能随请求清理，由这里的后台任务按 TTL 定期回收

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::temp_store::TempFileStore;

/// 清理策略
#[derive(Debug, Clone)]
pub struct ReaperPolicy {
    /// 扫描间隔
    pub interval: Duration,
    /// 文件存活时间
    pub ttl: Duration,
}

/// 启动后台清理任务
///
/// 每个 interval 扫描一次存储根目录，删除早于 ttl 的文件。
/// 返回的 JoinHandle 随进程退出一起终止，无需显式取消
pub fn spawn_reaper(store: Arc<TempFileStore>, policy: ReaperPolicy) -> JoinHandle<()> {
    tracing::info!(
        interval_secs = policy.interval.as_secs(),
        ttl_secs = policy.ttl.as_secs(),
        root = %store.root().display(),
        "Audio reaper started"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(policy.interval);
        // 第一个 tick 立即触发，跳过它，避免启动即扫描
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = store.sweep_expired(policy.ttl).await {
                tracing::warn!(error = %e, "Scratch sweep failed");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reaper_sweeps_on_tick() {
        let dir = tempdir().unwrap();
        let store = Arc::new(TempFileStore::new(dir.path()).await.unwrap());

        let stale = dir.path().join("stale.bin");
        std::fs::write(&stale, b"old").unwrap();

        let handle = spawn_reaper(
            store.clone(),
            ReaperPolicy {
                interval: Duration::from_millis(20),
                ttl: Duration::ZERO,
            },
        );

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(!stale.exists());

        handle.abort();
    }
}
