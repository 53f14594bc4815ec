//! 临时文件存储
//!
//! - temp_store: TempStorePort 的文件系统实现
//! - reaper: 按 TTL 回收音频的后台任务

pub mod reaper;
pub mod temp_store;

pub use reaper::{spawn_reaper, ReaperPolicy};
pub use temp_store::{is_generated_audio_name, TempFileStore};
