//! 领域层
//!
//! 纯规则，无 I/O：
//! - text: 文本规范化与最小长度约束
//! - format: 文档格式分发
//! - voice: 音色与响应方式

pub mod format;
pub mod text;
pub mod voice;

pub use format::DocumentFormat;
pub use text::{is_speakable, normalize_whitespace, MIN_SPEAKABLE_CHARS};
pub use voice::{ActionChoice, AdvertisedVoice, ADVERTISED_VOICES, DEFAULT_VOICE};
