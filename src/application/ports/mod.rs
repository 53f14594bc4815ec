//! 应用层端口定义
//!
//! - text_extractor: 文档文本提取
//! - speech_synthesizer: 外部语音合成服务
//! - temp_store: 临时文件存储

pub mod speech_synthesizer;
pub mod temp_store;
pub mod text_extractor;

pub use speech_synthesizer::{SpeechError, SpeechSynthesizerPort, SynthesisRequest};
pub use temp_store::{AudioHandle, StagedDocument, StorageError, TempStorePort};
pub use text_extractor::{ExtractError, TextExtractorPort};
