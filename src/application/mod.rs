//! 应用层
//!
//! - Ports: 端口定义（TextExtractor, SpeechSynthesizer, TempStore）
//! - Pipeline: 上传到音频的朗读管线

pub mod error;
pub mod pipeline;
pub mod ports;

pub use error::PipelineError;
pub use pipeline::{ReadAloudCommand, ReadAloudHandler, SynthesizedSpeech};
pub use ports::{
    AudioHandle, ExtractError, SpeechError, SpeechSynthesizerPort, StagedDocument, StorageError,
    SynthesisRequest, TempStorePort, TextExtractorPort,
};
