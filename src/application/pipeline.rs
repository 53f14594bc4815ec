//! 朗读管线
//!
//! 一次上传请求的完整处理流程，严格顺序执行、无回退分支：
//! 校验上传 → 格式分发 → 落盘 → 提取 → 规范化 → 长度校验 → 合成
//!
//! 每次请求只触碰自己独占的临时文件，处理器本身无共享可变状态，
//! 可在多请求并发下直接复用

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::PipelineError;
use crate::application::ports::{
    SpeechSynthesizerPort, SynthesisRequest, TempStorePort, TextExtractorPort,
};
use crate::domain::{is_speakable, normalize_whitespace, DocumentFormat};

/// 上传的文档（一次请求的瞬态实体）
#[derive(Debug)]
pub struct ReadAloudCommand {
    /// 客户端声明的文件名（用于格式分发）
    pub filename: String,
    /// 文件原始字节
    pub bytes: Vec<u8>,
    /// 音色标识（原样透传）
    pub voice: String,
}

/// 合成结果
#[derive(Debug)]
pub struct SynthesizedSpeech {
    /// 对外暴露的音频文件名（`<uuid>.mp3`）
    pub audio_name: String,
    /// 音频落盘路径
    pub audio_path: PathBuf,
    /// 规范化后的文本字符数
    pub text_chars: usize,
}

/// 朗读管线处理器
pub struct ReadAloudHandler {
    extractors: Vec<Arc<dyn TextExtractorPort>>,
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    store: Arc<dyn TempStorePort>,
}

impl ReadAloudHandler {
    pub fn new(
        extractors: Vec<Arc<dyn TextExtractorPort>>,
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        store: Arc<dyn TempStorePort>,
    ) -> Self {
        Self {
            extractors,
            synthesizer,
            store,
        }
    }

    fn extractor_for(&self, format: DocumentFormat) -> Option<Arc<dyn TextExtractorPort>> {
        self.extractors
            .iter()
            .find(|e| e.format() == format)
            .cloned()
    }

    /// 执行管线
    pub async fn handle(
        &self,
        command: ReadAloudCommand,
    ) -> Result<SynthesizedSpeech, PipelineError> {
        if command.bytes.is_empty() {
            return Err(PipelineError::NoFileProvided);
        }

        // 格式分发先于落盘：被拒绝的格式不触碰文件系统
        let format = DocumentFormat::from_filename(&command.filename)
            .ok_or_else(|| PipelineError::UnsupportedFormat(command.filename.clone()))?;
        let extractor = self
            .extractor_for(format)
            .ok_or_else(|| PipelineError::UnsupportedFormat(command.filename.clone()))?;

        let staged = self
            .store
            .stage_document(&command.bytes, format.extension())
            .await?;

        tracing::debug!(
            filename = %command.filename,
            format = %format,
            size = command.bytes.len(),
            staged = %staged.path().display(),
            "Document staged"
        );

        // 解析库是同步实现，放到阻塞线程池执行；
        // 库内 panic 也在这里被兜住，转成提取错误
        let raw_text = {
            let path = staged.path().to_path_buf();
            tokio::task::spawn_blocking(move || extractor.extract(&path))
                .await
                .map_err(|e| PipelineError::ExtractionFailed(e.to_string()))??
        };

        // 提取完成后文档临时文件即可删除
        drop(staged);

        let text = normalize_whitespace(&raw_text);
        if !is_speakable(&text) {
            return Err(PipelineError::EmptyText);
        }

        let audio = self.store.allocate_audio();
        let text_chars = text.chars().count();
        let request = SynthesisRequest {
            text,
            voice: command.voice,
        };

        self.synthesizer.synthesize(&request, &audio.path).await?;

        tracing::info!(
            audio = %audio.name,
            voice = %request.voice,
            text_chars,
            "Document synthesized"
        );

        Ok(SynthesizedSpeech {
            audio_name: audio.name,
            audio_path: audio.path,
            text_chars,
        })
    }
}
