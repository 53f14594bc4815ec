//! Fake Speech Client - 用于测试的合成客户端
//!
//! 不调用外部服务，把固定字节写入目标文件，并记录收到的每个请求，
//! 便于测试断言"合成是否被调用、用了什么文本和音色"

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort, SynthesisRequest};

/// Fake Speech Client
pub struct FakeSpeechClient {
    /// 每次合成写入的固定音频字节
    audio_bytes: Vec<u8>,
    /// 收到的请求记录
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeSpeechClient {
    pub fn new(audio_bytes: Vec<u8>) -> Self {
        Self {
            audio_bytes,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 固定返回一段伪 MP3 字节
    pub fn with_defaults() -> Self {
        Self::new(b"ID3\x04\x00fake-mp3-frame".to_vec())
    }

    /// 写入的音频字节
    pub fn audio_bytes(&self) -> &[u8] {
        &self.audio_bytes
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechClient {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
        output: &Path,
    ) -> Result<(), SpeechError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeSpeechClient: writing fixed audio"
        );

        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(request.clone());

        tokio::fs::write(output, &self.audio_bytes)
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))?;

        Ok(())
    }
}
