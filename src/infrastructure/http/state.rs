//! Application State

use std::sync::Arc;

use crate::application::{ReadAloudHandler, SpeechSynthesizerPort, TextExtractorPort};
use crate::infrastructure::extract::{DocxTextExtractor, PdfTextExtractor};
use crate::infrastructure::storage::TempFileStore;

/// 应用状态
///
/// 管线处理器供 /upload 使用；store 另外单独持有，
/// 供 /audio/{filename} 端点按名解析音频路径
pub struct AppState {
    pub store: Arc<TempFileStore>,
    pub read_aloud_handler: ReadAloudHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<TempFileStore>, synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        let extractors: Vec<Arc<dyn TextExtractorPort>> = vec![
            Arc::new(PdfTextExtractor::new()),
            Arc::new(DocxTextExtractor::new()),
        ];

        Self {
            read_aloud_handler: ReadAloudHandler::new(extractors, synthesizer, store.clone()),
            store,
        }
    }
}
