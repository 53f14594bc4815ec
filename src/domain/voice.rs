//! 音色与响应方式
//!
//! 音色标识由外部合成服务定义，是不透明字符串。
//! 表单只展示三个推荐音色，但任何字符串都会原样透传给合成服务，
//! 不做合法性校验（无效音色由服务端报错）

/// 默认音色（表单未提交 voice 字段时使用）
pub const DEFAULT_VOICE: &str = "ru-RU-DmitryNeural";

/// 表单中展示的音色
#[derive(Debug, Clone, Copy)]
pub struct AdvertisedVoice {
    /// 合成服务侧的音色标识
    pub id: &'static str,
    /// 表单中的展示名
    pub label: &'static str,
}

/// 上传页面提供的音色选项
pub const ADVERTISED_VOICES: &[AdvertisedVoice] = &[
    AdvertisedVoice {
        id: "ru-RU-DmitryNeural",
        label: "Дмитрий (мужской)",
    },
    AdvertisedVoice {
        id: "ru-RU-SvetlanaNeural",
        label: "Светлана (женский)",
    },
    AdvertisedVoice {
        id: "ru-RU-DariyaNeural",
        label: "Дарья (женский, мягкий)",
    },
];

/// 合成结果的响应方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionChoice {
    /// 返回内嵌播放器页面
    #[default]
    Play,
    /// 以附件形式下载 MP3
    Download,
}

impl ActionChoice {
    /// 解析表单的 action 字段
    ///
    /// 只有 `"download"` 触发下载，其余取值（包括缺省）都按在线播放处理
    pub fn parse(value: &str) -> Self {
        if value == "download" {
            Self::Download
        } else {
            Self::Play
        }
    }
}
