//! 页面渲染
//!
//! 上传表单和播放页。纯模板拼接，无业务逻辑；
//! 页面文案是产品侧的俄语文本

use crate::domain::ADVERTISED_VOICES;

/// 下载时的固定附件文件名
pub const DOWNLOAD_FILENAME: &str = "речь_робота.mp3";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>🤖 Робот-Читатель</title>
    <meta charset="UTF-8">
    <style>
        body {
            font-family: 'Arial', sans-serif;
            background: linear-gradient(135deg, #6e8efb, #a777e3);
            margin: 0;
            padding: 0;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
            color: white;
        }
        .container {
            background: rgba(255,255,255,0.1);
            padding: 40px;
            border-radius: 20px;
            box-shadow: 0 8px 32px rgba(0,0,0,0.3);
            text-align: center;
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255,255,255,0.2);
            max-width: 500px;
        }
        h1 {
            margin: 0 0 20px;
            font-size: 2.5em;
        }
        input[type="file"] {
            margin: 20px 0;
            padding: 10px;
            width: 100%;
            border-radius: 10px;
            border: none;
            background: rgba(255,255,255,0.2);
            color: white;
        }
        button {
            background: #ff6b6b;
            color: white;
            border: none;
            padding: 15px 30px;
            font-size: 18px;
            border-radius: 50px;
            cursor: pointer;
            transition: all 0.3s;
            margin: 10px;
            font-weight: bold;
        }
        button:hover {
            background: #ff5252;
            transform: scale(1.05);
        }
        select {
            padding: 10px;
            border-radius: 10px;
            border: none;
            background: rgba(255,255,255,0.2);
            color: white;
            margin: 10px 0;
            width: 100%;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>🤖 Робот-Читатель</h1>
        <p>Загрузи PDF или Word — я прочитаю его вслух!</p>

        <form method="POST" action="/upload" enctype="multipart/form-data">
            <input type="file" name="file" accept=".pdf,.docx" required>

            <br>
            <label>🗣 Выбери голос:</label><br>
            <select name="voice">
__VOICE_OPTIONS__
            </select>

            <br><br>
            <button type="submit" name="action" value="play">▶️ Слушать онлайн</button>
            <button type="submit" name="action" value="download">💾 Скачать MP3</button>
        </form>
    </div>
</body>
</html>
"#;

const PLAYER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Слушай! 🎧</title><meta charset="UTF-8"></head>
<body style="text-align:center; padding:50px; background:linear-gradient(135deg, #74ebd5, #ACB6E5);">
    <h2>🔊 Слушай прямо здесь!</h2>
    <audio controls autoplay style="width:80%; max-width:500px; margin:20px;">
        <source src="/audio/__AUDIO_NAME__" type="audio/mpeg">
        Твой браузер не поддерживает аудио.
    </audio>
    <br>
    <a href="/audio/__AUDIO_NAME__" download="__DOWNLOAD_NAME__">
        <button style="padding:10px 20px; background:#4CAF50; color:white; border:none; border-radius:5px; cursor:pointer;">
            💾 Скачать файл
        </button>
    </a>
    <br><br>
    <a href="/" style="color:#333; text-decoration:none;">⬅️ Вернуться назад</a>
</body>
</html>
"#;

/// 渲染上传表单页
pub fn render_index_page() -> String {
    let mut options = String::new();
    for voice in ADVERTISED_VOICES {
        options.push_str(&format!(
            "                <option value=\"{}\">{}</option>\n",
            voice.id, voice.label
        ));
    }
    INDEX_TEMPLATE.replace("__VOICE_OPTIONS__\n", &options)
}

/// 渲染播放页
///
/// `audio_name` 是生成的音频文件名（UUID 构造，无需转义）
pub fn render_player_page(audio_name: &str) -> String {
    PLAYER_TEMPLATE
        .replace("__AUDIO_NAME__", audio_name)
        .replace("__DOWNLOAD_NAME__", DOWNLOAD_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_VOICE;

    #[test]
    fn test_index_lists_all_advertised_voices() {
        let html = render_index_page();
        for voice in ADVERTISED_VOICES {
            assert!(html.contains(voice.id));
            assert!(html.contains(voice.label));
        }
        assert!(html.contains(DEFAULT_VOICE));
        assert!(!html.contains("__VOICE_OPTIONS__"));
    }

    #[test]
    fn test_index_has_upload_form() {
        let html = render_index_page();
        assert!(html.contains("action=\"/upload\""));
        assert!(html.contains("enctype=\"multipart/form-data\""));
        assert!(html.contains("name=\"file\""));
    }

    #[test]
    fn test_player_references_audio_endpoint() {
        let html = render_player_page("01234567-89ab-4cde-8f01-23456789abcd.mp3");
        assert!(html.contains("<audio"));
        assert!(html.contains("/audio/01234567-89ab-4cde-8f01-23456789abcd.mp3"));
        assert!(html.contains(DOWNLOAD_FILENAME));
        assert!(!html.contains("__AUDIO_NAME__"));
    }
}
