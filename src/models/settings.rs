// Settings 配置数据结构

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_URL;

// ======================== 主配置结构 ========================

/// 应用设置（持久化用）
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub theme: ThemeSettings,
    pub drive: DriveSettings,
    pub download: DownloadSettings,
}

// ======================== 主题设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

/// 界面语言
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Japanese,
    English,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub language: Language,
}

// ======================== Drive 设置 ========================

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DriveSettings {
    /// 接口前缀，例如 https://example.com/drive
    pub base_url: String,
    /// 启动时打开的目录
    pub start_path: String,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// 非上传请求的超时（秒）
    pub request_timeout_secs: u64,
    pub show_hidden: bool,
    pub folders_first: bool,
}

impl Default for DriveSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            start_path: "/".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            show_hidden: true,
            folders_first: false,
        }
    }
}

// ======================== 下载设置 ========================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DownloadSettings {
    /// 默认保存目录，为空时弹出保存对话框
    pub default_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"drive": {"base_url": "http://nas.local/drive"}}"#).unwrap();

        assert_eq!(settings.drive.base_url, "http://nas.local/drive");
        assert_eq!(settings.drive.start_path, "/");
        assert_eq!(settings.drive.request_timeout_secs, 30);
        assert_eq!(settings.theme.language, Language::Japanese);
        assert!(settings.download.default_dir.is_empty());
    }

    #[test]
    fn settings_json_round_trip() {
        let mut settings = AppSettings::default();
        settings.theme.language = Language::English;
        settings.drive.folders_first = true;
        settings.download.default_dir = "/tmp/downloads".to_string();

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, settings);
    }
}
