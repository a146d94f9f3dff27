// 本地数据持久化服务

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::AppSettings;

/// 获取配置目录路径
/// macOS: ~/Library/Application Support/drivemaster
/// Linux: ~/.config/drivemaster
/// Windows: C:\Users\<用户名>\AppData\Roaming\drivemaster
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("无法获取系统配置目录")?
        .join("drivemaster");
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).context("无法创建配置目录")?;
    }
    Ok(config_dir)
}

// ======================== Settings 配置持久化 ========================

/// 获取设置配置文件路径
pub fn get_settings_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("settings.json"))
}

/// 加载应用设置
pub fn load_settings() -> Result<AppSettings> {
    load_settings_from(&get_settings_file()?)
}

/// 保存应用设置
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&get_settings_file()?, settings)
}

/// 从指定文件加载设置，文件不存在时返回默认值
pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let content = fs::read_to_string(path).context("无法读取设置配置文件")?;
    let settings: AppSettings = serde_json::from_str(&content).context("无法解析设置配置文件")?;
    Ok(settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("无法序列化设置配置")?;
    fs::write(path, content).context("无法写入设置配置文件")?;
    Ok(())
}

// ======================== 下载保存 ========================

/// 下载文件的保存目录：设置优先，其次系统下载目录
pub fn download_dir(settings: &AppSettings) -> Option<PathBuf> {
    let configured = settings.download.default_dir.trim();
    if !configured.is_empty() {
        return Some(PathBuf::from(configured));
    }
    dirs::download_dir()
}

/// 在目录中选择不冲突的文件名：a.txt -> a (1).txt -> a (2).txt
pub fn unique_target(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match file_name.rfind('.') {
        Some(pos) if pos > 0 => (&file_name[..pos], &file_name[pos..]),
        _ => (file_name, ""),
    };

    let mut index = 1;
    loop {
        let candidate = dir.join(format!("{} ({}){}", stem, index, ext));
        if !candidate.exists() {
            return candidate;
        }
        index += 1;
    }
}

/// 保存下载内容，返回实际写入的路径
pub fn save_download(dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).context("无法创建下载目录")?;
    }
    write_download(unique_target(dir, file_name), content)
}

/// 写入用户指定的下载路径（保存对话框已确认覆盖）
pub fn write_download(target: PathBuf, content: &[u8]) -> Result<PathBuf> {
    fs::write(&target, content)
        .with_context(|| format!("无法写入下载文件 {}", target.display()))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("drivemaster-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_settings_file_gives_defaults() {
        let dir = scratch_dir();
        let settings = load_settings_from(&dir.join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn settings_survive_save_and_load() {
        let dir = scratch_dir();
        let path = dir.join("settings.json");
        let mut settings = AppSettings::default();
        settings.drive.base_url = "http://nas.local/drive".to_string();

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn corrupt_settings_file_is_an_error() {
        let dir = scratch_dir();
        let path = dir.join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_settings_from(&path).is_err());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn configured_download_dir_wins() {
        let mut settings = AppSettings::default();
        settings.download.default_dir = "/srv/downloads".to_string();
        assert_eq!(download_dir(&settings), Some(PathBuf::from("/srv/downloads")));
    }

    #[test]
    fn save_download_does_not_overwrite() {
        let dir = scratch_dir();
        let first = save_download(&dir, "report.pdf", b"one").unwrap();
        let second = save_download(&dir, "report.pdf", b"two").unwrap();
        let third = save_download(&dir, ".env", b"three").unwrap();
        let fourth = save_download(&dir, ".env", b"four").unwrap();

        assert_eq!(first, dir.join("report.pdf"));
        assert_eq!(second, dir.join("report (1).pdf"));
        assert_eq!(fs::read(&second).unwrap(), b"two");
        assert_eq!(third, dir.join(".env"));
        assert_eq!(fourth, dir.join(".env (1)"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn write_download_replaces_chosen_file() {
        let dir = scratch_dir();
        let target = dir.join("picked.txt");
        fs::write(&target, b"old").unwrap();

        let written = write_download(target.clone(), b"new").unwrap();

        assert_eq!(written, target);
        assert_eq!(fs::read(&target).unwrap(), b"new");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn write_download_into_missing_dir_fails() {
        let dir = scratch_dir();
        assert!(write_download(dir.join("missing").join("a.txt"), b"x").is_err());
        fs::remove_dir_all(dir).ok();
    }
}
