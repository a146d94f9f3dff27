// 上传相关类型
// 定义待上传文件、上传状态和进度计算

use std::path::{Path, PathBuf};
use std::time::Duration;

/// 本地待上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// 文件名（上传时使用）
    pub name: String,
    /// 本地路径
    pub local_path: PathBuf,
    /// 文件大小（字节）
    pub size: u64,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, local_path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            local_path: local_path.into(),
            size,
        }
    }

    /// 从本地路径创建（读取文件大小）
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Ok(Self::new(name, path, metadata.len()))
    }
}

/// 上传状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// 尚未开始
    #[default]
    NotStarted,
    /// 上传中
    Uploading,
    /// 完成
    Completed,
    /// 失败
    Failed,
}

/// 待上传项
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// 唯一标识符
    pub id: String,
    pub file: PendingFile,
    pub status: UploadStatus,
    /// 进度百分比 (0 - 100)
    pub percent: u8,
    /// 最近一次计算的速度
    pub speed: Option<String>,
}

impl PendingUpload {
    pub fn new(file: PendingFile) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file,
            status: UploadStatus::NotStarted,
            percent: 0,
            speed: None,
        }
    }

    /// 开始上传
    pub fn start(&mut self) {
        self.status = UploadStatus::Uploading;
    }

    /// 更新进度
    ///
    /// `elapsed` 为该文件请求开始后的耗时。耗时为零时不计算速度，保留上一次的值。
    pub fn record_progress(&mut self, loaded: u64, total: u64, elapsed: Duration) {
        if total > 0 {
            let percent = ((loaded as f64 * 100.0) / total as f64).round();
            self.percent = percent.clamp(0.0, 100.0) as u8;
        }

        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            self.speed = Some(format_kb_per_sec(loaded as f64 / secs));
        }
    }

    /// 设置完成状态
    pub fn set_completed(&mut self) {
        self.status = UploadStatus::Completed;
        self.percent = 100;
    }

    /// 设置失败状态
    pub fn set_failed(&mut self) {
        self.status = UploadStatus::Failed;
        self.percent = 0;
        self.speed = None;
    }

    /// 速度列显示文本（失败时为 "Error"）
    pub fn speed_label(&self) -> Option<String> {
        if self.status == UploadStatus::Failed {
            return Some("Error".to_string());
        }
        self.speed.clone()
    }

    /// 队列中的进度文本，例如 `42% (12.50 KB/s)`；未开始时返回 `not_started`
    pub fn progress_label(&self, not_started: &str) -> String {
        if self.status == UploadStatus::NotStarted {
            return not_started.to_string();
        }
        let speed = self.speed_label().unwrap_or_else(|| "-".to_string());
        format!("{}% ({})", self.percent, speed)
    }
}

/// 格式化速度（KB/s，保留两位小数）
pub fn format_kb_per_sec(bytes_per_sec: f64) -> String {
    format!("{:.2} KB/s", bytes_per_sec / 1024.0)
}
