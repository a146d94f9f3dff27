// Drive 错误类型定义

use thiserror::Error;

/// Drive 接口错误
#[derive(Debug, Error)]
pub enum DriveError {
    /// 网络/传输错误
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 服务端拒绝（非 2xx）
    #[error("Server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// 响应解析失败
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 本地文件错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 接口地址配置错误
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl DriveError {
    /// 是否是服务端返回的错误
    pub fn is_rejected(&self) -> bool {
        matches!(self, DriveError::Rejected { .. })
    }
}
