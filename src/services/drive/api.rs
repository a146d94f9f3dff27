// Drive 接口抽象
// 控制器只依赖这个 trait，测试时替换为内存实现

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DriveError;
use crate::models::drive::{DirectoryEntry, PendingFile};

/// 上传进度回调：(已发送字节, 总字节)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

#[async_trait]
pub trait DriveApi: Send + Sync {
    /// 读取目录内容
    async fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, DriveError>;

    /// 上传文件到目录
    async fn upload(
        &self,
        dir: &str,
        file: &PendingFile,
        on_progress: ProgressCallback,
    ) -> Result<(), DriveError>;

    /// 下载文件内容
    async fn download(&self, dir: &str, file_name: &str) -> Result<Vec<u8>, DriveError>;

    /// 删除文件或目录
    async fn delete(&self, dir: &str, name: &str) -> Result<(), DriveError>;

    /// 创建目录
    async fn create_folder(&self, dir: &str, name: &str) -> Result<(), DriveError>;

    /// 浏览器内预览地址
    fn preview_url(&self, dir: &str, file_name: &str) -> Result<String, DriveError>;
}
