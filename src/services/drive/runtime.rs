// Drive 后台运行时
// 所有网络请求都在这个 Tokio 运行时中执行，UI 线程只接收结果

use once_cell::sync::Lazy;
use tokio::runtime::{Handle, Runtime};

/// 全局 Drive 运行时
pub struct DriveRuntime {
    runtime: Runtime,
}

impl DriveRuntime {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("drive-worker")
            .build()
            .expect("Failed to create Drive Tokio runtime");

        Self { runtime }
    }

    /// 获取全局单例
    pub fn global() -> &'static DriveRuntime {
        static RUNTIME: Lazy<DriveRuntime> = Lazy::new(DriveRuntime::new);
        &RUNTIME
    }

    /// 获取可克隆的句柄（交给控制器 spawn 请求）
    pub fn handle(&self) -> Handle {
        self.runtime.handle().clone()
    }
}
