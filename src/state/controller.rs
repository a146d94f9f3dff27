// Drive 控制器
// 持有 DriveState，把状态机返回的命令分发出去：远程请求交给执行器，其余转为 UI 副作用

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use super::executor;
use crate::models::drive::{AlertKind, DriveCommand, DriveEvent, DriveState};
use crate::services::drive::DriveApi;

/// 需要 UI 层处理的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// 弹出错误通知
    Alert(AlertKind),
    /// 用系统浏览器打开
    OpenUrl(String),
    /// 保存下载内容到本地
    SaveDownload { file_name: String, content: Vec<u8> },
}

pub struct DriveController {
    state: DriveState,
    api: Arc<dyn DriveApi>,
    runtime: Handle,
    events_tx: UnboundedSender<DriveEvent>,
    /// 尚未返回结果的请求数
    in_flight: usize,
}

impl DriveController {
    /// 创建控制器，返回结果事件的接收端
    pub fn new(
        api: Arc<dyn DriveApi>,
        runtime: Handle,
        start_path: &str,
    ) -> (Self, UnboundedReceiver<DriveEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let controller = Self {
            state: DriveState::new(start_path),
            api,
            runtime,
            events_tx,
            in_flight: 0,
        };
        (controller, events_rx)
    }

    pub fn state(&self) -> &DriveState {
        &self.state
    }

    /// 直接修改状态（仅用于不产生命令的本地设置，例如初始的隐藏文件开关）
    pub fn state_mut(&mut self) -> &mut DriveState {
        &mut self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    /// 处理事件（用户操作或请求结果）
    pub fn handle(&mut self, event: DriveEvent) -> Vec<UiEffect> {
        if event.is_request_completion() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let commands = self.state.handle(event);
        self.execute(commands)
    }

    fn execute(&mut self, commands: Vec<DriveCommand>) -> Vec<UiEffect> {
        let mut effects = Vec::new();

        for command in commands {
            match command {
                DriveCommand::Request(request) => {
                    self.in_flight += 1;
                    executor::spawn_request(
                        &self.runtime,
                        self.api.clone(),
                        self.events_tx.clone(),
                        request,
                    );
                }
                DriveCommand::Alert(kind) => effects.push(UiEffect::Alert(kind)),
                DriveCommand::OpenPreview { dir, file_name } => {
                    match self.api.preview_url(&dir, &file_name) {
                        Ok(url) => effects.push(UiEffect::OpenUrl(url)),
                        Err(e) => {
                            warn!("[Drive] Cannot build preview URL for {}: {}", file_name, e);
                            effects.push(UiEffect::Alert(AlertKind::DownloadFailed { file_name }));
                        }
                    }
                }
                DriveCommand::SaveDownload { file_name, content } => {
                    effects.push(UiEffect::SaveDownload { file_name, content });
                }
            }
        }

        effects
    }

    /// 持续处理结果事件，直到没有未完成的请求
    pub async fn run_until_idle(&mut self, events_rx: &mut UnboundedReceiver<DriveEvent>) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        while self.in_flight > 0 {
            match events_rx.recv().await {
                Some(event) => effects.extend(self.handle(event)),
                None => break,
            }
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DriveError;
    use crate::models::drive::{DirectoryEntry, EntryType, PendingFile};
    use crate::services::drive::ProgressCallback;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 内存中的 Drive，记录所有调用
    #[derive(Default)]
    struct MockApi {
        listings: HashMap<String, Vec<DirectoryEntry>>,
        failing_uploads: Vec<String>,
        fail_delete: bool,
        calls: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn rejected() -> DriveError {
            DriveError::Rejected {
                status: 500,
                message: "mock failure".to_string(),
            }
        }
    }

    #[async_trait]
    impl DriveApi for MockApi {
        async fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, DriveError> {
            self.record(format!("list {}", path));
            Ok(self.listings.get(path).cloned().unwrap_or_default())
        }

        async fn upload(
            &self,
            dir: &str,
            file: &PendingFile,
            on_progress: ProgressCallback,
        ) -> Result<(), DriveError> {
            self.record(format!("upload {} {}", dir, file.name));
            on_progress(file.size / 2, file.size);
            if self.failing_uploads.contains(&file.name) {
                return Err(Self::rejected());
            }
            on_progress(file.size, file.size);
            Ok(())
        }

        async fn download(&self, dir: &str, file_name: &str) -> Result<Vec<u8>, DriveError> {
            self.record(format!("download {} {}", dir, file_name));
            Ok(file_name.as_bytes().to_vec())
        }

        async fn delete(&self, dir: &str, name: &str) -> Result<(), DriveError> {
            self.record(format!("delete {} {}", dir, name));
            if self.fail_delete {
                return Err(Self::rejected());
            }
            Ok(())
        }

        async fn create_folder(&self, dir: &str, name: &str) -> Result<(), DriveError> {
            self.record(format!("create {} {}", dir, name));
            Ok(())
        }

        fn preview_url(&self, dir: &str, file_name: &str) -> Result<String, DriveError> {
            Ok(format!("mock://{}/{}?type=inline", dir, file_name))
        }
    }

    fn controller_with(
        api: Arc<MockApi>,
        start_path: &str,
    ) -> (DriveController, UnboundedReceiver<DriveEvent>) {
        DriveController::new(api, Handle::current(), start_path)
    }

    fn pending(names: &[&str]) -> Vec<PendingFile> {
        names
            .iter()
            .map(|n| PendingFile::new(*n, format!("/tmp/{}", n), 100))
            .collect()
    }

    #[tokio::test]
    async fn initialize_populates_entries() {
        let mut api = MockApi::default();
        api.listings.insert(
            "/x".to_string(),
            vec![
                DirectoryEntry::new("sub", EntryType::Dir),
                DirectoryEntry::new("a.txt", EntryType::File),
            ],
        );
        let api = Arc::new(api);
        let (mut controller, mut rx) = controller_with(api.clone(), "/x");

        controller.handle(DriveEvent::Initialize);
        assert_eq!(controller.in_flight(), 1);
        let effects = controller.run_until_idle(&mut rx).await;

        assert!(effects.is_empty());
        assert!(controller.is_idle());
        assert_eq!(controller.state().entries.len(), 2);
        assert_eq!(controller.state().entries[0].name, "sub");
        assert_eq!(api.calls(), vec!["list /x".to_string()]);
    }

    #[tokio::test]
    async fn upload_batch_isolates_failures_and_refreshes() {
        let api = Arc::new(MockApi {
            failing_uploads: vec!["bad.bin".to_string()],
            ..Default::default()
        });
        let (mut controller, mut rx) = controller_with(api.clone(), "/docs");

        controller.handle(DriveEvent::FilesSelected(pending(&["a.txt", "bad.bin", "c.txt"])));
        controller.handle(DriveEvent::StartUpload);
        assert_eq!(controller.in_flight(), 3);

        let effects = controller.run_until_idle(&mut rx).await;

        assert_eq!(
            effects,
            vec![UiEffect::Alert(AlertKind::UploadFailed {
                file_name: "bad.bin".to_string()
            })]
        );

        let calls = api.calls();
        let uploads: Vec<&String> = calls.iter().filter(|c| c.starts_with("upload ")).collect();
        assert_eq!(uploads.len(), 3);
        assert!(uploads.iter().all(|c| c.starts_with("upload /docs ")));
        assert_eq!(calls.last().map(String::as_str), Some("list /docs"));

        assert!(controller.state().uploads.is_empty());
        assert!(!controller.state().uploading);
    }

    #[tokio::test]
    async fn confirm_delete_without_selection_makes_no_call() {
        let api = Arc::new(MockApi::default());
        let (mut controller, mut rx) = controller_with(api.clone(), "/");

        let effects = controller.handle(DriveEvent::ConfirmDelete);
        controller.run_until_idle(&mut rx).await;

        assert!(effects.is_empty());
        assert_eq!(controller.in_flight(), 0);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_alerts_without_refresh() {
        let api = Arc::new(MockApi {
            fail_delete: true,
            ..Default::default()
        });
        let (mut controller, mut rx) = controller_with(api.clone(), "/x");

        controller.handle(DriveEvent::RequestDelete("old.txt".to_string()));
        controller.handle(DriveEvent::ConfirmDelete);
        let effects = controller.run_until_idle(&mut rx).await;

        assert_eq!(effects, vec![UiEffect::Alert(AlertKind::DeleteFailed)]);
        assert_eq!(api.calls(), vec!["delete /x old.txt".to_string()]);
        assert!(controller.state().delete_confirm.is_open);
    }

    #[tokio::test]
    async fn create_folder_targets_current_dir_then_refreshes() {
        let api = Arc::new(MockApi::default());
        let (mut controller, mut rx) = controller_with(api.clone(), "/x");

        controller.handle(DriveEvent::OpenCreateFolder);
        controller.handle(DriveEvent::SetNewFolderName("newdir".to_string()));
        controller.handle(DriveEvent::ConfirmCreateFolder);
        controller.run_until_idle(&mut rx).await;

        assert_eq!(
            api.calls(),
            vec!["create /x newdir".to_string(), "list /x".to_string()]
        );
        assert!(!controller.state().create_folder.is_open);
        assert!(controller.state().create_folder.name.is_empty());
    }

    #[tokio::test]
    async fn download_and_preview_become_ui_effects() {
        let api = Arc::new(MockApi::default());
        let (mut controller, mut rx) = controller_with(api.clone(), "/pics");

        let effects = controller.handle(DriveEvent::Preview("cat.png".to_string()));
        assert_eq!(
            effects,
            vec![UiEffect::OpenUrl("mock:///pics/cat.png?type=inline".to_string())]
        );

        controller.handle(DriveEvent::Download("cat.png".to_string()));
        let effects = controller.run_until_idle(&mut rx).await;
        assert_eq!(
            effects,
            vec![UiEffect::SaveDownload {
                file_name: "cat.png".to_string(),
                content: b"cat.png".to_vec()
            }]
        );
    }
}
