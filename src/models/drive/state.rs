// Drive 状态管理
// 显式状态结构 + 事件处理：handle 只修改自身并返回需要执行的命令，不直接发起请求

use std::time::Duration;

use tracing::{debug, info, warn};

use super::types::{get_parent_path, join_path, normalize_path, DirectoryEntry, NavigationHistory};
use super::upload::{PendingFile, PendingUpload, UploadStatus};

/// 需要提示给用户的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertKind {
    UploadFailed { file_name: String },
    DeleteFailed,
    CreateFolderFailed,
    DownloadFailed { file_name: String },
}

/// 对远程 Drive 发起的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveRequest {
    List { path: String, request: u64 },
    Upload { id: String, dir: String, file: PendingFile },
    Download { dir: String, file_name: String },
    Delete { dir: String, name: String },
    CreateFolder { dir: String, name: String },
}

/// 状态机输出的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveCommand {
    /// 远程请求（由控制器在 tokio 运行时中执行）
    Request(DriveRequest),
    /// 弹出错误提示
    Alert(AlertKind),
    /// 用系统浏览器预览文件
    OpenPreview { dir: String, file_name: String },
    /// 保存下载好的内容
    SaveDownload { file_name: String, content: Vec<u8> },
}

/// 输入事件（用户操作 + 请求结果）
#[derive(Debug, Clone)]
pub enum DriveEvent {
    // ------------------------------------------------------------------
    // 导航
    // ------------------------------------------------------------------
    /// 首次加载当前目录
    Initialize,
    /// 点击目录条目
    OpenDirectory(String),
    /// 面包屑 / 地址跳转
    NavigateTo(String),
    GoBack,
    GoForward,
    GoUp,
    Refresh,
    ToggleHidden,
    ListingLoaded {
        path: String,
        request: u64,
        entries: Vec<DirectoryEntry>,
    },
    ListingFailed {
        path: String,
        request: u64,
        error: String,
    },

    // ------------------------------------------------------------------
    // 上传
    // ------------------------------------------------------------------
    /// 拖放或选择文件
    FilesSelected(Vec<PendingFile>),
    StartUpload,
    UploadProgress {
        id: String,
        loaded: u64,
        total: u64,
        elapsed: Duration,
    },
    UploadFinished {
        id: String,
        result: Result<(), String>,
    },

    // ------------------------------------------------------------------
    // 下载 / 预览
    // ------------------------------------------------------------------
    Download(String),
    DownloadFinished {
        file_name: String,
        result: Result<Vec<u8>, String>,
    },
    Preview(String),

    // ------------------------------------------------------------------
    // 删除
    // ------------------------------------------------------------------
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    DeleteFinished {
        name: String,
        result: Result<(), String>,
    },

    // ------------------------------------------------------------------
    // 新建文件夹
    // ------------------------------------------------------------------
    OpenCreateFolder,
    SetNewFolderName(String),
    CancelCreateFolder,
    ConfirmCreateFolder,
    CreateFolderFinished {
        name: String,
        result: Result<(), String>,
    },
}

impl DriveEvent {
    /// 是否是某个远程请求的最终结果（每个请求恰好产生一个）
    pub fn is_request_completion(&self) -> bool {
        matches!(
            self,
            DriveEvent::ListingLoaded { .. }
                | DriveEvent::ListingFailed { .. }
                | DriveEvent::UploadFinished { .. }
                | DriveEvent::DownloadFinished { .. }
                | DriveEvent::DeleteFinished { .. }
                | DriveEvent::CreateFolderFinished { .. }
        )
    }
}

/// 新建文件夹对话框状态
#[derive(Debug, Clone, Default)]
pub struct CreateFolderDialog {
    pub is_open: bool,
    /// 输入的文件夹名称
    pub name: String,
    /// 校验错误（i18n key）
    pub error_message: Option<&'static str>,
    /// 是否正在创建中
    pub is_creating: bool,
}

impl CreateFolderDialog {
    fn open(&mut self) {
        self.is_open = true;
        self.error_message = None;
        self.is_creating = false;
    }

    fn close(&mut self) {
        self.is_open = false;
        self.name.clear();
        self.error_message = None;
        self.is_creating = false;
    }

    /// 校验名称，返回去除首尾空白后的名称
    fn validate(&mut self) -> Option<String> {
        let name = self.name.trim();
        if name.is_empty() {
            self.error_message = Some("new_folder.error_empty");
            return None;
        }
        if name.contains('/') || name.contains('\0') {
            self.error_message = Some("new_folder.error_invalid");
            return None;
        }
        self.error_message = None;
        Some(name.to_string())
    }
}

/// 删除确认对话框状态
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirm {
    pub is_open: bool,
    pub item_to_delete: Option<String>,
    pub is_deleting: bool,
}

/// Drive 浏览状态（整个页面唯一的数据源）
#[derive(Debug, Clone, Default)]
pub struct DriveState {
    /// 当前路径（唯一数据源）
    pub current_path: String,

    /// 当前目录的条目
    pub entries: Vec<DirectoryEntry>,
    /// 条目版本号（用于 UI 增量同步）
    pub entries_revision: u64,

    /// 导航历史
    pub history: NavigationHistory,

    /// 是否正在加载
    pub loading: bool,
    /// 最近一次目录请求的编号，只接受与之匹配的结果
    pub listing_request: u64,

    /// 是否显示隐藏文件
    pub show_hidden: bool,

    /// 待上传队列
    pub uploads: Vec<PendingUpload>,
    /// 是否有一批上传正在进行
    pub uploading: bool,

    pub create_folder: CreateFolderDialog,
    pub delete_confirm: DeleteConfirm,
}

impl DriveState {
    /// 创建新的状态
    pub fn new(start_path: &str) -> Self {
        Self {
            current_path: normalize_path(start_path),
            show_hidden: true,
            ..Default::default()
        }
    }

    /// 处理一个事件，返回需要执行的命令
    pub fn handle(&mut self, event: DriveEvent) -> Vec<DriveCommand> {
        match event {
            DriveEvent::Initialize => self.fetch_current(),
            DriveEvent::OpenDirectory(name) => {
                let path = join_path(&self.current_path, &name);
                info!("[Drive] Open directory: {}", path);
                self.navigate_to(path)
            }
            DriveEvent::NavigateTo(path) => self.navigate_to(path),
            DriveEvent::GoBack => match self.history.go_back(self.current_path.clone()) {
                Some(prev) => self.set_path(prev),
                None => Vec::new(),
            },
            DriveEvent::GoForward => match self.history.go_forward(self.current_path.clone()) {
                Some(next) => self.set_path(next),
                None => Vec::new(),
            },
            DriveEvent::GoUp => {
                let parent = get_parent_path(&self.current_path);
                self.navigate_to(parent)
            }
            DriveEvent::Refresh => self.fetch_current(),
            DriveEvent::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                self.entries_revision = self.entries_revision.wrapping_add(1);
                Vec::new()
            }
            DriveEvent::ListingLoaded {
                path,
                request,
                entries,
            } => {
                self.apply_listing(path, request, entries);
                Vec::new()
            }
            DriveEvent::ListingFailed {
                path,
                request,
                error,
            } => {
                // 列表失败只记录日志，保留旧列表
                warn!("[Drive] Failed to fetch directories from {}: {}", path, error);
                if request == self.listing_request {
                    self.loading = false;
                }
                Vec::new()
            }

            DriveEvent::FilesSelected(files) => {
                info!("[Upload] {} file(s) added to queue", files.len());
                self.uploads
                    .extend(files.into_iter().map(PendingUpload::new));
                Vec::new()
            }
            DriveEvent::StartUpload => self.start_upload(),
            DriveEvent::UploadProgress {
                id,
                loaded,
                total,
                elapsed,
            } => {
                if let Some(item) = self.uploads.iter_mut().find(|u| u.id == id) {
                    item.record_progress(loaded, total, elapsed);
                }
                Vec::new()
            }
            DriveEvent::UploadFinished { id, result } => self.finish_upload(id, result),

            DriveEvent::Download(file_name) => {
                vec![DriveCommand::Request(DriveRequest::Download {
                    dir: self.current_path.clone(),
                    file_name,
                })]
            }
            DriveEvent::DownloadFinished { file_name, result } => match result {
                Ok(content) => {
                    info!("[Drive] Downloaded {} ({} bytes)", file_name, content.len());
                    vec![DriveCommand::SaveDownload { file_name, content }]
                }
                Err(e) => {
                    warn!("[Drive] Failed to download {}: {}", file_name, e);
                    vec![DriveCommand::Alert(AlertKind::DownloadFailed { file_name })]
                }
            },
            DriveEvent::Preview(file_name) => vec![DriveCommand::OpenPreview {
                dir: self.current_path.clone(),
                file_name,
            }],

            DriveEvent::RequestDelete(name) => {
                self.delete_confirm.item_to_delete = Some(name);
                self.delete_confirm.is_open = true;
                Vec::new()
            }
            DriveEvent::CancelDelete => {
                if !self.delete_confirm.is_deleting {
                    self.delete_confirm = DeleteConfirm::default();
                }
                Vec::new()
            }
            DriveEvent::ConfirmDelete => self.confirm_delete(),
            DriveEvent::DeleteFinished { name, result } => {
                self.delete_confirm.is_deleting = false;
                match result {
                    Ok(()) => {
                        info!("[Drive] Deleted: {}", name);
                        self.delete_confirm = DeleteConfirm::default();
                        self.fetch_current()
                    }
                    Err(e) => {
                        warn!("[Drive] Failed to delete {}: {}", name, e);
                        vec![DriveCommand::Alert(AlertKind::DeleteFailed)]
                    }
                }
            }

            DriveEvent::OpenCreateFolder => {
                self.create_folder.open();
                Vec::new()
            }
            DriveEvent::SetNewFolderName(name) => {
                self.create_folder.name = name;
                Vec::new()
            }
            DriveEvent::CancelCreateFolder => {
                if !self.create_folder.is_creating {
                    self.create_folder.close();
                }
                Vec::new()
            }
            DriveEvent::ConfirmCreateFolder => self.confirm_create_folder(),
            DriveEvent::CreateFolderFinished { name, result } => {
                self.create_folder.is_creating = false;
                match result {
                    Ok(()) => {
                        info!("[Drive] Created folder: {}", name);
                        self.create_folder.close();
                        self.fetch_current()
                    }
                    Err(e) => {
                        warn!("[Drive] Failed to create folder {}: {}", name, e);
                        vec![DriveCommand::Alert(AlertKind::CreateFolderFailed)]
                    }
                }
            }
        }
    }

    // ========================================================================
    // 导航
    // ========================================================================

    /// 导航到指定路径（记录历史）
    fn navigate_to(&mut self, path: String) -> Vec<DriveCommand> {
        let path = normalize_path(&path);
        if path == self.current_path {
            return Vec::new();
        }
        self.history.push(self.current_path.clone());
        self.set_path(path)
    }

    /// 设置当前路径（不记录历史）
    fn set_path(&mut self, path: String) -> Vec<DriveCommand> {
        self.current_path = path;
        self.fetch_current()
    }

    fn fetch_current(&mut self) -> Vec<DriveCommand> {
        debug!("[Drive] Fetching directories for {}", self.current_path);
        self.loading = true;
        self.listing_request = self.listing_request.wrapping_add(1);
        vec![DriveCommand::Request(DriveRequest::List {
            path: self.current_path.clone(),
            request: self.listing_request,
        })]
    }

    fn apply_listing(&mut self, path: String, request: u64, entries: Vec<DirectoryEntry>) {
        // 同一路径的旧请求也可能晚到，按请求编号判断
        if request != self.listing_request {
            debug!(
                "[Drive] Dropping stale listing #{} for {} (current #{} {})",
                request, path, self.listing_request, self.current_path
            );
            return;
        }
        info!("[Drive] Loaded {} entries from {}", entries.len(), path);
        self.entries = entries;
        self.entries_revision = self.entries_revision.wrapping_add(1);
        self.loading = false;
    }

    /// 是否可以后退
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// 是否可以前进
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// 是否可以向上导航
    pub fn can_go_up(&self) -> bool {
        self.current_path != "/"
    }

    /// 当前应显示的条目
    pub fn visible_entries(&self) -> Vec<&DirectoryEntry> {
        self.entries
            .iter()
            .filter(|e| self.show_hidden || !e.is_hidden())
            .collect()
    }

    // ========================================================================
    // 上传
    // ========================================================================

    fn start_upload(&mut self) -> Vec<DriveCommand> {
        if self.uploading {
            debug!("[Upload] Upload already in progress, ignoring trigger");
            return Vec::new();
        }

        let dir = self.current_path.clone();
        let commands: Vec<DriveCommand> = self
            .uploads
            .iter_mut()
            .filter(|u| u.status == UploadStatus::NotStarted)
            .map(|u| {
                u.start();
                DriveCommand::Request(DriveRequest::Upload {
                    id: u.id.clone(),
                    dir: dir.clone(),
                    file: u.file.clone(),
                })
            })
            .collect();

        if commands.is_empty() {
            return commands;
        }

        info!("[Upload] Uploading {} file(s) to {}", commands.len(), dir);
        self.uploading = true;
        commands
    }

    fn finish_upload(&mut self, id: String, result: Result<(), String>) -> Vec<DriveCommand> {
        let mut commands = Vec::new();

        if let Some(item) = self.uploads.iter_mut().find(|u| u.id == id) {
            match result {
                Ok(()) => {
                    info!("[Upload] Uploaded: {}", item.file.name);
                    item.set_completed();
                }
                Err(e) => {
                    warn!("[Upload] Failed to upload {}: {}", item.file.name, e);
                    item.set_failed();
                    commands.push(DriveCommand::Alert(AlertKind::UploadFailed {
                        file_name: item.file.name.clone(),
                    }));
                }
            }
        }

        let still_running = self
            .uploads
            .iter()
            .any(|u| u.status == UploadStatus::Uploading);

        if self.uploading && !still_running {
            // 本批全部结束：清空已处理的文件并刷新列表
            self.uploads.retain(|u| u.status == UploadStatus::NotStarted);
            self.uploading = false;
            info!("[Upload] Batch settled, refreshing directory");
            commands.extend(self.fetch_current());
        }

        commands
    }

    // ========================================================================
    // 删除 / 新建文件夹
    // ========================================================================

    fn confirm_delete(&mut self) -> Vec<DriveCommand> {
        if self.delete_confirm.is_deleting {
            return Vec::new();
        }
        let Some(name) = self.delete_confirm.item_to_delete.clone() else {
            return Vec::new();
        };

        info!("[Drive] Delete: {} in {}", name, self.current_path);
        self.delete_confirm.is_deleting = true;
        vec![DriveCommand::Request(DriveRequest::Delete {
            dir: self.current_path.clone(),
            name,
        })]
    }

    fn confirm_create_folder(&mut self) -> Vec<DriveCommand> {
        if self.create_folder.is_creating {
            return Vec::new();
        }
        let Some(name) = self.create_folder.validate() else {
            return Vec::new();
        };

        info!("[Drive] Create folder: {} in {}", name, self.current_path);
        self.create_folder.is_creating = true;
        vec![DriveCommand::Request(DriveRequest::CreateFolder {
            dir: self.current_path.clone(),
            name,
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drive::EntryType;

    fn requests(commands: &[DriveCommand]) -> Vec<&DriveRequest> {
        commands
            .iter()
            .filter_map(|c| match c {
                DriveCommand::Request(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    fn list_of(path: &str, request: u64) -> DriveCommand {
        DriveCommand::Request(DriveRequest::List {
            path: path.to_string(),
            request,
        })
    }

    fn files(names: &[&str]) -> Vec<PendingFile> {
        names
            .iter()
            .map(|n| PendingFile::new(*n, format!("/tmp/{}", n), 10))
            .collect()
    }

    #[test]
    fn initialize_fetches_current_path() {
        let mut state = DriveState::new("/x");
        let commands = state.handle(DriveEvent::Initialize);
        assert_eq!(commands, vec![list_of("/x", 1)]);
        assert!(state.loading);
    }

    #[test]
    fn open_directory_appends_name_and_records_history() {
        let mut state = DriveState::new("/a");
        let commands = state.handle(DriveEvent::OpenDirectory("b".to_string()));

        assert_eq!(state.current_path, "/a/b");
        assert_eq!(commands, vec![list_of("/a/b", 1)]);
        assert_eq!(state.history.back_stack, vec!["/a".to_string()]);
    }

    #[test]
    fn navigating_to_current_path_is_noop() {
        let mut state = DriveState::new("/a");
        assert!(state.handle(DriveEvent::NavigateTo("/a/".to_string())).is_empty());
        assert!(!state.can_go_back());
    }

    #[test]
    fn back_and_forward_refetch() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::NavigateTo("/a/b".to_string()));

        assert_eq!(state.handle(DriveEvent::GoBack), vec![list_of("/", 2)]);
        assert_eq!(state.current_path, "/");
        assert_eq!(state.handle(DriveEvent::GoForward), vec![list_of("/a/b", 3)]);
        assert_eq!(state.current_path, "/a/b");
        assert!(state.handle(DriveEvent::GoForward).is_empty());
    }

    #[test]
    fn go_up_at_root_is_noop() {
        let mut state = DriveState::new("/");
        assert!(state.handle(DriveEvent::GoUp).is_empty());

        let mut state = DriveState::new("/a/b");
        assert_eq!(state.handle(DriveEvent::GoUp), vec![list_of("/a", 1)]);
    }

    #[test]
    fn listing_replaces_entries_wholesale() {
        let mut state = DriveState::new("/");
        state.entries = vec![DirectoryEntry::new("old", EntryType::File)];
        state.handle(DriveEvent::Refresh);

        state.handle(DriveEvent::ListingLoaded {
            path: "/".to_string(),
            request: state.listing_request,
            entries: vec![DirectoryEntry::new("new", EntryType::Dir)],
        });

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].name, "new");
        assert!(!state.loading);
    }

    #[test]
    fn stale_listing_is_dropped() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::NavigateTo("/b".to_string()));

        state.handle(DriveEvent::ListingLoaded {
            path: "/".to_string(),
            request: 0,
            entries: vec![DirectoryEntry::new("from-root", EntryType::File)],
        });

        assert!(state.entries.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn older_listing_of_same_path_does_not_overwrite_newer() {
        let mut state = DriveState::new("/x");
        state.handle(DriveEvent::Initialize);
        let initial = state.listing_request;

        state.handle(DriveEvent::OpenCreateFolder);
        state.handle(DriveEvent::SetNewFolderName("newdir".to_string()));
        state.handle(DriveEvent::ConfirmCreateFolder);
        state.handle(DriveEvent::CreateFolderFinished {
            name: "newdir".to_string(),
            result: Ok(()),
        });
        let refreshed = state.listing_request;
        assert_ne!(initial, refreshed);

        state.handle(DriveEvent::ListingLoaded {
            path: "/x".to_string(),
            request: refreshed,
            entries: vec![DirectoryEntry::new("newdir", EntryType::Dir)],
        });
        state.handle(DriveEvent::ListingLoaded {
            path: "/x".to_string(),
            request: initial,
            entries: Vec::new(),
        });

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].name, "newdir");
        assert!(!state.loading);
    }

    #[test]
    fn late_failure_of_older_listing_keeps_loading() {
        let mut state = DriveState::new("/x");
        state.handle(DriveEvent::Initialize);
        let initial = state.listing_request;
        state.handle(DriveEvent::Refresh);

        state.handle(DriveEvent::ListingFailed {
            path: "/x".to_string(),
            request: initial,
            error: "timeout".to_string(),
        });

        assert!(state.loading);
    }

    #[test]
    fn failed_listing_keeps_previous_entries() {
        let mut state = DriveState::new("/");
        state.entries = vec![DirectoryEntry::new("keep", EntryType::File)];
        state.handle(DriveEvent::Initialize);

        let commands = state.handle(DriveEvent::ListingFailed {
            path: "/".to_string(),
            request: state.listing_request,
            error: "connection refused".to_string(),
        });

        assert!(commands.is_empty());
        assert_eq!(state.entries[0].name, "keep");
        assert!(!state.loading);
    }

    #[test]
    fn upload_issues_one_request_per_file() {
        let mut state = DriveState::new("/docs");
        state.handle(DriveEvent::FilesSelected(files(&["a", "b"])));
        state.handle(DriveEvent::FilesSelected(files(&["c"])));

        let commands = state.handle(DriveEvent::StartUpload);
        let reqs = requests(&commands);

        assert_eq!(reqs.len(), 3);
        for req in reqs {
            match req {
                DriveRequest::Upload { dir, .. } => assert_eq!(dir, "/docs"),
                other => panic!("unexpected request {:?}", other),
            }
        }
        assert!(state.uploading);
        assert!(state.handle(DriveEvent::StartUpload).is_empty());
    }

    #[test]
    fn start_upload_with_empty_queue_is_noop() {
        let mut state = DriveState::new("/");
        assert!(state.handle(DriveEvent::StartUpload).is_empty());
        assert!(!state.uploading);
    }

    #[test]
    fn single_failure_marks_only_that_file() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::FilesSelected(files(&["a", "b", "c"])));
        state.handle(DriveEvent::StartUpload);
        let ids: Vec<String> = state.uploads.iter().map(|u| u.id.clone()).collect();

        state.handle(DriveEvent::UploadFinished {
            id: ids[0].clone(),
            result: Ok(()),
        });
        let commands = state.handle(DriveEvent::UploadFinished {
            id: ids[1].clone(),
            result: Err("500".to_string()),
        });

        assert_eq!(
            commands,
            vec![DriveCommand::Alert(AlertKind::UploadFailed {
                file_name: "b".to_string()
            })]
        );
        assert_eq!(state.uploads[0].status, UploadStatus::Completed);
        assert_eq!(state.uploads[1].speed_label().as_deref(), Some("Error"));
        assert_eq!(state.uploads[2].status, UploadStatus::Uploading);

        let commands = state.handle(DriveEvent::UploadFinished {
            id: ids[2].clone(),
            result: Ok(()),
        });

        assert_eq!(commands, vec![list_of("/", 1)]);
        assert!(state.uploads.is_empty());
        assert!(!state.uploading);
    }

    #[test]
    fn files_added_during_batch_survive_clear() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::FilesSelected(files(&["a"])));
        state.handle(DriveEvent::StartUpload);
        let id = state.uploads[0].id.clone();

        state.handle(DriveEvent::FilesSelected(files(&["late"])));
        state.handle(DriveEvent::UploadFinished {
            id,
            result: Ok(()),
        });

        assert_eq!(state.uploads.len(), 1);
        assert_eq!(state.uploads[0].file.name, "late");
        assert_eq!(state.uploads[0].status, UploadStatus::NotStarted);
    }

    #[test]
    fn upload_progress_updates_matching_item() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::FilesSelected(files(&["a"])));
        state.handle(DriveEvent::StartUpload);
        let id = state.uploads[0].id.clone();

        state.handle(DriveEvent::UploadProgress {
            id,
            loaded: 5,
            total: 10,
            elapsed: Duration::from_secs(1),
        });

        assert_eq!(state.uploads[0].percent, 50);
    }

    #[test]
    fn confirm_delete_without_selection_sends_nothing() {
        let mut state = DriveState::new("/");
        assert!(state.handle(DriveEvent::ConfirmDelete).is_empty());
        assert!(!state.delete_confirm.is_deleting);
    }

    #[test]
    fn delete_success_closes_dialog_and_refreshes() {
        let mut state = DriveState::new("/x");
        state.handle(DriveEvent::RequestDelete("old.txt".to_string()));
        assert!(state.delete_confirm.is_open);

        let commands = state.handle(DriveEvent::ConfirmDelete);
        assert_eq!(
            commands,
            vec![DriveCommand::Request(DriveRequest::Delete {
                dir: "/x".to_string(),
                name: "old.txt".to_string()
            })]
        );

        let commands = state.handle(DriveEvent::DeleteFinished {
            name: "old.txt".to_string(),
            result: Ok(()),
        });
        assert_eq!(commands, vec![list_of("/x", 1)]);
        assert!(!state.delete_confirm.is_open);
        assert_eq!(state.delete_confirm.item_to_delete, None);
    }

    #[test]
    fn delete_failure_alerts_and_keeps_state() {
        let mut state = DriveState::new("/");
        state.entries = vec![DirectoryEntry::new("old.txt", EntryType::File)];
        state.handle(DriveEvent::RequestDelete("old.txt".to_string()));
        state.handle(DriveEvent::ConfirmDelete);

        let commands = state.handle(DriveEvent::DeleteFinished {
            name: "old.txt".to_string(),
            result: Err("403".to_string()),
        });

        assert_eq!(commands, vec![DriveCommand::Alert(AlertKind::DeleteFailed)]);
        assert!(state.delete_confirm.is_open);
        assert_eq!(state.delete_confirm.item_to_delete.as_deref(), Some("old.txt"));
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn create_folder_targets_current_path() {
        let mut state = DriveState::new("/x");
        state.handle(DriveEvent::OpenCreateFolder);
        state.handle(DriveEvent::SetNewFolderName("newdir".to_string()));

        let commands = state.handle(DriveEvent::ConfirmCreateFolder);
        assert_eq!(
            commands,
            vec![DriveCommand::Request(DriveRequest::CreateFolder {
                dir: "/x".to_string(),
                name: "newdir".to_string()
            })]
        );

        let commands = state.handle(DriveEvent::CreateFolderFinished {
            name: "newdir".to_string(),
            result: Ok(()),
        });
        assert_eq!(commands, vec![list_of("/x", 1)]);
        assert!(!state.create_folder.is_open);
        assert!(state.create_folder.name.is_empty());
    }

    #[test]
    fn invalid_folder_name_sends_nothing() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::OpenCreateFolder);

        state.handle(DriveEvent::SetNewFolderName("   ".to_string()));
        assert!(state.handle(DriveEvent::ConfirmCreateFolder).is_empty());
        assert_eq!(state.create_folder.error_message, Some("new_folder.error_empty"));

        state.handle(DriveEvent::SetNewFolderName("a/b".to_string()));
        assert!(state.handle(DriveEvent::ConfirmCreateFolder).is_empty());
        assert_eq!(state.create_folder.error_message, Some("new_folder.error_invalid"));
        assert!(state.create_folder.is_open);
    }

    #[test]
    fn create_folder_failure_keeps_dialog_open() {
        let mut state = DriveState::new("/");
        state.handle(DriveEvent::OpenCreateFolder);
        state.handle(DriveEvent::SetNewFolderName("dup".to_string()));
        state.handle(DriveEvent::ConfirmCreateFolder);

        let commands = state.handle(DriveEvent::CreateFolderFinished {
            name: "dup".to_string(),
            result: Err("409".to_string()),
        });

        assert_eq!(commands, vec![DriveCommand::Alert(AlertKind::CreateFolderFailed)]);
        assert!(state.create_folder.is_open);
        assert_eq!(state.create_folder.name, "dup");
        assert!(!state.create_folder.is_creating);
    }

    #[test]
    fn download_and_preview_use_current_dir() {
        let mut state = DriveState::new("/pics");
        assert_eq!(
            state.handle(DriveEvent::Preview("cat.png".to_string())),
            vec![DriveCommand::OpenPreview {
                dir: "/pics".to_string(),
                file_name: "cat.png".to_string()
            }]
        );

        let commands = state.handle(DriveEvent::DownloadFinished {
            file_name: "cat.png".to_string(),
            result: Err("timeout".to_string()),
        });
        assert_eq!(
            commands,
            vec![DriveCommand::Alert(AlertKind::DownloadFailed {
                file_name: "cat.png".to_string()
            })]
        );
    }

    #[test]
    fn hidden_entries_filtered_when_toggled() {
        let mut state = DriveState::new("/");
        state.entries = vec![
            DirectoryEntry::new(".env", EntryType::File),
            DirectoryEntry::new("main.rs", EntryType::File),
        ];
        assert_eq!(state.visible_entries().len(), 2);

        state.handle(DriveEvent::ToggleHidden);
        let visible = state.visible_entries();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "main.rs");
    }
}
