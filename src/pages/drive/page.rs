// DrivePage 主页面
// 持有 DriveController，把组件事件转为 DriveEvent，并在 UI 线程上消费请求结果

use std::path::PathBuf;
use std::sync::Arc;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::notification::{Notification, NotificationType};
use gpui_component::{ActiveTheme, WindowExt};
use tracing::{error, info, warn};

use crate::components::drive::{
    render_delete_dialog_overlay, render_drive_toolbar, render_file_list,
    render_new_folder_dialog_overlay, render_upload_panel, DeleteDialogEvent, DriveToolbarEvent,
    FileListEvent, NewFolderDialogEvent, NewFolderDialogState, UploadQueueEvent,
};
use crate::i18n::{alert_message, t};
use crate::keybindings::{self, GoBack, GoForward, GoUp, NewFolder, Refresh, ToggleHidden};
use crate::models::drive::{DriveEvent, PendingFile};
use crate::models::settings::{AppSettings, Language};
use crate::services::drive::{DriveClient, DriveRuntime};
use crate::services::storage;
use crate::state::{DriveController, UiEffect};

/// 下载保存位置
enum DownloadTarget {
    /// 下载目录，自动避开重名
    Dir(PathBuf),
    /// 保存对话框选定的文件
    File(PathBuf),
}

pub struct DrivePage {
    /// 接口地址无效时为 None
    controller: Option<DriveController>,
    settings: AppSettings,
    lang: Language,
    new_folder_dialog: Entity<NewFolderDialogState>,
    focus_handle: FocusHandle,
}

impl DrivePage {
    pub fn new(settings: AppSettings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let lang = settings.theme.language;
        let new_folder_dialog = cx.new(|_| NewFolderDialogState::default());
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        let controller = match DriveClient::new(&settings.drive) {
            Ok(client) => {
                let (mut controller, events_rx) = DriveController::new(
                    Arc::new(client),
                    DriveRuntime::global().handle(),
                    &settings.drive.start_path,
                );
                controller.state_mut().show_hidden = settings.drive.show_hidden;
                Self::start_event_loop(events_rx, cx);
                Some(controller)
            }
            Err(e) => {
                error!("[Drive] Cannot create drive client: {}", e);
                None
            }
        };

        let mut page = Self {
            controller,
            settings,
            lang,
            new_folder_dialog,
            focus_handle,
        };
        page.dispatch(DriveEvent::Initialize, cx);
        page
    }

    /// 接收执行器回传的结果事件，逐个应用到状态
    fn start_event_loop(
        mut events_rx: tokio::sync::mpsc::UnboundedReceiver<DriveEvent>,
        cx: &mut Context<Self>,
    ) {
        let page = cx.weak_entity();
        cx.to_async()
            .spawn(async move |async_cx| {
                while let Some(event) = events_rx.recv().await {
                    let updated = async_cx.update(|cx| {
                        page.update(cx, |page, cx| page.dispatch(event, cx))
                    });
                    if !matches!(updated, Ok(Ok(()))) {
                        info!("[Drive] Page closed, stopping event loop");
                        break;
                    }
                }
            })
            .detach();
    }

    /// 处理一个 DriveEvent 并执行产生的 UI 副作用
    fn dispatch(&mut self, event: DriveEvent, cx: &mut Context<Self>) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        let effects = controller.handle(event);

        if !controller.state().create_folder.is_open {
            self.new_folder_dialog.update(cx, |dialog, _| dialog.reset());
        }

        for effect in effects {
            self.apply_effect(effect, cx);
        }
        cx.notify();
    }

    fn apply_effect(&mut self, effect: UiEffect, cx: &mut Context<Self>) {
        match effect {
            UiEffect::Alert(alert) => {
                notify(alert_message(&self.lang, &alert), NotificationType::Error, cx);
            }
            UiEffect::OpenUrl(url) => {
                info!("[Drive] Opening preview: {}", url);
                if let Err(e) = open::that(&url) {
                    warn!("[Drive] Failed to open browser: {}", e);
                    notify(t(&self.lang, "preview.failed").to_string(), NotificationType::Error, cx);
                }
            }
            UiEffect::SaveDownload { file_name, content } => {
                self.save_download(file_name, content, cx);
            }
        }
    }

    /// 保存下载内容：有下载目录时直接写入，否则弹出保存对话框
    ///
    /// 文件写入在后台执行器中进行。
    fn save_download(&self, file_name: String, content: Vec<u8>, cx: &mut Context<Self>) {
        let target_dir = storage::download_dir(&self.settings);
        let lang = self.lang;

        cx.to_async()
            .spawn(async move |async_cx| {
                let target = match target_dir {
                    Some(dir) => DownloadTarget::Dir(dir),
                    None => {
                        let picker = rfd::AsyncFileDialog::new()
                            .set_title(t(&lang, "download.save_title"))
                            .set_file_name(&file_name);

                        let Some(handle) = picker.save_file().await else {
                            info!("[Drive] Save cancelled by user");
                            return;
                        };
                        DownloadTarget::File(handle.path().to_path_buf())
                    }
                };

                let result = async_cx
                    .background_executor()
                    .spawn(async move {
                        match target {
                            DownloadTarget::Dir(dir) => {
                                storage::save_download(&dir, &file_name, &content)
                            }
                            DownloadTarget::File(path) => storage::write_download(path, &content),
                        }
                    })
                    .await;

                let _ = async_cx.update(|cx| match result {
                    Ok(path) => {
                        info!("[Drive] Saved download to {:?}", path);
                        notify(t(&lang, "download.saved").to_string(), NotificationType::Success, cx);
                    }
                    Err(e) => {
                        error!("[Drive] Failed to save download: {:#}", e);
                        notify(t(&lang, "download.save_failed").to_string(), NotificationType::Error, cx);
                    }
                });
            })
            .detach();
    }

    /// 切换隐藏文件显示，并写回设置
    fn toggle_hidden(&mut self, cx: &mut Context<Self>) {
        self.dispatch(DriveEvent::ToggleHidden, cx);
        let Some(controller) = self.controller.as_ref() else {
            return;
        };
        self.settings.drive.show_hidden = controller.state().show_hidden;
        if let Err(e) = storage::save_settings(&self.settings) {
            error!("[Drive] Failed to save settings: {:#}", e);
        }
    }

    /// 打开系统文件选择对话框
    fn pick_files(&self, cx: &mut Context<Self>) {
        let page = cx.weak_entity();
        let title = t(&self.lang, "upload.picker_title");

        cx.to_async()
            .spawn(async move |async_cx| {
                let Some(handles) = rfd::AsyncFileDialog::new().set_title(title).pick_files().await
                else {
                    info!("[Upload] File selection cancelled by user");
                    return;
                };

                let paths: Vec<PathBuf> = handles.iter().map(|h| h.path().to_path_buf()).collect();
                let _ = async_cx.update(|cx| page.update(cx, |page, cx| page.add_files(paths, cx)));
            })
            .detach();
    }

    /// 把本地路径加入上传队列（目录和无法读取的文件会被跳过）
    fn add_files(&mut self, paths: Vec<PathBuf>, cx: &mut Context<Self>) {
        let files: Vec<PendingFile> = paths
            .iter()
            .filter_map(|path| match PendingFile::from_path(path) {
                Ok(file) => Some(file),
                Err(e) => {
                    warn!("[Upload] Skipping {:?}: {}", path, e);
                    None
                }
            })
            .collect();

        if !files.is_empty() {
            self.dispatch(DriveEvent::FilesSelected(files), cx);
        }
    }

    // ========================================================================
    // 组件事件
    // ========================================================================

    fn on_toolbar_event(&mut self, event: DriveToolbarEvent, cx: &mut Context<Self>) {
        let event = match event {
            DriveToolbarEvent::GoBack => DriveEvent::GoBack,
            DriveToolbarEvent::GoForward => DriveEvent::GoForward,
            DriveToolbarEvent::GoUp => DriveEvent::GoUp,
            DriveToolbarEvent::Refresh => DriveEvent::Refresh,
            DriveToolbarEvent::NewFolder => DriveEvent::OpenCreateFolder,
            DriveToolbarEvent::ToggleHidden => return self.toggle_hidden(cx),
            DriveToolbarEvent::NavigateTo(path) => DriveEvent::NavigateTo(path),
        };
        self.dispatch(event, cx);
    }

    fn on_file_list_event(&mut self, event: FileListEvent, cx: &mut Context<Self>) {
        let event = match event {
            FileListEvent::OpenDirectory(name) => DriveEvent::OpenDirectory(name),
            FileListEvent::Preview(name) => DriveEvent::Preview(name),
            FileListEvent::Download(name) => DriveEvent::Download(name),
            FileListEvent::Delete(name) => DriveEvent::RequestDelete(name),
        };
        self.dispatch(event, cx);
    }

    fn on_upload_event(&mut self, event: UploadQueueEvent, cx: &mut Context<Self>) {
        match event {
            UploadQueueEvent::PickFiles => self.pick_files(cx),
            UploadQueueEvent::FilesDropped(paths) => self.add_files(paths, cx),
            UploadQueueEvent::StartUpload => self.dispatch(DriveEvent::StartUpload, cx),
        }
    }

    fn on_new_folder_event(&mut self, event: NewFolderDialogEvent, cx: &mut Context<Self>) {
        match event {
            NewFolderDialogEvent::Cancel => self.dispatch(DriveEvent::CancelCreateFolder, cx),
            NewFolderDialogEvent::Create(name) => {
                self.dispatch(DriveEvent::SetNewFolderName(name), cx);
                self.dispatch(DriveEvent::ConfirmCreateFolder, cx);
            }
        }
    }

    fn on_delete_event(&mut self, event: DeleteDialogEvent, cx: &mut Context<Self>) {
        let event = match event {
            DeleteDialogEvent::Cancel => DriveEvent::CancelDelete,
            DeleteDialogEvent::Confirm => DriveEvent::ConfirmDelete,
        };
        self.dispatch(event, cx);
    }
}

/// 推送通知（延迟到当前事件处理结束后，窗口此时可用）
fn notify(message: String, kind: NotificationType, cx: &mut App) {
    cx.defer(move |cx| {
        if let Some(window) = cx.active_window() {
            let _ = cx.update_window(window, |_, window, cx| {
                let notification = Notification::new()
                    .message(message)
                    .with_type(kind)
                    .w_48()
                    .py_2();
                window.push_notification(notification, cx);
            });
        }
    });
}

/// 把组件回调转发到页面实体
fn forward<E: 'static>(
    page: &Entity<DrivePage>,
    handler: fn(&mut DrivePage, E, &mut Context<DrivePage>),
) -> impl Fn(E, &mut App) + Clone + 'static {
    let page = page.clone();
    move |event, cx| page.update(cx, |page, cx| handler(page, event, cx))
}

impl Render for DrivePage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let lang = self.lang;
        let folders_first = self.settings.drive.folders_first;
        let page = cx.entity();
        let state = self.controller.as_ref().map(|c| c.state());

        let create_folder_open = state.map(|s| s.create_folder.is_open).unwrap_or(false);
        if create_folder_open {
            self.new_folder_dialog
                .update(cx, |dialog, cx| dialog.ensure_input_created(lang, window, cx));
        }

        let content = div()
            .flex_1()
            .min_h(px(0.))
            .p_4()
            .flex()
            .flex_col()
            .gap_4()
            .child(render_upload_panel(
                state,
                lang,
                forward(&page, Self::on_upload_event),
                cx,
            ))
            .child(div().flex_1().min_h(px(0.)).child(render_file_list(
                state,
                lang,
                folders_first,
                forward(&page, Self::on_file_list_event),
                cx,
            )));

        div()
            .id("drive-page")
            .key_context(keybindings::DRIVE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, _: &Refresh, _, cx| this.dispatch(DriveEvent::Refresh, cx)))
            .on_action(cx.listener(|this, _: &GoBack, _, cx| this.dispatch(DriveEvent::GoBack, cx)))
            .on_action(cx.listener(|this, _: &GoForward, _, cx| this.dispatch(DriveEvent::GoForward, cx)))
            .on_action(cx.listener(|this, _: &GoUp, _, cx| this.dispatch(DriveEvent::GoUp, cx)))
            .on_action(cx.listener(|this, _: &NewFolder, _, cx| {
                this.dispatch(DriveEvent::OpenCreateFolder, cx)
            }))
            .on_action(cx.listener(|this, _: &ToggleHidden, _, cx| this.toggle_hidden(cx)))
            .relative()
            .size_full()
            .bg(cx.theme().background)
            .flex()
            .flex_col()
            .child(render_drive_toolbar(
                state,
                lang,
                forward(&page, Self::on_toolbar_event),
                cx,
            ))
            .child(content)
            .when_some(state.filter(|s| s.create_folder.is_open), |el, s| {
                el.child(render_new_folder_dialog_overlay(
                    &s.create_folder,
                    self.new_folder_dialog.clone(),
                    lang,
                    forward(&page, Self::on_new_folder_event),
                    cx,
                ))
            })
            .when_some(state.filter(|s| s.delete_confirm.is_open), |el, s| {
                el.child(render_delete_dialog_overlay(
                    &s.delete_confirm,
                    lang,
                    forward(&page, Self::on_delete_event),
                    cx,
                ))
            })
    }
}
