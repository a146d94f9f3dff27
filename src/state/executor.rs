// 请求执行器 - 在 Tokio 运行时中执行 DriveRequest，结果以事件形式回传

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::models::drive::{DriveEvent, DriveRequest};
use crate::services::drive::{DriveApi, ProgressCallback};

/// 在运行时中执行请求，完成后发送结果事件
pub fn spawn_request(
    handle: &Handle,
    api: Arc<dyn DriveApi>,
    events_tx: UnboundedSender<DriveEvent>,
    request: DriveRequest,
) {
    handle.spawn(async move {
        let event = run_request(api.as_ref(), &events_tx, request).await;
        if events_tx.send(event).is_err() {
            debug!("[Drive] Event receiver dropped, discarding result");
        }
    });
}

/// 执行单个请求，返回对应的完成事件
///
/// 上传过程中的进度事件直接通过 `events_tx` 发送，耗时从该文件自己的请求开始计算。
pub async fn run_request(
    api: &dyn DriveApi,
    events_tx: &UnboundedSender<DriveEvent>,
    request: DriveRequest,
) -> DriveEvent {
    match request {
        DriveRequest::List { path, request } => match api.list(&path).await {
            Ok(entries) => DriveEvent::ListingLoaded {
                path,
                request,
                entries,
            },
            Err(e) => {
                if !e.is_rejected() {
                    debug!("[Drive] Listing {} failed without a server status: {:?}", path, e);
                }
                DriveEvent::ListingFailed {
                    path,
                    request,
                    error: e.to_string(),
                }
            }
        },
        DriveRequest::Upload { id, dir, file } => {
            let started = Instant::now();
            let progress_tx = events_tx.clone();
            let progress_id = id.clone();
            let on_progress: ProgressCallback = Arc::new(move |loaded, total| {
                let _ = progress_tx.send(DriveEvent::UploadProgress {
                    id: progress_id.clone(),
                    loaded,
                    total,
                    elapsed: started.elapsed(),
                });
            });

            let result = api
                .upload(&dir, &file, on_progress)
                .await
                .map_err(|e| e.to_string());
            DriveEvent::UploadFinished { id, result }
        }
        DriveRequest::Download { dir, file_name } => {
            let result = api
                .download(&dir, &file_name)
                .await
                .map_err(|e| e.to_string());
            DriveEvent::DownloadFinished { file_name, result }
        }
        DriveRequest::Delete { dir, name } => {
            let result = api.delete(&dir, &name).await.map_err(|e| e.to_string());
            DriveEvent::DeleteFinished { name, result }
        }
        DriveRequest::CreateFolder { dir, name } => {
            let result = api
                .create_folder(&dir, &name)
                .await
                .map_err(|e| e.to_string());
            DriveEvent::CreateFolderFinished { name, result }
        }
    }
}
