// Drive HTTP 客户端 - 封装 reqwest，实现 DriveApi

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Url};
use tokio_util::io::ReaderStream;
use tracing::{debug, info};

use super::api::{DriveApi, ProgressCallback};
use crate::constants::{endpoints, UPLOAD_FIELD};
use crate::error::DriveError;
use crate::models::drive::types::path_segments;
use crate::models::drive::{parse_listing, DirectoryEntry, PendingFile};
use crate::models::settings::DriveSettings;

/// Drive 客户端
/// 所有请求都挂在 base_url 之下：{base}/{action}/{path...}[/{name}]
#[derive(Clone)]
pub struct DriveClient {
    base_url: Url,
    http: reqwest::Client,
    /// 列表/删除/新建/下载的请求超时（上传不设总超时）
    request_timeout: Duration,
}

impl DriveClient {
    /// 根据设置创建客户端
    pub fn new(settings: &DriveSettings) -> Result<Self, DriveError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| DriveError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DriveError::InvalidUrl(settings.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()?;

        info!("[Drive] Client created for {}", base_url);

        Ok(Self {
            base_url,
            http,
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
        })
    }

    /// 构建接口地址，各段分别做百分号编码
    ///
    /// 没有文件名且路径为根时追加空段，得到 `/list/` 这样的地址。
    pub fn endpoint(&self, action: &str, dir: &str, name: Option<&str>) -> Result<Url, DriveError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DriveError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(action);

            let mut has_dir = false;
            for segment in path_segments(dir) {
                segments.push(segment);
                has_dir = true;
            }

            match name {
                Some(name) => {
                    segments.push(name);
                }
                None if !has_dir => {
                    segments.push("");
                }
                None => {}
            }
        }
        Ok(url)
    }
}

/// 非 2xx 响应转换为 Rejected
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(DriveError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl DriveApi for DriveClient {
    async fn list(&self, path: &str) -> Result<Vec<DirectoryEntry>, DriveError> {
        let url = self.endpoint(endpoints::LIST, path, None)?;
        debug!("[Drive] GET {}", url);

        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let body = check_status(response).await?.text().await?;
        let entries = parse_listing(&body)?;

        debug!("[Drive] Read {} entries from {}", entries.len(), path);
        Ok(entries)
    }

    async fn upload(
        &self,
        dir: &str,
        file: &PendingFile,
        on_progress: ProgressCallback,
    ) -> Result<(), DriveError> {
        let url = self.endpoint(endpoints::UPLOAD, dir, None)?;
        info!("[Upload] POST {} ({:?})", url, file.local_path);

        let handle = tokio::fs::File::open(&file.local_path).await?;
        // 以打开时的实际大小为准
        let total = handle.metadata().await?.len();

        let mut sent = 0u64;
        let stream = ReaderStream::new(handle).inspect_ok(move |chunk| {
            sent += chunk.len() as u64;
            on_progress(sent, total);
        });

        let part = Part::stream_with_length(Body::wrap_stream(stream), total)
            .file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.http.post(url).multipart(form).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn download(&self, dir: &str, file_name: &str) -> Result<Vec<u8>, DriveError> {
        let url = self.endpoint(endpoints::DOWNLOAD, dir, Some(file_name))?;
        info!("[Drive] GET {}", url);

        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let bytes = check_status(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn delete(&self, dir: &str, name: &str) -> Result<(), DriveError> {
        let url = self.endpoint(endpoints::DELETE, dir, Some(name))?;
        info!("[Drive] DELETE {}", url);

        let response = self
            .http
            .delete(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn create_folder(&self, dir: &str, name: &str) -> Result<(), DriveError> {
        let url = self.endpoint(endpoints::CREATE, dir, Some(name))?;
        info!("[Drive] POST {}", url);

        let response = self
            .http
            .post(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    fn preview_url(&self, dir: &str, file_name: &str) -> Result<String, DriveError> {
        let mut url = self.endpoint(endpoints::DOWNLOAD, dir, Some(file_name))?;
        url.query_pairs_mut().append_pair("type", "inline");
        Ok(url.to_string())
    }
}
