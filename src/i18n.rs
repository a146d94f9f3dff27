use crate::models::drive::AlertKind;
use crate::models::settings::Language;

pub fn t(lang: &Language, key: &'static str) -> &'static str {
    match lang {
        Language::Japanese => ja_jp(key),
        Language::English => en_us(key),
    }
}

fn ja_jp(key: &'static str) -> &'static str {
    match key {
        // 通用
        "common.cancel" => "キャンセル",
        "common.confirm" => "確認",
        "common.loading" => "読み込み中...",
        "common.delete" => "削除",

        // 面包屑 / 列表
        "drive.home" => "ホーム",
        "drive.header.name" => "名前",
        "drive.header.modified" => "追加日",
        "drive.header.size" => "ファイルサイズ",
        "drive.header.actions" => "アクション",
        "drive.action.download" => "ダウンロード",
        "drive.action.delete" => "削除",
        "drive.empty" => "空のフォルダ",
        "drive.unavailable" => "ドライブに接続できません",

        // 上传
        "upload.drop_hint" => "ここにファイルをドラッグ＆ドロップ、またはクリックして選択",
        "upload.queue_title" => "アップロードするファイル:",
        "upload.not_started" => "未開始",
        "upload.button" => "アップロード",
        "upload.picker_title" => "アップロードするファイルを選択",

        // 下载
        "download.saved" => "ダウンロードしました",
        "download.save_failed" => "ファイルを保存できませんでした",
        "download.save_title" => "ファイルを保存",
        "preview.failed" => "ブラウザを開けませんでした",

        // 新建文件夹
        "new_folder.button" => "フォルダ作成",
        "new_folder.title" => "新しいフォルダを作成",
        "new_folder.placeholder" => "フォルダ名",
        "new_folder.create" => "作成",
        "new_folder.error_empty" => "フォルダ名を入力してください",
        "new_folder.error_invalid" => "フォルダ名に使用できない文字が含まれています",

        // 删除
        "delete.title" => "削除の確認",
        "delete.message" => "次の項目を削除してもよろしいですか:",

        // 错误提示
        "alert.upload_failed" => "ファイルのアップロードに失敗しました:",
        "alert.delete_failed" => "削除に失敗しました",
        "alert.create_folder_failed" => "フォルダの作成に失敗しました",
        "alert.download_failed" => "ダウンロードに失敗しました:",

        _ => key,
    }
}

fn en_us(key: &'static str) -> &'static str {
    match key {
        // Common
        "common.cancel" => "Cancel",
        "common.confirm" => "Confirm",
        "common.loading" => "Loading...",
        "common.delete" => "Delete",

        // Breadcrumbs / list
        "drive.home" => "Home",
        "drive.header.name" => "Name",
        "drive.header.modified" => "Added",
        "drive.header.size" => "File size",
        "drive.header.actions" => "Actions",
        "drive.action.download" => "Download",
        "drive.action.delete" => "Delete",
        "drive.empty" => "Empty folder",
        "drive.unavailable" => "Drive is not reachable",

        // Upload
        "upload.drop_hint" => "Drag & drop files here, or click to select files",
        "upload.queue_title" => "Files to be uploaded:",
        "upload.not_started" => "Not started",
        "upload.button" => "Upload",
        "upload.picker_title" => "Select files to upload",

        // Download
        "download.saved" => "Download saved",
        "download.save_failed" => "Could not save the file",
        "download.save_title" => "Save file",
        "preview.failed" => "Could not open the browser",

        // New folder
        "new_folder.button" => "Create Folder",
        "new_folder.title" => "Create New Folder",
        "new_folder.placeholder" => "Folder Name",
        "new_folder.create" => "Create",
        "new_folder.error_empty" => "Please enter a folder name",
        "new_folder.error_invalid" => "The folder name contains invalid characters",

        // Delete
        "delete.title" => "Confirm Delete",
        "delete.message" => "Are you sure you want to delete",

        // Alerts
        "alert.upload_failed" => "Failed to upload file:",
        "alert.delete_failed" => "Failed to delete item",
        "alert.create_folder_failed" => "Failed to create folder",
        "alert.download_failed" => "Failed to download file:",

        _ => key,
    }
}

/// 错误提示文本
pub fn alert_message(lang: &Language, alert: &AlertKind) -> String {
    match alert {
        AlertKind::UploadFailed { file_name } => {
            format!("{} {}", t(lang, "alert.upload_failed"), file_name)
        }
        AlertKind::DeleteFailed => t(lang, "alert.delete_failed").to_string(),
        AlertKind::CreateFolderFailed => t(lang, "alert.create_folder_failed").to_string(),
        AlertKind::DownloadFailed { file_name } => {
            format!("{} {}", t(lang, "alert.download_failed"), file_name)
        }
    }
}
