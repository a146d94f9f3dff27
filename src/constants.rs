// 常量定义

/// 默认 Drive 接口前缀
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/drive";

/// 接口路径
pub mod endpoints {
    pub const LIST: &str = "list";
    pub const UPLOAD: &str = "upload";
    pub const DOWNLOAD: &str = "download";
    pub const DELETE: &str = "delete";
    pub const CREATE: &str = "create";
}

/// multipart 上传的字段名
pub const UPLOAD_FIELD: &str = "file";

// 图标路径常量
pub mod icons {
    pub const FOLDER: &str = "icons/folder.svg";
    pub const FOLDER_PLUS: &str = "icons/folder-plus.svg";
    pub const FILE: &str = "icons/file.svg";
    pub const FILE_TEXT: &str = "icons/file-text.svg";
    pub const IMAGE: &str = "icons/image.svg";
    pub const ARROW_LEFT: &str = "icons/arrow-left.svg";
    pub const ARROW_RIGHT: &str = "icons/arrow-right.svg";
    pub const ARROW_UP: &str = "icons/arrow-up.svg";
    pub const REFRESH: &str = "icons/refresh.svg";
    pub const UPLOAD: &str = "icons/upload.svg";
    pub const EYE: &str = "icons/eye.svg";
    pub const EYE_OFF: &str = "icons/eye-off.svg";
}
