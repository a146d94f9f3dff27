// Drive 数据模型

pub mod state;
pub mod types;
pub mod upload;

pub use state::{
    AlertKind, CreateFolderDialog, DeleteConfirm, DriveCommand, DriveEvent, DriveRequest,
    DriveState,
};
pub use types::{
    breadcrumbs, parse_listing, Breadcrumb, DirectoryEntry, EntryType, NavigationHistory,
};
pub use upload::{PendingFile, PendingUpload, UploadStatus};
