// Drive 页面组件

mod delete_dialog;
mod file_list;
mod new_folder_dialog;
mod toolbar;
mod upload_queue;

pub use delete_dialog::{render_delete_dialog_overlay, DeleteDialogEvent};
pub use file_list::{render_file_list, FileListEvent};
pub use new_folder_dialog::{
    render_new_folder_dialog_overlay, NewFolderDialogEvent, NewFolderDialogState,
};
pub use toolbar::{render_drive_toolbar, DriveToolbarEvent};
pub use upload_queue::{render_upload_panel, UploadQueueEvent};
