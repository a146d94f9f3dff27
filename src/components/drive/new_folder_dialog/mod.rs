mod dialog;
mod state;

pub use dialog::{render_new_folder_dialog_overlay, NewFolderDialogEvent};
pub use state::NewFolderDialogState;
