// 新建文件夹对话框的输入框状态
// 打开/校验/创建中等状态由 DriveState 管理，这里只持有 gpui 输入框

use gpui::{App, AppContext, Context, Entity, Window};
use gpui_component::input::InputState;

use crate::i18n;
use crate::models::settings::Language;

#[derive(Default)]
pub struct NewFolderDialogState {
    /// 文件夹名称输入框（打开对话框后首次渲染时创建）
    pub name_input: Option<Entity<InputState>>,
}

impl NewFolderDialogState {
    /// 确保输入框已创建
    pub fn ensure_input_created(&mut self, lang: Language, window: &mut Window, cx: &mut Context<Self>) {
        if self.name_input.is_none() {
            let placeholder = i18n::t(&lang, "new_folder.placeholder");
            let input = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));
            input.update(cx, |input, cx| input.focus(window, cx));
            self.name_input = Some(input);
        }
    }

    /// 获取输入的文件夹名称（原样返回，校验时再去除空白）
    pub fn get_folder_name(&self, cx: &App) -> String {
        self.name_input
            .as_ref()
            .map(|i| i.read(cx).value().to_string())
            .unwrap_or_default()
    }

    /// 对话框关闭后丢弃输入框，下次打开时是空的
    pub fn reset(&mut self) {
        self.name_input = None;
    }
}
