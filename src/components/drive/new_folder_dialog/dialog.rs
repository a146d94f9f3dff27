// 新建文件夹对话框渲染组件

use gpui::*;
use gpui_component::input::Input;
use gpui_component::ActiveTheme;

use crate::i18n;
use crate::models::drive::CreateFolderDialog;
use crate::models::settings::Language;

use super::state::NewFolderDialogState;

/// 对话框事件
#[derive(Clone, Debug)]
pub enum NewFolderDialogEvent {
    Cancel,
    /// 提交输入的名称
    Create(String),
}

/// 渲染新建文件夹对话框覆盖层
pub fn render_new_folder_dialog_overlay<F>(
    dialog: &CreateFolderDialog,
    state: Entity<NewFolderDialogState>,
    lang: Language,
    on_event: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(NewFolderDialogEvent, &mut App) + Clone + 'static,
{
    let name_input = state.read(cx).name_input.clone();
    let error_message = dialog.error_message.map(|key| i18n::t(&lang, key));
    let is_creating = dialog.is_creating;

    let bg_color = crate::theme::popover_color(cx);
    let border_color = cx.theme().border;
    let foreground = cx.theme().foreground;
    let muted_foreground = cx.theme().muted_foreground;
    let danger = cx.theme().danger;
    let secondary_hover = cx.theme().secondary_hover;
    let primary_hover = cx.theme().primary_hover;

    let on_cancel = on_event.clone();
    let on_create = on_event;

    let create_btn = div()
        .id("new-folder-create-btn")
        .px_4()
        .py_2()
        .bg(cx.theme().primary)
        .rounded_md()
        .child(
            div()
                .text_sm()
                .text_color(cx.theme().primary_foreground)
                .child(if is_creating {
                    i18n::t(&lang, "common.loading")
                } else {
                    i18n::t(&lang, "new_folder.create")
                }),
        );

    let create_btn = if is_creating {
        create_btn.opacity(0.6)
    } else {
        create_btn
            .cursor_pointer()
            .hover(move |s| s.bg(primary_hover))
            .on_click(move |_, _, cx| {
                let name = state.read(cx).get_folder_name(cx);
                on_create(NewFolderDialogEvent::Create(name), cx);
            })
    };

    div()
        .id("new-folder-dialog-overlay")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(gpui::black().opacity(0.5))
        .flex()
        .items_center()
        .justify_center()
        .on_mouse_down(MouseButton::Left, move |_, _, cx| {
            cx.stop_propagation();
        })
        .child(
            div()
                .w(px(400.))
                .bg(bg_color)
                .rounded_lg()
                .border_1()
                .border_color(border_color)
                .p_6()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .text_color(foreground)
                        .child(i18n::t(&lang, "new_folder.title")),
                )
                .child(if let Some(input) = &name_input {
                    Input::new(input).into_any_element()
                } else {
                    div()
                        .text_sm()
                        .text_color(muted_foreground)
                        .child(i18n::t(&lang, "common.loading"))
                        .into_any_element()
                })
                .children(error_message.map(|msg| div().text_sm().text_color(danger).child(msg)))
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .pt_2()
                        .child(
                            div()
                                .id("new-folder-cancel-btn")
                                .px_4()
                                .py_2()
                                .bg(cx.theme().secondary)
                                .rounded_md()
                                .cursor_pointer()
                                .hover(move |s| s.bg(secondary_hover))
                                .on_click(move |_, _, cx| {
                                    on_cancel(NewFolderDialogEvent::Cancel, cx);
                                })
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(foreground)
                                        .child(i18n::t(&lang, "common.cancel")),
                                ),
                        )
                        .child(create_btn),
                ),
        )
}
