// 删除确认对话框

use gpui::*;
use gpui_component::ActiveTheme;

use crate::i18n::t;
use crate::models::drive::DeleteConfirm;
use crate::models::settings::Language;

#[derive(Clone, Debug)]
pub enum DeleteDialogEvent {
    Cancel,
    Confirm,
}

pub fn render_delete_dialog_overlay<F>(
    confirm: &DeleteConfirm,
    lang: Language,
    on_event: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(DeleteDialogEvent, &mut App) + Clone + 'static,
{
    let item = confirm.item_to_delete.clone().unwrap_or_default();
    let is_deleting = confirm.is_deleting;

    let foreground = cx.theme().foreground;
    let danger = cx.theme().danger;
    let danger_hover = cx.theme().danger_hover;
    let secondary_hover = cx.theme().secondary_hover;

    let on_cancel = on_event.clone();
    let on_confirm = on_event;

    let delete_btn = div()
        .id("delete-confirm-btn")
        .px_4()
        .py_2()
        .bg(danger)
        .rounded_md()
        .child(
            div()
                .text_sm()
                .text_color(gpui::white())
                .child(if is_deleting {
                    t(&lang, "common.loading")
                } else {
                    t(&lang, "common.delete")
                }),
        );
    let delete_btn = if is_deleting {
        delete_btn.opacity(0.6)
    } else {
        delete_btn
            .cursor_pointer()
            .hover(move |s| s.bg(danger_hover))
            .on_click(move |_, _, cx| on_confirm(DeleteDialogEvent::Confirm, cx))
    };

    div()
        .id("delete-dialog-overlay")
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
                .bg(crate::theme::popover_color(cx))
                .rounded_lg()
                .border_1()
                .border_color(cx.theme().border)
                .p_6()
                .flex()
                .flex_col()
                .gap_4()
                .child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::BOLD)
                        .text_color(foreground)
                        .child(t(&lang, "delete.title")),
                )
                .child(
                    div()
                        .flex()
                        .flex_wrap()
                        .gap_1()
                        .text_sm()
                        .text_color(foreground)
                        .child(t(&lang, "delete.message"))
                        .child(div().font_weight(FontWeight::BOLD).child(item)),
                )
                .child(
                    div()
                        .flex()
                        .justify_end()
                        .gap_3()
                        .child(
                            div()
                                .id("delete-cancel-btn")
                                .px_4()
                                .py_2()
                                .bg(cx.theme().secondary)
                                .rounded_md()
                                .cursor_pointer()
                                .hover(move |s| s.bg(secondary_hover))
                                .on_click(move |_, _, cx| on_cancel(DeleteDialogEvent::Cancel, cx))
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(foreground)
                                        .child(t(&lang, "common.cancel")),
                                ),
                        )
                        .child(delete_btn),
                ),
        )
}
