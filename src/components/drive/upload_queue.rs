// 上传区域组件
// 拖放区 + 待上传队列 + 上传按钮

use std::path::PathBuf;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme;

use crate::constants::icons;
use crate::i18n::t;
use crate::models::drive::{DriveState, UploadStatus};
use crate::models::settings::Language;

/// 上传区域事件
#[derive(Clone, Debug)]
pub enum UploadQueueEvent {
    /// 打开文件选择对话框
    PickFiles,
    /// 拖放到区域内的本地路径
    FilesDropped(Vec<PathBuf>),
    StartUpload,
}

fn render_drop_zone<F>(lang: Language, on_event: F, cx: &App) -> impl IntoElement
where
    F: Fn(UploadQueueEvent, &mut App) + Clone + 'static,
{
    let muted = cx.theme().muted_foreground;
    let border_color = cx.theme().border;
    let hover_bg = cx.theme().list_hover;
    let active_border = cx.theme().primary;

    let on_pick = on_event.clone();
    let on_drop = on_event;

    div()
        .id("drive-drop-zone")
        .w_full()
        .py_6()
        .flex()
        .flex_col()
        .items_center()
        .justify_center()
        .gap_2()
        .border_2()
        .border_color(border_color)
        .rounded_lg()
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .drag_over::<ExternalPaths>(move |style, _, _, _| {
            style.bg(hover_bg).border_color(active_border)
        })
        .on_drop(move |paths: &ExternalPaths, _, cx| {
            on_drop(UploadQueueEvent::FilesDropped(paths.paths().to_vec()), cx);
        })
        .on_click(move |_, _, cx| on_pick(UploadQueueEvent::PickFiles, cx))
        .child(svg().path(icons::UPLOAD).size(px(24.)).text_color(muted))
        .child(
            div()
                .text_sm()
                .text_color(muted)
                .child(t(&lang, "upload.drop_hint")),
        )
}

fn render_queue(state: &DriveState, lang: Language, cx: &App) -> impl IntoElement {
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;
    let danger = cx.theme().danger;
    let not_started = t(&lang, "upload.not_started");

    div()
        .w_full()
        .p_3()
        .bg(crate::theme::panel_color(cx))
        .border_1()
        .border_color(cx.theme().border)
        .rounded_lg()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(foreground)
                .child(t(&lang, "upload.queue_title")),
        )
        .children(state.uploads.iter().map(|item| {
            let status_color = match item.status {
                UploadStatus::Failed => danger,
                UploadStatus::NotStarted => muted,
                _ => foreground,
            };
            div()
                .flex()
                .items_center()
                .gap_2()
                .text_xs()
                .child(div().text_color(foreground).child(item.file.name.clone()))
                .child(div().text_color(muted).child("-"))
                .child(
                    div()
                        .text_color(status_color)
                        .child(item.progress_label(not_started)),
                )
        }))
}

/// 渲染上传区域
pub fn render_upload_panel<F>(
    state: Option<&DriveState>,
    lang: Language,
    on_event: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(UploadQueueEvent, &mut App) + Clone + 'static,
{
    let Some(state) = state else {
        return div().into_any_element();
    };

    let can_start = !state.uploading && state.uploads.iter().any(|u| u.status == UploadStatus::NotStarted);
    let on_start = on_event.clone();

    let upload_button = {
        let button = div()
            .id("drive-upload-btn")
            .px_4()
            .py_2()
            .rounded_lg()
            .bg(cx.theme().primary)
            .text_sm()
            .text_color(cx.theme().primary_foreground)
            .child(if state.uploading {
                t(&lang, "common.loading")
            } else {
                t(&lang, "upload.button")
            });

        if can_start {
            let hover_bg = cx.theme().primary_hover;
            button
                .cursor_pointer()
                .hover(move |s| s.bg(hover_bg))
                .on_click(move |_, _, cx| on_start(UploadQueueEvent::StartUpload, cx))
        } else {
            button.opacity(0.6)
        }
    };

    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_3()
        .child(render_drop_zone(lang, on_event, cx))
        .when(!state.uploads.is_empty(), |el| el.child(render_queue(state, lang, cx)))
        .child(div().flex().child(upload_button))
        .into_any_element()
}
