// Drive 文件列表组件
// 表格形式展示当前目录内容：名称 / 追加日 / 文件大小 / 操作

use gpui::*;
use gpui_component::scroll::ScrollableElement;
use gpui_component::ActiveTheme;

use crate::constants::icons;
use crate::i18n::t;
use crate::models::drive::types::sort_for_display;
use crate::models::drive::{DirectoryEntry, DriveState};
use crate::models::settings::Language;

const HEADER_HEIGHT: f32 = 30.0;
const ROW_HEIGHT: f32 = 30.0;
const ICON_SIZE: f32 = 16.0;

const MODIFIED_WIDTH: f32 = 140.0;
const SIZE_WIDTH: f32 = 90.0;
const ACTIONS_WIDTH: f32 = 170.0;

/// 文件列表事件
#[derive(Clone, Debug)]
pub enum FileListEvent {
    /// 进入目录
    OpenDirectory(String),
    /// 在浏览器中预览文件
    Preview(String),
    Download(String),
    Delete(String),
}

fn get_file_icon(entry: &DirectoryEntry) -> &'static str {
    if entry.is_dir() {
        return icons::FOLDER;
    }
    match entry.extension() {
        Some("txt" | "md" | "log" | "csv" | "json") => icons::FILE_TEXT,
        Some("jpg" | "jpeg" | "png" | "gif" | "svg" | "webp") => icons::IMAGE,
        _ => icons::FILE,
    }
}

fn header_cell(label: &'static str, cx: &App) -> Div {
    div()
        .text_xs()
        .font_weight(FontWeight::MEDIUM)
        .text_color(cx.theme().muted_foreground)
        .child(label)
}

fn render_header(lang: Language, cx: &App) -> impl IntoElement {
    div()
        .w_full()
        .h(px(HEADER_HEIGHT))
        .flex()
        .items_center()
        .gap_2()
        .border_b_1()
        .border_color(cx.theme().border)
        .px_3()
        .child(header_cell(t(&lang, "drive.header.name"), cx).flex_1())
        .child(header_cell(t(&lang, "drive.header.modified"), cx).w(px(MODIFIED_WIDTH)))
        .child(header_cell(t(&lang, "drive.header.size"), cx).w(px(SIZE_WIDTH)))
        .child(header_cell(t(&lang, "drive.header.actions"), cx).w(px(ACTIONS_WIDTH)))
}

/// 行内小按钮（下载 / 删除）
fn action_button<F>(
    id: impl Into<ElementId>,
    label: &'static str,
    bg: Hsla,
    hover_bg: Hsla,
    on_click: F,
) -> impl IntoElement
where
    F: Fn(&ClickEvent, &mut Window, &mut App) + 'static,
{
    div()
        .id(id)
        .px_2()
        .py_0p5()
        .rounded_md()
        .bg(bg)
        .text_xs()
        .text_color(gpui::white())
        .cursor_pointer()
        .hover(move |s| s.bg(hover_bg))
        .on_click(on_click)
        .child(label)
}

fn render_row<F>(entry: &DirectoryEntry, index: usize, lang: Language, on_event: F, cx: &App) -> AnyElement
where
    F: Fn(FileListEvent, &mut App) + Clone + 'static,
{
    let foreground = cx.theme().foreground;
    let muted = cx.theme().muted_foreground;
    let link = cx.theme().link;
    let hover_bg = cx.theme().list_hover;

    let icon_color = if entry.is_dir() {
        crate::theme::folder_color(cx)
    } else {
        muted
    };

    // 目录进入，文件预览
    let name = entry.name.clone();
    let open_event = if entry.is_dir() {
        FileListEvent::OpenDirectory(name.clone())
    } else {
        FileListEvent::Preview(name.clone())
    };
    let on_open = on_event.clone();

    let mut actions = div().w(px(ACTIONS_WIDTH)).flex().items_center().gap_2();

    if entry.is_file() {
        let on_download = on_event.clone();
        let download_name = name.clone();
        actions = actions.child(action_button(
            ("drive-row-download", index),
            t(&lang, "drive.action.download"),
            cx.theme().success,
            cx.theme().success_hover,
            move |_, _, cx| on_download(FileListEvent::Download(download_name.clone()), cx),
        ));
    }

    let on_delete = on_event;
    let delete_name = name.clone();
    actions = actions.child(action_button(
        ("drive-row-delete", index),
        t(&lang, "drive.action.delete"),
        cx.theme().danger,
        cx.theme().danger_hover,
        move |_, _, cx| on_delete(FileListEvent::Delete(delete_name.clone()), cx),
    ));

    div()
        .id(("drive-row", index))
        .w_full()
        .h(px(ROW_HEIGHT))
        .flex()
        .items_center()
        .gap_2()
        .px_3()
        .border_b_1()
        .border_color(cx.theme().border.opacity(0.4))
        .hover(|s| s.bg(hover_bg))
        .child(
            div()
                .id(("drive-row-name", index))
                .flex_1()
                .flex()
                .items_center()
                .gap_2()
                .overflow_hidden()
                .cursor_pointer()
                .on_click(move |_, _, cx| on_open(open_event.clone(), cx))
                .child(svg().path(get_file_icon(entry)).size(px(ICON_SIZE)).text_color(icon_color))
                .child(
                    div()
                        .flex_1()
                        .text_sm()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(link)
                        .overflow_hidden()
                        .text_ellipsis()
                        .child(name),
                ),
        )
        .child(
            div()
                .w(px(MODIFIED_WIDTH))
                .text_xs()
                .text_color(foreground)
                .child(entry.display_modified()),
        )
        .child(
            div()
                .w(px(SIZE_WIDTH))
                .text_xs()
                .text_color(foreground)
                .child(entry.display_size()),
        )
        .child(actions)
        .into_any_element()
}

fn render_message(message: &'static str, cx: &App) -> Div {
    div()
        .flex_1()
        .flex()
        .items_center()
        .justify_center()
        .child(div().text_sm().text_color(cx.theme().muted_foreground).child(message))
}

/// 渲染文件列表
pub fn render_file_list<F>(
    state: Option<&DriveState>,
    lang: Language,
    folders_first: bool,
    on_event: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(FileListEvent, &mut App) + Clone + 'static,
{
    let container = div()
        .size_full()
        .bg(crate::theme::panel_color(cx))
        .border_1()
        .border_color(cx.theme().border)
        .rounded_lg()
        .overflow_hidden()
        .flex()
        .flex_col()
        .child(render_header(lang, cx));

    let Some(state) = state else {
        return container.child(render_message(t(&lang, "drive.unavailable"), cx));
    };

    let visible: Vec<DirectoryEntry> = state.visible_entries().into_iter().cloned().collect();
    let entries = sort_for_display(&visible, folders_first);

    if entries.is_empty() {
        let message = if state.loading {
            t(&lang, "common.loading")
        } else {
            t(&lang, "drive.empty")
        };
        return container.child(render_message(message, cx));
    }

    let rows: Vec<AnyElement> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_row(entry, index, lang, on_event.clone(), cx))
        .collect();

    container.child(
        div()
            .id("drive-file-list-scroll")
            .flex_1()
            .min_h(px(0.))
            .overflow_y_scrollbar()
            .children(rows),
    )
}
