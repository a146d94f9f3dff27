// Drive 工具栏组件
// 导航按钮（后退、前进、上级）+ 面包屑 + 操作按钮

use gpui::*;
use gpui_component::breadcrumb::{Breadcrumb, BreadcrumbItem};
use gpui_component::ActiveTheme;

use crate::constants::icons;
use crate::i18n::t;
use crate::models::drive::{breadcrumbs, DriveState};
use crate::models::settings::Language;

const TOOLBAR_HEIGHT: f32 = 36.0;
const BUTTON_SIZE: f32 = 26.0;
const ICON_SIZE: f32 = 14.0;

/// 工具栏事件
#[derive(Clone, Debug)]
pub enum DriveToolbarEvent {
    GoBack,
    GoForward,
    GoUp,
    Refresh,
    NewFolder,
    ToggleHidden,
    NavigateTo(String),
}

fn toolbar_button<F>(
    id: impl Into<ElementId>,
    icon_path: &'static str,
    enabled: bool,
    on_click: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
{
    let icon_color = if enabled {
        cx.theme().foreground
    } else {
        cx.theme().muted_foreground.opacity(0.5)
    };
    let hover_bg = cx.theme().list_hover;

    let el = div()
        .id(id)
        .size(px(BUTTON_SIZE))
        .flex()
        .items_center()
        .justify_center()
        .rounded(px(4.))
        .child(
            svg()
                .path(icon_path)
                .size(px(ICON_SIZE))
                .text_color(icon_color),
        );

    if enabled {
        el.cursor_pointer()
            .hover(|s| s.bg(hover_bg))
            .on_mouse_down(MouseButton::Left, on_click)
    } else {
        el
    }
}

/// 渲染面包屑：根节点 + 每一级目录，点击跳转到对应前缀
fn render_breadcrumbs<F>(current_path: &str, lang: Language, on_event: F) -> Breadcrumb
where
    F: Fn(DriveToolbarEvent, &mut App) + Clone + 'static,
{
    breadcrumbs(current_path)
        .into_iter()
        .fold(Breadcrumb::new().text_xs(), |breadcrumb, crumb| {
            let label: SharedString = if crumb.is_root {
                t(&lang, "drive.home").into()
            } else {
                crumb.name.into()
            };
            let path = crumb.path;
            let on_nav = on_event.clone();

            breadcrumb.child(BreadcrumbItem::new(label).on_click(move |_, _, cx| {
                on_nav(DriveToolbarEvent::NavigateTo(path.clone()), cx);
            }))
        })
}

/// 渲染 Drive 工具栏
pub fn render_drive_toolbar<F>(
    state: Option<&DriveState>,
    lang: Language,
    on_event: F,
    cx: &App,
) -> impl IntoElement
where
    F: Fn(DriveToolbarEvent, &mut App) + Clone + 'static,
{
    let bg_color = crate::theme::panel_color(cx);
    let border_color = cx.theme().border;
    let input_bg = cx.theme().background;

    let (can_back, can_forward, can_up, current_path, show_hidden, enabled) = match state {
        Some(s) => (
            s.can_go_back(),
            s.can_go_forward(),
            s.can_go_up(),
            s.current_path.as_str(),
            s.show_hidden,
            true,
        ),
        None => (false, false, false, "/", true, false),
    };

    // 生成按钮点击回调
    let emit = |event: DriveToolbarEvent| {
        let on_event = on_event.clone();
        move |_: &MouseDownEvent, _: &mut Window, cx: &mut App| on_event(event.clone(), cx)
    };

    let nav_buttons = div()
        .flex()
        .items_center()
        .gap_0p5()
        .flex_shrink_0()
        .child(toolbar_button(
            "drive-btn-back",
            icons::ARROW_LEFT,
            can_back,
            emit(DriveToolbarEvent::GoBack),
            cx,
        ))
        .child(toolbar_button(
            "drive-btn-forward",
            icons::ARROW_RIGHT,
            can_forward,
            emit(DriveToolbarEvent::GoForward),
            cx,
        ))
        .child(toolbar_button(
            "drive-btn-up",
            icons::ARROW_UP,
            can_up,
            emit(DriveToolbarEvent::GoUp),
            cx,
        ));

    let path_bar = div()
        .id("drive-breadcrumbs")
        .flex_1()
        .h(px(24.))
        .mx_2()
        .px_2()
        .bg(input_bg)
        .border_1()
        .border_color(border_color)
        .rounded(px(4.))
        .flex()
        .items_center()
        .overflow_hidden()
        .child(render_breadcrumbs(current_path, lang, on_event.clone()));

    let hidden_icon = if show_hidden { icons::EYE_OFF } else { icons::EYE };

    let action_buttons = div()
        .flex()
        .items_center()
        .gap_0p5()
        .flex_shrink_0()
        .child(toolbar_button(
            "drive-btn-refresh",
            icons::REFRESH,
            enabled,
            emit(DriveToolbarEvent::Refresh),
            cx,
        ))
        .child(toolbar_button(
            "drive-btn-toggle-hidden",
            hidden_icon,
            enabled,
            emit(DriveToolbarEvent::ToggleHidden),
            cx,
        ))
        .child(div().w(px(1.)).h(px(16.)).mx_1().bg(border_color))
        .child(toolbar_button(
            "drive-btn-new-folder",
            icons::FOLDER_PLUS,
            enabled,
            emit(DriveToolbarEvent::NewFolder),
            cx,
        ));

    div()
        .w_full()
        .h(px(TOOLBAR_HEIGHT))
        .flex_shrink_0()
        .bg(bg_color)
        .border_b_1()
        .border_color(border_color)
        .flex()
        .items_center()
        .px_1()
        .gap_1()
        .child(nav_buttons)
        .child(path_bar)
        .child(action_buttons)
}
