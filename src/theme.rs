use gpui::*;
use gpui_component::theme::{Theme, ThemeMode as GpuiThemeMode};
use gpui_component::ActiveTheme;
use std::rc::Rc;

use crate::models::settings::ThemeMode;

/// 按设置切换明暗模式，System 时保持组件库默认（跟随系统）
pub fn apply_mode(mode: &ThemeMode, cx: &mut App) {
    match mode {
        ThemeMode::Light => Theme::change(GpuiThemeMode::Light, None, cx),
        ThemeMode::Dark => Theme::change(GpuiThemeMode::Dark, None, cx),
        ThemeMode::System => {}
    }
}

/// 初始化全局主题配置
/// 文件管理界面使用偏灰的中性色，强调色保持蓝色（链接、目录图标）
pub fn init(cx: &mut App) {
    let (mut dark_config, mut light_config) = {
        let theme = Theme::global(cx);
        ((*theme.dark_theme).clone(), (*theme.light_theme).clone())
    };

    // ================== Dark Mode ==================
    dark_config.colors.background = Some("#1f2329".into());
    dark_config.colors.popover = Some("#282d35".into());
    dark_config.colors.sidebar = Some("#191c21".into());
    dark_config.colors.muted_foreground = Some("#9aa3ae".into());
    dark_config.colors.list_hover = Some("#2f3540".into());
    dark_config.colors.border = Some("#3a414c".into());
    dark_config.colors.primary = Some("#3b82f6".into());
    dark_config.colors.primary_hover = Some("#2563eb".into());
    dark_config.colors.primary_foreground = Some("#ffffff".into());
    dark_config.colors.secondary = Some("#343b46".into());
    dark_config.colors.secondary_hover = Some("#414a57".into());

    // ================== Light Mode ==================
    light_config.colors.sidebar = Some("#f8fafc".into());
    light_config.colors.primary = Some("#3b82f6".into());
    light_config.colors.primary_hover = Some("#2563eb".into());
    light_config.colors.primary_foreground = Some("#ffffff".into());
    light_config.colors.secondary = Some("#e5e7eb".into()); // gray-200
    light_config.colors.secondary_hover = Some("#d1d5db".into());

    let theme = Theme::global_mut(cx);
    theme.dark_theme = Rc::new(dark_config);
    theme.light_theme = Rc::new(light_config);

    if theme.mode.is_dark() {
        theme.apply_config(&theme.dark_theme.clone());
    } else {
        theme.apply_config(&theme.light_theme.clone());
    }
}

/// 面板背景色（工具栏、文件表格）
pub fn panel_color(cx: &App) -> Hsla {
    cx.theme().sidebar
}

/// 弹窗背景色
pub fn popover_color(cx: &App) -> Hsla {
    cx.theme().popover
}

/// 目录图标颜色
pub fn folder_color(cx: &App) -> Hsla {
    cx.theme().warning
}
