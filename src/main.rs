// DriveMaster - 远程 Drive 文件管理客户端
// 应用入口

// Windows 下 release 模式隐藏终端窗口
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gpui::*;
use gpui_component::Root;
use tracing::warn;

use drivemaster::assets::Assets;
use drivemaster::models::AppSettings;
use drivemaster::pages::DrivePage;
use drivemaster::services::storage;

fn main() {
    // 日志级别可通过 RUST_LOG 控制，例如：RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let settings = storage::load_settings().unwrap_or_else(|e| {
        warn!("[Storage] Failed to load settings, using defaults: {:#}", e);
        AppSettings::default()
    });

    let app = Application::new().with_assets(Assets::locate());

    app.on_reopen(|cx| {
        cx.activate(true);
    });

    app.run(move |cx: &mut App| {
        // 必须在使用任何组件之前调用
        gpui_component::init(cx);

        drivemaster::keybindings::init(cx);
        drivemaster::theme::apply_mode(&settings.theme.mode, cx);
        drivemaster::theme::init(cx);

        let page_settings = settings.clone();
        let bounds = Bounds::centered(None, size(px(1100.), px(760.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("DriveMaster".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            move |window, cx| {
                let view = cx.new(|cx| DrivePage::new(page_settings, window, cx));
                // gpui-component 要求使用 Root 包装视图
                cx.new(|cx| Root::new(view, window, cx))
            },
        )
        .unwrap();

        cx.activate(true);
    });
}
