// 全局快捷键管理

use gpui::{actions, App, KeyBinding};

/// Drive 页面的按键上下文
pub const DRIVE_CONTEXT: &str = "DrivePage";

actions!(app, [Quit]);
actions!(drive, [Refresh, GoBack, GoForward, GoUp, NewFolder, ToggleHidden]);

/// 初始化快捷键
pub fn init(cx: &mut App) {
    #[cfg(target_os = "macos")]
    cx.bind_keys([
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("cmd-r", Refresh, Some(DRIVE_CONTEXT)),
        KeyBinding::new("cmd-[", GoBack, Some(DRIVE_CONTEXT)),
        KeyBinding::new("cmd-]", GoForward, Some(DRIVE_CONTEXT)),
        KeyBinding::new("cmd-up", GoUp, Some(DRIVE_CONTEXT)),
        KeyBinding::new("cmd-shift-n", NewFolder, Some(DRIVE_CONTEXT)),
        KeyBinding::new("cmd-shift-.", ToggleHidden, Some(DRIVE_CONTEXT)),
    ]);

    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("f5", Refresh, Some(DRIVE_CONTEXT)),
        KeyBinding::new("alt-left", GoBack, Some(DRIVE_CONTEXT)),
        KeyBinding::new("alt-right", GoForward, Some(DRIVE_CONTEXT)),
        KeyBinding::new("alt-up", GoUp, Some(DRIVE_CONTEXT)),
        KeyBinding::new("ctrl-shift-n", NewFolder, Some(DRIVE_CONTEXT)),
        KeyBinding::new("ctrl-h", ToggleHidden, Some(DRIVE_CONTEXT)),
    ]);

    cx.on_action(|_: &Quit, cx| {
        cx.quit();
    });
}
