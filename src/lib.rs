// DriveMaster - 远程 Drive 文件管理客户端
// 库部分不依赖 UI 框架，桌面界面在 gui 特性下编译

pub mod constants;
pub mod error;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;

#[cfg(feature = "gui")]
pub mod assets;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod keybindings;
#[cfg(feature = "gui")]
pub mod pages;
#[cfg(feature = "gui")]
pub mod theme;
