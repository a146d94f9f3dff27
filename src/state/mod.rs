// 控制器模块
// DriveState 的唯一持有者，负责在 Tokio 运行时中执行请求

mod controller;
mod executor;

pub use controller::{DriveController, UiEffect};
