// Drive 服务模块

pub mod api;
pub mod client;
pub mod runtime;

pub use api::{DriveApi, ProgressCallback};
pub use client::DriveClient;
pub use runtime::DriveRuntime;
