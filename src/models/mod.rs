// 数据模型模块

pub mod drive;
pub mod settings;

pub use settings::AppSettings;
