// 页面模块

pub mod drive;

pub use drive::DrivePage;
