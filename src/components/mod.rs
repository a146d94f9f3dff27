// UI 组件

pub mod drive;
