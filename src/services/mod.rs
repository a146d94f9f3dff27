// 服务层

pub mod drive;
pub mod storage;
