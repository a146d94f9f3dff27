mod page;

pub use page::DrivePage;
