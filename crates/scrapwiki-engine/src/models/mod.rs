pub mod line;
pub mod page;
