pub mod sheet;
pub mod time;
