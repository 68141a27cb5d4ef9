pub mod sheets;
pub mod table;
pub mod timestamp;
