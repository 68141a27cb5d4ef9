pub mod routine;
pub mod sheet_sink;
pub mod sync_error;
pub mod table_source;
