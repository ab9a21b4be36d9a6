// storage/mod.rs
// Database access: read-only pool and row-to-record mapping

pub mod pool;
pub mod rows;

// Re-export commonly used items
pub use pool::{init_read_only_pool, DbPool};
pub use rows::{
    build_select, format_timestamp, record_from_columns, row_columns, table_columns,
    validate_identifier, ColumnMapping,
};
