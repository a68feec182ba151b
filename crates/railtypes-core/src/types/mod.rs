mod column;
mod column_name;
mod column_type;
mod schema;
mod table;
mod table_name;

pub use column::Column;
pub use column_name::ColumnName;
pub use column_type::ColumnType;
pub use schema::Schema;
pub use table::Table;
pub use table_name::TableName;
