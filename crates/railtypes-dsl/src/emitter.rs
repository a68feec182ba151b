use railtypes_core::types::{ColumnType, Schema, Table, TableName};

/// Emit one TypeScript interface per table, separated by blank lines.
///
/// Tables and columns appear in declaration order. The output has no
/// trailing newline; an empty schema yields an empty string.
pub fn emit(schema: &Schema) -> String {
    let mut output = String::new();
    for (i, (name, table)) in schema.tables().enumerate() {
        if i > 0 {
            output.push_str("\n\n");
        }
        emit_interface(name, table, &mut output);
    }
    output
}

/// Emit the interface block for a single table.
pub fn emit_table(name: &TableName, table: &Table) -> String {
    let mut output = String::new();
    emit_interface(name, table, &mut output);
    output
}

fn emit_interface(name: &TableName, table: &Table, output: &mut String) {
    output.push_str("interface ");
    output.push_str(&interface_name(name));
    output.push_str(" {\n");

    for (column_name, column) in table.columns() {
        output.push('\t');
        output.push_str(column_name.as_str());
        output.push_str(": ");
        output.push_str(target_type(&column.column_type));
        output.push('\n');
    }

    output.push('}');
}

/// Derive the interface name for a table: `user_accounts` -> `IUserAccounts`.
///
/// Each underscore-separated segment has its first character upper-cased;
/// empty segments contribute nothing.
pub fn interface_name(table: &TableName) -> String {
    let mut name = String::from("I");
    for segment in table.segments() {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Map a schema column type to the type written in the interface.
///
/// Currently the identity: `string` stays `string`, and tokens with no
/// TypeScript counterpart (`datetime`, `integer`, `jsonb`) are written as-is.
pub fn target_type(column_type: &ColumnType) -> &str {
    column_type.as_str()
}
