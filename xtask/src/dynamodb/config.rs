//! Table configuration types (Functional Core - pure data).

/// Table name used when `--table-name` is not given.
pub const DEFAULT_TABLE_NAME: &str = "notes";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub throughput: Throughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Provisioned capacity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Returns the canonical table configuration for the notes table.
/// This is a pure function - no I/O.
pub fn notes_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "owner".to_string(),
            attribute_type: AttributeType::String,
        },
        sort_key: Some(KeyAttribute {
            name: "title".to_string(),
            attribute_type: AttributeType::String,
        }),
        throughput: Throughput {
            read_capacity_units: 10,
            write_capacity_units: 5,
        },
    }
}
