use std::any::Any;

use super::{Part, PartType, TableNamePart};

/// A CREATE TABLE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTablePart {
    pub table_name: Option<TableNamePart>,
    pub temporary: bool,
    pub if_not_exists: bool,
    /// Query text for `CREATE TABLE ... AS <query>`, emitted verbatim.
    pub as_query: Option<String>,
    column_defns: Vec<ColumnDefnPart>,
}

impl CreateTablePart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column definition. Columns render in insertion order.
    pub fn add_column_defn(&mut self, column: ColumnDefnPart) {
        self.column_defns.push(column);
    }

    pub fn column_defns(&self) -> &[ColumnDefnPart] {
        &self.column_defns
    }
}

impl Part for CreateTablePart {
    fn part_type(&self) -> PartType {
        PartType::CreateTable
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A column definition of a CREATE TABLE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDefnPart {
    pub name: String,
    /// Type text such as `INT` or `VARCHAR(255)`, emitted verbatim.
    pub data_type: Option<String>,
    pub not_null: bool,
}

impl ColumnDefnPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
}

impl Part for ColumnDefnPart {
    fn part_type(&self) -> PartType {
        PartType::ColumnDefn
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
