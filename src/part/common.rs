use std::any::Any;
use std::str::FromStr;

use crate::error::SqlError;
use crate::parser;

use super::{Part, PartType};

/// A table reference: `[SCHEMA_NAME.]TABLE_NAME`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNamePart {
    /// Name of the table.
    pub name: String,
    /// Optional schema name.
    pub schema: Option<String>,
}

impl TableNamePart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    /// Qualify the table with a schema.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl FromStr for TableNamePart {
    type Err = SqlError;

    /// Parses `table` or `schema.table`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_table_name(s)
    }
}

impl Part for TableNamePart {
    fn part_type(&self) -> PartType {
        PartType::TableName
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
