use crate::error::{SqlError, SqlResult};
use crate::factory::PartBuilderFactory;
use crate::parser;
use crate::part::{ColumnDefnPart, CreateTablePart, PartType, TableNamePart};
use crate::result::BuildResult;

use super::SqlBuilder;

/// Builds a CREATE TABLE statement.
///
/// ```
/// use sqlpart::prelude::*;
///
/// let sql = CreateTableSqlBuilder::new(Dialect::Generic.factory())
///     .table_name("foo")
///     .temporary()
///     .build()
///     .unwrap();
/// assert_eq!(sql, "CREATE TEMPORARY TABLE foo");
/// ```
pub struct CreateTableSqlBuilder<F = Box<dyn PartBuilderFactory>> {
    factory: F,
    part: CreateTablePart,
}

impl<F: PartBuilderFactory> CreateTableSqlBuilder<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            part: CreateTablePart::new(),
        }
    }

    /// Marks the table as TEMPORARY.
    pub fn temporary(mut self) -> Self {
        self.part.temporary = true;
        self
    }

    /// Adds the IF NOT EXISTS condition.
    pub fn if_not_exists(mut self) -> Self {
        self.part.if_not_exists = true;
        self
    }

    /// Sets the table name, keeping any schema already set.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        let mut table_name = self.part.table_name.take().unwrap_or_default();
        table_name.name = name.into();
        self.part.table_name = Some(table_name);
        self
    }

    /// Sets the table name from `table` or `schema.table` text.
    pub fn qualified_table_name(mut self, name: &str) -> SqlResult<Self> {
        self.part.table_name = Some(parser::parse_table_name(name)?);
        Ok(self)
    }

    pub fn table(mut self, table_name: TableNamePart) -> Self {
        self.part.table_name = Some(table_name);
        self
    }

    /// Sets the schema of the table name.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        let table_name = self.part.table_name.take().unwrap_or_default();
        self.part.table_name = Some(table_name.with_schema(schema));
        self
    }

    /// Adds a column definition with just a name.
    pub fn col(self, name: impl Into<String>) -> Self {
        self.column(ColumnDefnPart::new(name))
    }

    /// Adds a column definition.
    pub fn column(mut self, column: ColumnDefnPart) -> Self {
        self.part.add_column_defn(column);
        self
    }

    /// Creates the table from a query: `CREATE TABLE ... AS <query>`.
    pub fn as_query(mut self, query: impl Into<String>) -> Self {
        self.part.as_query = Some(query.into());
        self
    }

    /// The part tree built so far.
    pub fn part(&self) -> &CreateTablePart {
        &self.part
    }
}

impl<F: PartBuilderFactory> SqlBuilder for CreateTableSqlBuilder<F> {
    fn build(&self) -> SqlResult<String> {
        let mut res = BuildResult::new(&self.factory);
        res.build(PartType::CreateTable, &self.part, &[]);

        res.into_result().map_err(|source| SqlError::Build {
            statement: "CREATE TABLE",
            source,
        })
    }
}
