//! Fluent statement builders.
//!
//! These assemble a part tree and render it through a dialect factory.

mod create_table;

pub use create_table::CreateTableSqlBuilder;

use crate::error::SqlResult;

/// A statement that can be rendered to SQL.
pub trait SqlBuilder {
    /// Builds the SQL statement.
    ///
    /// On failure the error still carries whatever SQL could be rendered, see
    /// [`SqlError::partial_sql`](crate::error::SqlError::partial_sql).
    fn build(&self) -> SqlResult<String>;
}
