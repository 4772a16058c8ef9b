//! # sqlpart
//!
//! Renders SQL statements from a tree of typed parts.
//!
//! Each part is built by a [`PartBuilder`](builder::PartBuilder) resolved
//! from a [`PartBuilderFactory`](factory::PartBuilderFactory). Dialects are
//! factory chains that put their own builders in front of the generic ones,
//! so a dialect only implements the parts whose text differs.
//!
//! All builders of one statement share a [`BuildResult`](result::BuildResult).
//! It collects the SQL text and every error along the way; a part that
//! cannot be built leaves a visible `[UNIMPLEMENTED]` marker instead of
//! stopping the build.
//!
//! ## Quick Example
//!
//! ```
//! use sqlpart::prelude::*;
//!
//! let sql = CreateTableSqlBuilder::new(Dialect::MySql.factory())
//!     .table_name("orders")
//!     .schema("shop")
//!     .if_not_exists()
//!     .col("id")
//!     .build()
//!     .unwrap();
//! assert_eq!(sql, "CREATE IF NOT EXISTS TABLE shop.orders (id)");
//! ```
//!
//! ## Part Types
//!
//! | Part type                   | Part               | Renders                         |
//! |-----------------------------|--------------------|---------------------------------|
//! | `TableName`                 | `TableNamePart`    | `[schema.]name`                 |
//! | `CreateTable`               | `CreateTablePart`  | whole statement                 |
//! | `CreateTableName`           | `CreateTablePart`  | `CREATE ... TABLE name`         |
//! | `CreateTableTemporary`      | `CreateTablePart`  | `TEMPORARY`                     |
//! | `CreateTableNameIfNotExist` | `CreateTablePart`  | `IF NOT EXISTS`                 |
//! | `CreateTableAs`             | `CreateTablePart`  | `AS <query>`                    |
//! | `ColumnDefn`                | `ColumnDefnPart`   | `name[ TYPE][ NOT NULL]`        |

pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod factory;
pub mod option;
pub mod parser;
pub mod part;
pub mod result;
pub mod statement;

pub mod prelude {
    pub use crate::builder::{PartBuilder, UnimplementedBuilder};
    pub use crate::config::Config;
    pub use crate::dialect::Dialect;
    pub use crate::error::*;
    pub use crate::factory::{FactoryChain, PartBuilderFactory};
    pub use crate::option::BuildOption;
    pub use crate::part::*;
    pub use crate::result::BuildResult;
    pub use crate::statement::{CreateTableSqlBuilder, SqlBuilder};
}

/// Start a CREATE TABLE statement in the given dialect.
///
/// # Example
///
/// ```
/// use sqlpart::prelude::*;
///
/// let sql = sqlpart::create_table(Dialect::Generic).table_name("foo").build().unwrap();
/// assert_eq!(sql, "CREATE TABLE foo");
/// ```
pub fn create_table(dialect: dialect::Dialect) -> statement::CreateTableSqlBuilder {
    statement::CreateTableSqlBuilder::new(dialect.factory())
}
