//! MySQL dialect.
//!
//! Identifiers that are reserved words or contain special characters are
//! quoted with backticks. Everything else falls through to the generic
//! builders.

use crate::builder::PartBuilder;
use crate::factory::{FactoryChain, PartBuilderFactory};
use crate::part::{ColumnDefnPart, Part, PartType, TableNamePart};

mod common;

pub use common::{MySqlColumnDefnBuilder, MySqlTableNameBuilder};

/// Part types built by [`MySqlFactory`].
pub const OVERRIDES: &[PartType] = &[PartType::TableName, PartType::ColumnDefn];

/// Words that must be quoted when used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "add", "all", "alter", "and", "as", "asc", "between", "by", "case", "check", "column",
    "constraint", "create", "database", "default", "delete", "desc", "distinct", "drop", "else",
    "exists", "foreign", "from", "group", "having", "if", "in", "index", "insert", "interval",
    "into", "is", "join", "key", "like", "limit", "not", "null", "on", "or", "order",
    "primary", "references", "select", "set", "table", "temporary", "then", "to", "union",
    "unique", "update", "use", "values", "when", "where", "with",
];

/// Quote `name` with backticks if MySQL needs it to be quoted.
pub fn quote_identifier(name: &str) -> String {
    let lower = name.to_lowercase();
    let needs_quoting = RESERVED_WORDS.contains(&lower.as_str())
        || name.chars().any(|c| !c.is_alphanumeric() && c != '_' && c != '$')
        || name.chars().next().is_some_and(|c| c.is_numeric());

    if needs_quoting {
        format!("`{}`", name.replace('`', "``"))
    } else {
        name.to_string()
    }
}

/// Creates builders for the part types MySQL renders differently.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlFactory;

impl PartBuilderFactory for MySqlFactory {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        let builder: Box<dyn PartBuilder + 'p> = match part_type {
            PartType::TableName => {
                Box::new(MySqlTableNameBuilder::new(part.downcast_ref::<TableNamePart>()?))
            }
            PartType::ColumnDefn => {
                Box::new(MySqlColumnDefnBuilder::new(part.downcast_ref::<ColumnDefnPart>()?))
            }
            _ => return None,
        };
        Some(builder)
    }
}

/// The MySQL factory chain: [`MySqlFactory`], then the generic builders.
pub fn new_factory() -> FactoryChain {
    super::with_generic_fallback(MySqlFactory)
}
