//! SQL parts: the data nodes of a statement tree.
//!
//! A part never renders itself. It only reports which [`PartType`] it is and
//! carries the fields a builder needs. Builders are resolved for a part by a
//! [`PartBuilderFactory`](crate::factory::PartBuilderFactory).

use std::any::Any;
use std::fmt;

mod common;
mod create_table;

pub use common::TableNamePart;
pub use create_table::{ColumnDefnPart, CreateTablePart};

/// Specifies the type of a SQL part.
///
/// One part value can be built under several tags: a [`CreateTablePart`] is
/// asked for its `CreateTableTemporary` and `CreateTableNameIfNotExist`
/// clauses as well as for the whole statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    /// `[SCHEMA.]TABLE` name.
    TableName,
    /// A complete CREATE TABLE statement.
    CreateTable,
    /// Beginning of the CREATE TABLE statement, up to and including the name.
    CreateTableName,
    /// CREATE TABLE TEMPORARY clause.
    CreateTableTemporary,
    /// CREATE TABLE IF NOT EXISTS clause.
    CreateTableNameIfNotExist,
    /// CREATE TABLE ... AS clause.
    CreateTableAs,
    /// Column definition of a CREATE TABLE statement.
    ColumnDefn,
}

impl PartType {
    /// Every part type, in declaration order.
    pub const ALL: [PartType; 7] = [
        PartType::TableName,
        PartType::CreateTable,
        PartType::CreateTableName,
        PartType::CreateTableTemporary,
        PartType::CreateTableNameIfNotExist,
        PartType::CreateTableAs,
        PartType::ColumnDefn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PartType::TableName => "TableName",
            PartType::CreateTable => "CreateTable",
            PartType::CreateTableName => "CreateTableName",
            PartType::CreateTableTemporary => "CreateTableTemporary",
            PartType::CreateTableNameIfNotExist => "CreateTableNameIfNotExist",
            PartType::CreateTableAs => "CreateTableAs",
            PartType::ColumnDefn => "ColumnDefn",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of a SQL statement tree.
pub trait Part: Any + fmt::Debug + 'static {
    /// The part type this value represents.
    fn part_type(&self) -> PartType;

    /// Access to the concrete value, for factories that downcast.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete Rust type without module paths, used in
    /// diagnostics. Generic arguments are kept: `Wrapper<String>`.
    fn part_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strips the module path from every path inside a type name.
pub(crate) fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut short = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';') {
            short.push_str(last_segment(&full[start..i]));
            short.push(c);
            start = i + c.len_utf8();
        }
    }
    short.push_str(last_segment(&full[start..]));
    short
}

impl dyn Part {
    /// Returns the concrete part if it is of type `T`.
    pub fn downcast_ref<T: Part>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Part>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_stable() {
        assert_eq!(PartType::TableName.to_string(), "TableName");
        assert_eq!(
            PartType::CreateTableNameIfNotExist.to_string(),
            "CreateTableNameIfNotExist"
        );
        assert_eq!(PartType::ALL.len(), 7);
    }

    #[test]
    fn test_downcast_by_runtime_type() {
        let table = TableNamePart::new("foo");
        let part: &dyn Part = &table;

        assert!(part.is::<TableNamePart>());
        assert!(part.downcast_ref::<CreateTablePart>().is_none());
        assert_eq!(part.downcast_ref::<TableNamePart>().map(|t| t.name.as_str()), Some("foo"));
        assert_eq!(part.part_name(), "TableNamePart");
    }

    #[derive(Debug)]
    struct Wrapper<T>(T);

    impl<T: fmt::Debug + 'static> Part for Wrapper<T> {
        fn part_type(&self) -> PartType {
            PartType::TableName
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_generic_part_name_keeps_type_arguments() {
        assert_eq!(Wrapper(String::new()).part_name(), "Wrapper<String>");
        assert_eq!(
            Wrapper(vec![TableNamePart::new("foo")]).part_name(),
            "Wrapper<Vec<TableNamePart>>"
        );
        assert_eq!(
            short_type_name("core::option::Option<(alloc::string::String, u8)>"),
            "Option<(String, u8)>"
        );
        assert_eq!(short_type_name("&[sqlpart::part::Foo; 2]"), "&[Foo; 2]");
    }
}
