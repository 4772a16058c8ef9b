use crate::builder::PartBuilder;
use crate::error::BuildError;
use crate::option::BuildOption;
use crate::part::{ColumnDefnPart, PartType, TableNamePart};
use crate::result::BuildResult;

use super::quote_identifier;

/// Builds `[schema.]name` with MySQL identifier quoting.
#[derive(Debug)]
pub struct MySqlTableNameBuilder<'p> {
    part: &'p TableNamePart,
}

impl<'p> MySqlTableNameBuilder<'p> {
    pub fn new(part: &'p TableNamePart) -> Self {
        Self { part }
    }
}

impl PartBuilder for MySqlTableNameBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;
        if part.name.is_empty() {
            res.append_error(BuildError::part(PartType::TableName, "table name is empty"));
            return;
        }

        let name = quote_identifier(&part.name);
        match part.schema.as_deref().filter(|s| !s.is_empty()) {
            Some(schema) => {
                res.print_fmt_with_options(
                    opts,
                    format_args!("{}.{}", quote_identifier(schema), name),
                );
            }
            None => {
                res.print_with_options(opts, name);
            }
        }
    }
}

/// Builds a column definition with MySQL identifier quoting.
#[derive(Debug)]
pub struct MySqlColumnDefnBuilder<'p> {
    part: &'p ColumnDefnPart,
}

impl<'p> MySqlColumnDefnBuilder<'p> {
    pub fn new(part: &'p ColumnDefnPart) -> Self {
        Self { part }
    }
}

impl PartBuilder for MySqlColumnDefnBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;
        if part.name.is_empty() {
            res.append_error(BuildError::part(PartType::ColumnDefn, "column name is empty"));
            return;
        }

        res.print_with_options(opts, quote_identifier(&part.name));
        if let Some(data_type) = &part.data_type {
            res.print_fmt(format_args!(" {}", data_type));
        }
        if part.not_null {
            res.print(" NOT NULL");
        }
    }
}
