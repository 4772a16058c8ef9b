use crate::builder::PartBuilder;
use crate::error::BuildError;
use crate::factory::PartBuilderFactory;
use crate::option::BuildOption;
use crate::part::{ColumnDefnPart, Part, PartType, TableNamePart};
use crate::result::BuildResult;

/// Creates builders for parts shared by several statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonFactory;

impl PartBuilderFactory for CommonFactory {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        match part_type {
            PartType::TableName => part
                .downcast_ref::<TableNamePart>()
                .map(|part| Box::new(TableNameBuilder { part }) as Box<dyn PartBuilder + 'p>),
            PartType::ColumnDefn => part
                .downcast_ref::<ColumnDefnPart>()
                .map(|part| Box::new(ColumnDefnBuilder { part }) as Box<dyn PartBuilder + 'p>),
            _ => None,
        }
    }
}

/// Builds `[schema.]name` verbatim.
#[derive(Debug)]
pub struct TableNameBuilder<'p> {
    part: &'p TableNamePart,
}

impl PartBuilder for TableNameBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;
        if part.name.is_empty() {
            res.append_error(BuildError::part(PartType::TableName, "table name is empty"));
            return;
        }

        match part.schema.as_deref().filter(|s| !s.is_empty()) {
            Some(schema) => {
                res.print_fmt_with_options(opts, format_args!("{}.{}", schema, part.name));
            }
            None => {
                res.print_with_options(opts, &part.name);
            }
        }
    }
}

/// Builds `name[ TYPE][ NOT NULL]`.
#[derive(Debug)]
pub struct ColumnDefnBuilder<'p> {
    part: &'p ColumnDefnPart,
}

impl PartBuilder for ColumnDefnBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;
        if part.name.is_empty() {
            res.append_error(BuildError::part(PartType::ColumnDefn, "column name is empty"));
            return;
        }

        res.print_with_options(opts, &part.name);
        if let Some(data_type) = &part.data_type {
            res.print_fmt(format_args!(" {}", data_type));
        }
        if part.not_null {
            res.print(" NOT NULL");
        }
    }
}
