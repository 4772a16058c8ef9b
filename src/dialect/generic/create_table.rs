use crate::builder::PartBuilder;
use crate::error::BuildError;
use crate::factory::PartBuilderFactory;
use crate::option::BuildOption;
use crate::part::{CreateTablePart, Part, PartType};
use crate::result::BuildResult;

/// Creates builders for the clauses of a CREATE TABLE statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateTableFactory;

impl PartBuilderFactory for CreateTableFactory {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        let part = part.downcast_ref::<CreateTablePart>()?;
        let builder: Box<dyn PartBuilder + 'p> = match part_type {
            PartType::CreateTable => Box::new(CreateTableBuilder { part }),
            PartType::CreateTableName => Box::new(CreateTableNameBuilder { part }),
            PartType::CreateTableTemporary => Box::new(CreateTableTemporaryBuilder { part }),
            PartType::CreateTableNameIfNotExist => Box::new(CreateTableIfNotExistsBuilder { part }),
            PartType::CreateTableAs => Box::new(CreateTableAsBuilder { part }),
            PartType::TableName | PartType::ColumnDefn => return None,
        };
        Some(builder)
    }
}

/// Builds a whole CREATE TABLE statement.
#[derive(Debug)]
pub struct CreateTableBuilder<'p> {
    part: &'p CreateTablePart,
}

impl PartBuilder for CreateTableBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;

        res.build(PartType::CreateTableName, part, opts);

        let columns = part.column_defns();
        if !columns.is_empty() {
            let separator = [BuildOption::prefix(", ")];
            res.print(" (");
            for (i, column) in columns.iter().enumerate() {
                let opts: &[BuildOption] = if i == 0 { &[] } else { &separator };
                res.build(PartType::ColumnDefn, column, opts);
            }
            res.print(")");
        }

        res.build(PartType::CreateTableAs, part, &[BuildOption::space()]);
    }
}

/// Builds `CREATE [TEMPORARY] [IF NOT EXISTS] TABLE name`.
#[derive(Debug)]
pub struct CreateTableNameBuilder<'p> {
    part: &'p CreateTablePart,
}

impl PartBuilder for CreateTableNameBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        let part = self.part;
        let space = [BuildOption::space()];

        res.print_with_options(opts, "CREATE");
        res.build(PartType::CreateTableTemporary, part, &space);
        res.build(PartType::CreateTableNameIfNotExist, part, &space);
        res.print(" TABLE");

        match &part.table_name {
            Some(table_name) => res.build(PartType::TableName, table_name, &space),
            None => res.append_error(BuildError::part(
                PartType::CreateTableName,
                "table name is required",
            )),
        }
    }
}

#[derive(Debug)]
pub struct CreateTableTemporaryBuilder<'p> {
    part: &'p CreateTablePart,
}

impl PartBuilder for CreateTableTemporaryBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        if self.part.temporary {
            res.print_with_options(opts, "TEMPORARY");
        }
    }
}

#[derive(Debug)]
pub struct CreateTableIfNotExistsBuilder<'p> {
    part: &'p CreateTablePart,
}

impl PartBuilder for CreateTableIfNotExistsBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        if self.part.if_not_exists {
            res.print_with_options(opts, "IF NOT EXISTS");
        }
    }
}

/// Builds `AS <query>`, with the query text emitted as given.
#[derive(Debug)]
pub struct CreateTableAsBuilder<'p> {
    part: &'p CreateTablePart,
}

impl PartBuilder for CreateTableAsBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        match self.part.as_query.as_deref().map(str::trim) {
            Some("") => res.append_error(BuildError::part(
                PartType::CreateTableAs,
                "AS query is empty",
            )),
            Some(query) => {
                res.print_fmt_with_options(opts, format_args!("AS {}", query));
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::TableNamePart;

    #[test]
    fn test_factory_only_builds_create_table_parts() {
        let create = CreateTablePart::new();
        let table = TableNamePart::new("foo");

        for part_type in [
            PartType::CreateTable,
            PartType::CreateTableName,
            PartType::CreateTableTemporary,
            PartType::CreateTableNameIfNotExist,
            PartType::CreateTableAs,
        ] {
            assert!(CreateTableFactory.new_part_builder(part_type, &create).is_some());
            assert!(CreateTableFactory.new_part_builder(part_type, &table).is_none());
        }
        assert!(CreateTableFactory.new_part_builder(PartType::TableName, &create).is_none());
    }

    #[test]
    fn test_only_create_table_factory_leaves_names_unimplemented() {
        let mut part = CreateTablePart::new();
        part.table_name = Some(TableNamePart::new("foo"));

        let mut res = BuildResult::new(&CreateTableFactory);
        res.build(PartType::CreateTable, &part, &[]);

        let err = res.result().unwrap_err();
        assert_eq!(err.partial_sql(), "CREATE TABLE [UNIMPLEMENTED]");
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_blank_as_query_is_reported() {
        let mut part = CreateTablePart::new();
        part.as_query = Some("  ".to_string());

        let mut res = BuildResult::new(&CreateTableFactory);
        res.build(PartType::CreateTableAs, &part, &[BuildOption::space()]);
        assert_eq!(res.sql(), "");
        assert_eq!(res.errors().len(), 1);
    }
}
