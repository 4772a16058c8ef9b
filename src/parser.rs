//! Parsers for the short text forms accepted by the statement front end and
//! the CLI.
//!
//! ```text
//! shop.orders        table `orders` in schema `shop`
//! id:INT!            column `id`, type `INT`, NOT NULL
//! name:VARCHAR(255)  column `name`, type `VARCHAR(255)`
//! ```
//!
//! These only split names; they do not validate SQL.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use crate::error::{SqlError, SqlResult};
use crate::part::{ColumnDefnPart, TableNamePart};

/// Parse `table` or `schema.table`.
pub fn parse_table_name(input: &str) -> SqlResult<TableNamePart> {
    let trimmed = input.trim();
    finish(trimmed, table_name(trimmed))
}

/// Parse `name[:TYPE][!]`.
///
/// `_` in the type is read as a space so multi-word types can be written
/// without quoting, e.g. `at:DOUBLE_PRECISION`.
pub fn parse_column_defn(input: &str) -> SqlResult<ColumnDefnPart> {
    let trimmed = input.trim();
    finish(trimmed, column_defn(trimmed))
}

fn finish<T>(input: &str, parsed: IResult<&str, T>) -> SqlResult<T> {
    match parsed {
        Ok(("", value)) => Ok(value),
        Ok((remaining, _)) => Err(SqlError::parse(
            input.len() - remaining.len(),
            format!("Unexpected trailing content: '{}'", remaining),
        )),
        Err(e) => Err(SqlError::parse(0, format!("Parse failed: {:?}", e))),
    }
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '$')(input)
}

fn table_name(input: &str) -> IResult<&str, TableNamePart> {
    map(
        pair(identifier, opt(preceded(char('.'), identifier))),
        |(first, second)| match second {
            Some(name) => TableNamePart::new(name).with_schema(first),
            None => TableNamePart::new(first),
        },
    )(input)
}

fn data_type(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        identifier,
        opt(tuple((
            char('('),
            take_while(|c: char| c.is_ascii_digit() || c == ',' || c == ' '),
            char(')'),
        ))),
    ))(input)
}

fn column_defn(input: &str) -> IResult<&str, ColumnDefnPart> {
    let (input, name) = identifier(input)?;
    let (input, data_type) = opt(preceded(terminated(char(':'), multispace0), data_type))(input)?;
    let (input, not_null) = opt(char('!'))(input)?;

    let mut column = ColumnDefnPart::new(name);
    if let Some(data_type) = data_type {
        column = column.data_type(data_type.replace('_', " "));
    }
    if not_null.is_some() {
        column = column.not_null();
    }
    Ok((input, column))
}
