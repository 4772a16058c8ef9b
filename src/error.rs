//! Error types for sqlpart.

use std::fmt;

use thiserror::Error;

use crate::part::PartType;

/// A single problem recorded while rendering a part tree.
///
/// These never abort a build. They are collected by the
/// [`BuildResult`](crate::result::BuildResult) and reported together once the
/// walk is over.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No factory in the active chain could build the requested part.
    #[error(
        "UNIMPLEMENTED_SQL_PART_BUILDER_ERR part builder is not implemented. \
         type: {part_type} part: {part_name}"
    )]
    Unimplemented {
        part_type: PartType,
        part_name: String,
    },

    /// The output buffer rejected a write.
    #[error("failed to write SQL text: {0}")]
    Write(#[from] fmt::Error),

    /// A builder found something wrong with the part it was given.
    #[error("invalid {part_type} part: {message}")]
    Part {
        part_type: PartType,
        message: String,
    },
}

/// Classification of a [`BuildError`], usable without matching on messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    Unimplemented,
    Write,
    Part,
}

impl BuildError {
    /// Stable prefix of the message of [`BuildError::Unimplemented`].
    pub const UNIMPLEMENTED_MARKER: &'static str = "UNIMPLEMENTED_SQL_PART_BUILDER_ERR";

    /// Create a domain error reported by a part builder.
    pub fn part(part_type: PartType, message: impl Into<String>) -> Self {
        Self::Part {
            part_type,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> BuildErrorKind {
        match self {
            Self::Unimplemented { .. } => BuildErrorKind::Unimplemented,
            Self::Write(_) => BuildErrorKind::Write,
            Self::Part { .. } => BuildErrorKind::Part,
        }
    }
}

/// Every error collected during one build, together with the SQL that was
/// rendered despite them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlBuildError {
    sql: String,
    errors: Vec<BuildError>,
}

impl SqlBuildError {
    /// Stable prefix of the aggregate error message.
    pub const SENTINEL: &'static str = "SQL_PART_BUILDER_ERR";

    pub(crate) fn new(sql: String, errors: Vec<BuildError>) -> Self {
        Self { sql, errors }
    }

    /// The best-effort SQL rendered before and around the failures.
    pub fn partial_sql(&self) -> &str {
        &self.sql
    }

    /// The collected errors, in the order they occurred.
    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    /// True when at least one collected error is of the given kind.
    pub fn has_kind(&self, kind: BuildErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind() == kind)
    }
}

impl fmt::Display for SqlBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::SENTINEL)?;
        // One line per error; continuation lines are indented further.
        for err in &self.errors {
            write!(f, "\n  {}", err.to_string().replace('\n', "\n    "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SqlBuildError {}

/// The main error type for statement building and its front end.
#[derive(Debug, Error)]
pub enum SqlError {
    /// Rendering a statement produced one or more errors.
    #[error("SQL_BUILDER_ERROR error while building {statement}: {source}")]
    Build {
        statement: &'static str,
        #[source]
        source: SqlBuildError,
    },

    /// Failed to parse a table name or column definition.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlError {
    /// Create a parse error at the given position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// The partial SQL of a failed build, if this is a build error.
    pub fn partial_sql(&self) -> Option<&str> {
        match self {
            Self::Build { source, .. } => Some(source.partial_sql()),
            _ => None,
        }
    }
}

/// Result type alias for sqlpart operations.
pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SqlError::parse(5, "unexpected character");
        assert_eq!(
            err.to_string(),
            "Parse error at position 5: unexpected character"
        );
    }

    #[test]
    fn test_aggregate_display_one_line_per_error() {
        let err = SqlBuildError::new(
            "CREATE".to_string(),
            vec![
                BuildError::part(PartType::TableName, "name is empty"),
                BuildError::Write(fmt::Error),
            ],
        );

        let msg = err.to_string();
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines[0], "SQL_PART_BUILDER_ERR");
        assert_eq!(lines[1], "  invalid TableName part: name is empty");
        assert!(lines[2].starts_with("  failed to write SQL text"));
        assert_eq!(lines.len(), 3);
        assert!(err.has_kind(BuildErrorKind::Write));
        assert!(!err.has_kind(BuildErrorKind::Unimplemented));
    }

    #[test]
    fn test_multiline_message_stays_under_its_error() {
        let err = SqlBuildError::new(
            String::new(),
            vec![
                BuildError::part(PartType::TableName, "a\nb"),
                BuildError::part(PartType::ColumnDefn, "c"),
            ],
        );

        let msg = err.to_string();
        let top_level: Vec<&str> = msg
            .lines()
            .skip(1)
            .filter(|l| l.starts_with("  ") && !l.starts_with("   "))
            .collect();
        assert_eq!(top_level.len(), 2, "{msg}");
        assert_eq!(
            msg,
            "SQL_PART_BUILDER_ERR\n  invalid TableName part: a\n    b\n  invalid ColumnDefn part: c"
        );
    }

    #[test]
    fn test_unimplemented_message_is_marked() {
        let err = BuildError::Unimplemented {
            part_type: PartType::ColumnDefn,
            part_name: "TableNamePart".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "UNIMPLEMENTED_SQL_PART_BUILDER_ERR part builder is not implemented. \
             type: ColumnDefn part: TableNamePart"
        );
        assert!(err.to_string().starts_with(BuildError::UNIMPLEMENTED_MARKER));
    }

    #[test]
    fn test_build_error_keeps_partial_sql() {
        let err = SqlError::Build {
            statement: "CREATE TABLE",
            source: SqlBuildError::new("CREATE TABLE [UNIMPLEMENTED]".into(), vec![]),
        };
        assert_eq!(err.partial_sql(), Some("CREATE TABLE [UNIMPLEMENTED]"));
        assert!(err.to_string().starts_with("SQL_BUILDER_ERROR"));
    }
}
