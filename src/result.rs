//! The build accumulator shared by every builder in one statement build.

use std::fmt::{self, Display, Write};

use crate::builder::{PartBuilder, UnimplementedBuilder};
use crate::error::{BuildError, SqlBuildError};
use crate::factory::PartBuilderFactory;
use crate::option::{BuildOption, find_prefix};
use crate::part::{Part, PartType};

/// Collects the SQL text and every error produced while building a part
/// tree.
///
/// Builders write through the `print*` methods and render child parts with
/// [`build`](Self::build). Nothing here fails: write errors and builder
/// errors are recorded and the walk continues, so [`result`](Self::result)
/// reports all problems of a build at once.
pub struct BuildResult<'f> {
    factory: &'f dyn PartBuilderFactory,
    sql: String,
    errors: Vec<BuildError>,
}

impl<'f> BuildResult<'f> {
    pub fn new(factory: &'f dyn PartBuilderFactory) -> Self {
        Self {
            factory,
            sql: String::new(),
            errors: Vec::new(),
        }
    }

    /// Appends `value` to the SQL. Returns the number of bytes written.
    pub fn print(&mut self, value: impl Display) -> usize {
        self.print_fmt(format_args!("{}", value))
    }

    /// Appends formatted text to the SQL. Returns the number of bytes written.
    ///
    /// ```
    /// # use sqlpart::prelude::*;
    /// let factory = FactoryChain::new();
    /// let mut res = BuildResult::new(&factory);
    /// res.print_fmt(format_args!("{}.{}", "s", "foo"));
    /// assert_eq!(res.result().unwrap(), "s.foo");
    /// ```
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        let before = self.sql.len();
        if let Err(err) = self.sql.write_fmt(args) {
            self.append_error(BuildError::Write(err));
        }
        self.sql.len() - before
    }

    /// Prints the prefix option from `opts`, if there is one.
    pub fn print_prefix(&mut self, opts: &[BuildOption]) -> usize {
        match find_prefix(opts) {
            Some(prefix) => self.print(prefix),
            None => 0,
        }
    }

    /// Prints the prefix option from `opts` followed by `value`.
    ///
    /// This is how builders emit their own fragment.
    pub fn print_with_options(&mut self, opts: &[BuildOption], value: impl Display) -> usize {
        self.print_prefix(opts) + self.print(value)
    }

    /// Prints the prefix option from `opts` followed by formatted text.
    pub fn print_fmt_with_options(
        &mut self,
        opts: &[BuildOption],
        args: fmt::Arguments<'_>,
    ) -> usize {
        self.print_prefix(opts) + self.print_fmt(args)
    }

    /// Records an error. Errors keep the order they were appended in.
    pub fn append_error(&mut self, err: BuildError) {
        self.errors.push(err);
    }

    /// Builds `part` as `part_type` into this result.
    ///
    /// The builder is resolved through the factory this result was created
    /// with. When no factory matches, an [`UnimplementedBuilder`] is used so
    /// a placeholder is written and an error recorded.
    pub fn build(&mut self, part_type: PartType, part: &dyn Part, opts: &[BuildOption]) {
        let factory = self.factory;
        match factory.new_part_builder(part_type, part) {
            Some(builder) => {
                tracing::debug!("Building {} from {}", part_type, part.part_name());
                builder.build(self, opts);
            }
            None => {
                tracing::warn!(
                    "No part builder for {} from {}",
                    part_type,
                    part.part_name()
                );
                UnimplementedBuilder::new(part_type, part).build(self, opts);
            }
        }
    }

    /// The SQL written so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The errors recorded so far.
    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the built SQL, or an aggregate of every recorded error that
    /// still carries the partial SQL.
    pub fn result(&self) -> Result<String, SqlBuildError> {
        if self.errors.is_empty() {
            Ok(self.sql.clone())
        } else {
            Err(SqlBuildError::new(self.sql.clone(), self.errors.clone()))
        }
    }

    /// Like [`result`](Self::result) without cloning.
    pub fn into_result(self) -> Result<String, SqlBuildError> {
        if self.errors.is_empty() {
            Ok(self.sql)
        } else {
            Err(SqlBuildError::new(self.sql, self.errors))
        }
    }
}

impl fmt::Debug for BuildResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildResult")
            .field("sql", &self.sql)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
