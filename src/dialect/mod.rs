//! SQL dialects.
//!
//! Each dialect is a factory chain. The generic dialect knows how to build
//! every part type; other dialects put their own factory in front of the
//! generic one and only handle the part types whose text differs.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::factory::{FactoryChain, PartBuilderFactory};
use crate::part::PartType;

pub mod generic;
pub mod mysql;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Generic,
    #[value(name = "mysql")]
    #[serde(rename = "mysql")]
    MySql,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Generic, Dialect::MySql];

    /// The factory that builds parts for this dialect.
    pub fn factory(&self) -> Box<dyn PartBuilderFactory> {
        match self {
            Dialect::Generic => Box::new(generic::GenericFactory::new()),
            Dialect::MySql => Box::new(mysql::new_factory()),
        }
    }

    /// Part types this dialect builds itself instead of using the generic
    /// builders.
    pub fn overrides(&self) -> &'static [PartType] {
        match self {
            Dialect::Generic => &[],
            Dialect::MySql => mysql::OVERRIDES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Puts `dialect` in front of the generic factory.
pub fn with_generic_fallback(dialect: impl PartBuilderFactory + 'static) -> FactoryChain {
    FactoryChain::new()
        .with(dialect)
        .with(generic::GenericFactory::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_names() {
        assert_eq!(Dialect::default(), Dialect::Generic);
        assert_eq!(Dialect::MySql.to_string(), "mysql");
        assert!(Dialect::Generic.overrides().is_empty());
        assert!(Dialect::MySql.overrides().contains(&PartType::TableName));
    }

    #[test]
    fn test_dialect_from_toml_value() {
        #[derive(Deserialize)]
        struct Wrapper {
            dialect: Dialect,
        }

        let w: Wrapper = toml::from_str("dialect = \"mysql\"").unwrap();
        assert_eq!(w.dialect, Dialect::MySql);
        let w: Wrapper = toml::from_str("dialect = \"generic\"").unwrap();
        assert_eq!(w.dialect, Dialect::Generic);
    }
}
