//! Dialect-agnostic part builders.
//!
//! Not meant to be used on its own by callers: other dialects chain
//! [`GenericFactory`] behind their own factory to reuse these builders.

use crate::builder::PartBuilder;
use crate::factory::{FactoryChain, PartBuilderFactory};
use crate::part::{Part, PartType};

mod common;
mod create_table;

pub use common::{ColumnDefnBuilder, CommonFactory, TableNameBuilder};
pub use create_table::{
    CreateTableAsBuilder, CreateTableBuilder, CreateTableFactory, CreateTableIfNotExistsBuilder,
    CreateTableNameBuilder, CreateTableTemporaryBuilder,
};

/// Builds every part type in the generic dialect.
#[derive(Debug)]
pub struct GenericFactory {
    factories: FactoryChain,
}

impl GenericFactory {
    pub fn new() -> Self {
        Self {
            factories: FactoryChain::new()
                .with(CommonFactory)
                .with(CreateTableFactory),
        }
    }
}

impl Default for GenericFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PartBuilderFactory for GenericFactory {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        self.factories.new_part_builder(part_type, part)
    }
}
