//! Builder factories and factory chains.

use std::fmt;
use std::sync::Arc;

use crate::builder::PartBuilder;
use crate::part::{Part, PartType};

/// Resolves a part builder for a part type and part.
///
/// Implementations must look at the runtime type of `part`, not only at
/// `part_type`, since the same part may be requested under several tags.
/// Returning `None` means "not mine" and is never an error by itself.
pub trait PartBuilderFactory: Send + Sync {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>>;
}

impl<F: PartBuilderFactory + ?Sized> PartBuilderFactory for Box<F> {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        (**self).new_part_builder(part_type, part)
    }
}

impl<F: PartBuilderFactory + ?Sized> PartBuilderFactory for Arc<F> {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        (**self).new_part_builder(part_type, part)
    }
}

/// An ordered list of factories where the first match wins.
///
/// Dialects are assembled as `[dialect factory, generic factory]` so the
/// dialect only implements the part types it overrides. A chain is itself a
/// factory and can be nested inside another chain.
#[derive(Default)]
pub struct FactoryChain {
    factories: Vec<Box<dyn PartBuilderFactory>>,
}

impl FactoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a factory with lower precedence than those already added.
    pub fn with(mut self, factory: impl PartBuilderFactory + 'static) -> Self {
        self.push(factory);
        self
    }

    pub fn push(&mut self, factory: impl PartBuilderFactory + 'static) {
        self.factories.push(Box::new(factory));
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FactoryChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryChain")
            .field("factories", &self.factories.len())
            .finish()
    }
}

impl PartBuilderFactory for FactoryChain {
    fn new_part_builder<'p>(
        &self,
        part_type: PartType,
        part: &'p dyn Part,
    ) -> Option<Box<dyn PartBuilder + 'p>> {
        self.factories
            .iter()
            .find_map(|factory| factory.new_part_builder(part_type, part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::BuildOption;
    use crate::part::{CreateTablePart, TableNamePart};
    use crate::result::BuildResult;
    use pretty_assertions::assert_eq;

    /// Builds table names by printing a fixed label.
    struct Labeled(&'static str);

    struct LabelBuilder(&'static str);

    impl PartBuilder for LabelBuilder {
        fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
            res.print_with_options(opts, self.0);
        }
    }

    impl PartBuilderFactory for Labeled {
        fn new_part_builder<'p>(
            &self,
            _part_type: PartType,
            part: &'p dyn Part,
        ) -> Option<Box<dyn PartBuilder + 'p>> {
            part.downcast_ref::<TableNamePart>()
                .map(|_| Box::new(LabelBuilder(self.0)) as Box<dyn PartBuilder + 'p>)
        }
    }

    /// Never matches anything.
    struct Empty;

    impl PartBuilderFactory for Empty {
        fn new_part_builder<'p>(
            &self,
            _part_type: PartType,
            _part: &'p dyn Part,
        ) -> Option<Box<dyn PartBuilder + 'p>> {
            None
        }
    }

    fn render(factory: &dyn PartBuilderFactory, part: &dyn Part) -> String {
        let mut res = BuildResult::new(factory);
        res.build(PartType::TableName, part, &[]);
        res.sql().to_string()
    }

    #[test]
    fn test_first_match_wins() {
        let chain = FactoryChain::new().with(Labeled("A")).with(Labeled("B"));
        assert_eq!(render(&chain, &TableNamePart::new("foo")), "A");

        let chain = FactoryChain::new().with(Labeled("B")).with(Labeled("A"));
        assert_eq!(render(&chain, &TableNamePart::new("foo")), "B");
    }

    #[test]
    fn test_no_match_falls_through() {
        let chain = FactoryChain::new().with(Empty).with(Labeled("B"));
        assert_eq!(render(&chain, &TableNamePart::new("foo")), "B");
    }

    #[test]
    fn test_exhausted_chain_yields_none() {
        let chain = FactoryChain::new().with(Empty).with(Labeled("B"));
        let part = CreateTablePart::new();
        assert!(chain.new_part_builder(PartType::CreateTable, &part).is_none());
        assert!(FactoryChain::new().new_part_builder(PartType::TableName, &part).is_none());
    }

    #[test]
    fn test_chains_nest() {
        let inner = FactoryChain::new().with(Empty).with(Labeled("inner"));
        let outer = FactoryChain::new().with(inner).with(Labeled("outer"));
        assert_eq!(outer.len(), 2);
        assert_eq!(render(&outer, &TableNamePart::new("foo")), "inner");
    }

    #[test]
    fn test_shared_chain_builds_concurrently() {
        let chain = Arc::new(
            FactoryChain::new()
                .with(Empty)
                .with(crate::dialect::generic::GenericFactory::new()),
        );

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let chain = Arc::clone(&chain);
                std::thread::spawn(move || {
                    let table = TableNamePart::new(format!("t{i}")).with_schema("s");
                    let mut res = BuildResult::new(&chain);
                    res.build(PartType::TableName, &table, &[]);
                    if i % 2 == 0 {
                        res.build(PartType::ColumnDefn, &table, &[BuildOption::space()]);
                    }
                    (i, res.sql().to_string(), res.errors().len())
                })
            })
            .collect();

        for handle in handles {
            let (i, sql, errors) = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(sql, format!("s.t{i} [UNIMPLEMENTED]"));
                assert_eq!(errors, 1);
            } else {
                assert_eq!(sql, format!("s.t{i}"));
                assert_eq!(errors, 0);
            }
        }
    }
}
