//! The part builder contract and the fallback builder.

use crate::error::BuildError;
use crate::option::BuildOption;
use crate::part::{Part, PartType};
use crate::result::BuildResult;

/// Placeholder written where a part could not be built.
pub const UNIMPLEMENTED_PLACEHOLDER: &str = "[UNIMPLEMENTED]";

/// Renders one part into a [`BuildResult`].
///
/// A builder is created by a factory for exactly one part and used once.
/// Child parts are rendered by calling back into [`BuildResult::build`],
/// never by constructing another builder directly. Problems are recorded with
/// [`BuildResult::append_error`]; a builder never aborts the walk.
pub trait PartBuilder {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]);
}

/// Used when no factory in the chain can build a part.
#[derive(Debug)]
pub struct UnimplementedBuilder<'p> {
    part_type: PartType,
    part: &'p dyn Part,
}

impl<'p> UnimplementedBuilder<'p> {
    pub fn new(part_type: PartType, part: &'p dyn Part) -> Self {
        Self { part_type, part }
    }
}

impl PartBuilder for UnimplementedBuilder<'_> {
    fn build(&self, res: &mut BuildResult<'_>, opts: &[BuildOption]) {
        res.print_with_options(opts, UNIMPLEMENTED_PLACEHOLDER);
        res.append_error(BuildError::Unimplemented {
            part_type: self.part_type,
            part_name: self.part.part_name(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildErrorKind;
    use crate::factory::FactoryChain;
    use crate::part::TableNamePart;

    #[test]
    fn test_unimplemented_prints_placeholder_and_records_error() {
        let factory = FactoryChain::new();
        let mut res = BuildResult::new(&factory);
        let part = TableNamePart::new("foo");

        UnimplementedBuilder::new(PartType::ColumnDefn, &part)
            .build(&mut res, &[BuildOption::space()]);

        let err = res.result().unwrap_err();
        assert_eq!(err.partial_sql(), " [UNIMPLEMENTED]");
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].kind(), BuildErrorKind::Unimplemented);
        let msg = err.errors()[0].to_string();
        assert!(msg.contains("ColumnDefn"), "{msg}");
        assert!(msg.contains("TableNamePart"), "{msg}");
    }
}
