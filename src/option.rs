//! Options passed to a single part build.

/// A modifier for one [`BuildResult::build`](crate::result::BuildResult::build)
/// call.
///
/// Options are never stored on a part. A builder receives whatever options
/// its caller passed and uses only the ones it understands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildOption {
    /// Text emitted before the part's own output, if the part emits any.
    Prefix(String),
}

impl BuildOption {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        BuildOption::Prefix(prefix.into())
    }

    /// Shorthand for a single space prefix, the usual clause separator.
    pub fn space() -> Self {
        BuildOption::Prefix(" ".to_string())
    }
}

/// Returns the first prefix found in `opts`.
pub fn find_prefix(opts: &[BuildOption]) -> Option<&str> {
    opts.iter().find_map(|opt| match opt {
        BuildOption::Prefix(prefix) => Some(prefix.as_str()),
    })
}
