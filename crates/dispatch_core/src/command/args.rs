/// Placeholder returned for positional arguments that were never supplied.
pub const MISSING_ARG: &str = "undefined";

/// Ordered positional arguments that can be passed to an operation.
///
/// Arguments are never validated. Operations read the positions they need,
/// and surplus arguments are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    params: Vec<String>,
}

impl Args {
    pub fn new(params: Vec<String>) -> Self {
        Self { params }
    }

    /// Returns the argument at `index`, or [`MISSING_ARG`] if there are not
    /// enough arguments.
    pub fn positional(&self, index: usize) -> &str {
        self.params
            .get(index)
            .map(String::as_str)
            .unwrap_or(MISSING_ARG)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Args {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
