/// A deferred request to run an action on a receiver.
///
/// The action is kept as a name rather than an [`Action`](super::Action) so
/// that callers may ask for actions that no receiver knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Name of the requested action.
    pub action: String,
    /// Positional parameters, in the order that they are passed on.
    pub params: Vec<String>,
}

impl Command {
    pub fn new<A, I, S>(action: A, params: I) -> Self
    where
        A: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            action: action.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_keeps_parameter_order() {
        let command = Command::new("requestInfo", ["Ferrari", "14523"]);
        assert_eq!(command.action, "requestInfo");
        assert_eq!(command.params, vec!["Ferrari".to_owned(), "14523".to_owned()]);
    }
}
