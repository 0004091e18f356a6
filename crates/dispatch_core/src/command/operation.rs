#[cfg(test)]
use mockall::automock;

use super::Args;

/// An operation is something that a receiver can run on behalf of a command.
///
/// Operations are expected to be pure functions of their arguments.
#[cfg_attr(test, automock)]
pub trait Operation: Send + Sync {
    /// Runs the operation and returns a description of the outcome.
    fn run(&self, args: &Args) -> String;
}

/// An operation backed by a plain function taking a `model` and an `id`.
///
/// The first two positional arguments are forwarded, in order.
#[derive(Clone, Copy)]
pub struct BinaryOperation(pub fn(&str, &str) -> String);

impl Operation for BinaryOperation {
    fn run(&self, args: &Args) -> String {
        (self.0)(args.positional(0), args.positional(1))
    }
}
