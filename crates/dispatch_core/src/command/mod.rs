mod action;
mod args;
mod io;
mod operation;
mod record;

pub use action::Action;
pub use args::{Args, MISSING_ARG};
pub use io::Io;
pub use operation::{BinaryOperation, Operation};
pub use record::Command;

#[cfg(test)]
pub use operation::MockOperation;
