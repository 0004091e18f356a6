use log::trace;

use crate::{
    command::{Args, Command},
    DispatchResult, Receiver,
};

/// Executes a command against a receiver.
///
/// Returns the operation's result, or `None` if the receiver has no
/// operation for the command's action. Unknown actions are not errors.
pub fn execute(receiver: &Receiver, command: &Command) -> Option<String> {
    try_execute(receiver, command).ok()
}

/// Executes a command against a receiver, failing on unknown actions.
pub fn try_execute(receiver: &Receiver, command: &Command) -> DispatchResult<String> {
    let operation = receiver.resolve(&command.action)?;
    trace!(
        "dispatching {} to {} with {} parameter(s)",
        command.action,
        receiver.name(),
        command.params.len()
    );

    let args = Args::from_iter(command.params.iter().cloned());
    Ok(operation.run(&args))
}
