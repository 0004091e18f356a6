use thiserror::Error;

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors that can occur while resolving a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The action name does not match any operation registered with the receiver.
    ///
    /// Contains the requested action name as-is.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
