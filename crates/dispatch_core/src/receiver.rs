use std::{collections::HashMap, fmt::Debug, sync::Arc};

use crate::{
    command::{Action, Command, Operation},
    DispatchError, DispatchResult,
};

/// A receiver holds the operations that perform the actual work of commands.
///
/// Operations are registered per [`Action`]. A receiver is immutable once it
/// has been shared, and cloning it only clones references to its operations.
#[derive(Clone)]
pub struct Receiver {
    name: String,
    operations: HashMap<Action, Arc<dyn Operation>>,
}

impl Receiver {
    /// Constructs a new receiver without any operations.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            operations: HashMap::new(),
        }
    }

    /// Returns the receiver's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers an operation and returns the receiver.
    pub fn with<O: Operation + 'static>(mut self, action: Action, operation: O) -> Self {
        self.register(action, operation);
        self
    }

    /// Registers an operation for an action.
    ///
    /// An operation previously registered for the same action is replaced.
    pub fn register<O: Operation + 'static>(&mut self, action: Action, operation: O) {
        self.operations.insert(action, Arc::new(operation));
    }

    /// Returns the operation registered for an action, if any.
    pub fn operation(&self, action: Action) -> Option<&dyn Operation> {
        self.operations.get(&action).map(|operation| operation.as_ref())
    }

    /// Returns all registered actions in [`Action::ALL`] order.
    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.operations.contains_key(action))
            .collect()
    }

    /// Resolves an action name to a registered operation.
    pub fn resolve(&self, name: &str) -> DispatchResult<&dyn Operation> {
        let action: Action = name.parse()?;
        self.operation(action)
            .ok_or_else(|| DispatchError::UnknownAction(name.to_owned()))
    }

    /// Runs the operation registered for an action name with some parameters.
    ///
    /// Returns `None` if the receiver has no operation by that name.
    pub fn execute<I, S>(&self, name: &str, params: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        crate::execute(self, &Command::new(name, params))
    }
}

impl Debug for Receiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Receiver")
            .field("name", &self.name)
            .field("actions", &self.actions())
            .finish()
    }
}
