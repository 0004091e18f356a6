use std::{fmt::Display, str::FromStr};

use crate::{DispatchError, DispatchResult};

/// Actions that a receiver may perform on behalf of a caller.
///
/// Each action has a canonical name which is used when a command refers to
/// the action by string. Names are matched exactly, including case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Request information about a vehicle.
    RequestInfo,
    /// Buy a vehicle.
    BuyVehicle,
    /// Arrange a viewing of a vehicle.
    ArrangeViewing,
}

impl Action {
    /// Every known action, in declaration order.
    pub const ALL: [Action; 3] = [
        Action::RequestInfo,
        Action::BuyVehicle,
        Action::ArrangeViewing,
    ];

    /// Returns the action's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::RequestInfo => "requestInfo",
            Action::BuyVehicle => "buyVehicle",
            Action::ArrangeViewing => "arrangeViewing",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Action {
    type Err = DispatchError;

    fn from_str(name: &str) -> DispatchResult<Self> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| DispatchError::UnknownAction(name.to_owned()))
    }
}
