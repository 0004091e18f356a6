pub mod command;
mod dispatch;
mod error;
mod receiver;

pub use dispatch::{execute, try_execute};
pub use error::{DispatchError, DispatchResult};
pub use receiver::Receiver;
