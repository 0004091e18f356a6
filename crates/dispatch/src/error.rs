use dispatch_core::DispatchError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}
