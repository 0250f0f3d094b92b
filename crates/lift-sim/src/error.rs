use lift_core::ValidationError;
use lift_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("invalid building profile: {0}")]
    Validation(#[from] ValidationError),

    #[error("fleet setup failed: {0}")]
    Fleet(#[from] FleetError),
}

pub type SessionResult<T> = Result<T, SessionError>;
