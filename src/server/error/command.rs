use std::time::Duration;
use thiserror::Error;

use crate::server::error::{gateway::GatewayError, AppError};

/// Fault raised by a command handler.
///
/// Caught at the dispatcher boundary, logged, and answered with the generic
/// error reply.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A gateway call the handler could not recover from (usually the reply itself).
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Store or service failure.
    #[error(transparent)]
    Service(#[from] AppError),

    /// Handler exceeded the configured command timeout.
    #[error("Command timed out after {0:?}")]
    TimedOut(Duration),
}
