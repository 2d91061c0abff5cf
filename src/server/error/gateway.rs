use thiserror::Error;

/// Failure of a call against the Discord gateway collaborator.
///
/// Handlers turn these into a "Failed to ..." reply; they never reach the dispatcher
/// unless the reply itself fails.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to the size of `serenity::Error`.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The guild is neither cached nor retrievable over HTTP.
    #[error("Guild {0} is not available")]
    GuildUnavailable(u64),

    /// Request refused without a Serenity error, e.g. by the in-memory gateway used in tests.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl From<serenity::Error> for GatewayError {
    fn from(err: serenity::Error) -> Self {
        GatewayError::Discord(Box::new(err))
    }
}
