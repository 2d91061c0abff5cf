use chrono::{DateTime, Utc};

/// A Discord user as seen by command handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatUser {
    pub id: u64,
    pub name: String,
    /// `name#discriminator` for legacy accounts, the plain username otherwise.
    pub tag: String,
    pub discriminator: Option<u16>,
    pub bot: bool,
    pub avatar_url: Option<String>,
    /// Account creation time, derived from the snowflake.
    pub created_at: DateTime<Utc>,
}

/// Inbound chat message handed to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub id: u64,
    pub channel_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub author: ChatUser,
    pub content: String,
    /// Users mentioned in the message, in the order Discord reports them.
    pub mentions: Vec<ChatUser>,
    pub created_at: DateTime<Utc>,
}

impl IncomingMessage {
    /// The implicit target of a moderation command.
    pub fn first_mention(&self) -> Option<&ChatUser> {
        self.mentions.first()
    }
}

/// Handle to a message the bot sent, used for later edits and deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: u64,
    pub message_id: u64,
    pub created_at: DateTime<Utc>,
}
