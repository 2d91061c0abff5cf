//! Discord gateway collaborator.
//!
//! Command handlers, the unmute scheduler and the dashboard API talk to Discord
//! exclusively through [`DiscordGateway`]. Production code uses
//! [`serenity_gateway::SerenityGateway`] built from the client's HTTP handle and cache;
//! tests use the recording `FakeGateway`.

#[cfg(test)]
pub mod fake;
pub mod serenity_gateway;

use serenity::async_trait;

use crate::server::{
    error::gateway::GatewayError,
    model::{
        member::{CacheCounts, GuildOverview, MemberInfo},
        message::{IncomingMessage, SentMessage},
        reply::Reply,
    },
};

#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Replies to `message` in its channel, referencing it.
    async fn reply(&self, message: &IncomingMessage, reply: Reply)
        -> Result<SentMessage, GatewayError>;

    /// Posts plain text to a channel without a message reference.
    async fn send(&self, channel_id: u64, content: &str) -> Result<SentMessage, GatewayError>;

    /// Replaces the text content of a message the bot sent.
    async fn edit(&self, sent: &SentMessage, content: &str) -> Result<(), GatewayError>;

    async fn delete(&self, sent: &SentMessage) -> Result<(), GatewayError>;

    /// Resolves a user's membership in a guild.
    ///
    /// # Returns
    /// - `Ok(Some(MemberInfo))` - The user is a member
    /// - `Ok(None)` - The user is not a member of the guild
    /// - `Err(GatewayError)` - Discord could not be queried
    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberInfo>, GatewayError>;

    /// Id of the bot's own account.
    fn current_user_id(&self) -> u64;

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError>;

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError>;

    /// Sets the server-side voice mute flag of a member.
    async fn set_voice_mute(
        &self,
        guild_id: u64,
        user_id: u64,
        muted: bool,
    ) -> Result<(), GatewayError>;

    /// Sets the server-side voice deafen flag of a member.
    async fn set_voice_deaf(
        &self,
        guild_id: u64,
        user_id: u64,
        deafened: bool,
    ) -> Result<(), GatewayError>;

    /// Deletes up to `count` of the most recent messages in a channel.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages actually deleted
    async fn bulk_delete(&self, channel_id: u64, count: u64) -> Result<usize, GatewayError>;

    /// Cached overview of a guild, `None` if it is not in the cache.
    fn guild_overview(&self, guild_id: u64) -> Option<GuildOverview>;

    /// Overviews of every cached guild.
    fn list_guilds(&self) -> Vec<GuildOverview>;

    fn cache_counts(&self) -> CacheCounts;
}
