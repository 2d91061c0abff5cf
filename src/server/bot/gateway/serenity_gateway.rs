use chrono::{DateTime, Duration, Utc};
use serenity::all::{
    ChannelId, CreateEmbed, CreateMessage, EditMember, EditMessage,
    GetMessages, Guild, GuildId, Member, Message, MessageId, MessageReference, Permissions,
    Role, RoleId, Timestamp, User, UserId,
};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::{Http, HttpError};
use std::{collections::HashMap, sync::Arc};

use crate::server::{
    bot::gateway::DiscordGateway,
    error::gateway::GatewayError,
    model::{
        member::{CacheCounts, GuildOverview, MemberInfo},
        message::{ChatUser, IncomingMessage, SentMessage},
        reply::{EmbedReply, Reply},
    },
};

/// Discord only bulk-deletes this many messages per request.
const MAX_BULK_DELETE: u64 = 100;

/// Discord refuses to bulk-delete messages older than this.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// Gateway backed by Serenity's HTTP client and cache.
///
/// Cheap to construct; event handlers build one per event from the `Context`.
#[derive(Clone)]
pub struct SerenityGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }

    /// Owner and role table of a guild, from the cache when available.
    async fn guild_roles(
        &self,
        guild_id: GuildId,
    ) -> Result<(UserId, HashMap<RoleId, Role>), GatewayError> {
        let cached = self
            .cache
            .guild(guild_id)
            .map(|guild| (guild.owner_id, guild.roles.clone()));
        if let Some(roles) = cached {
            return Ok(roles);
        }

        let guild = self.http.get_guild(guild_id).await?;
        Ok((guild.owner_id, guild.roles))
    }

    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<Member>, GatewayError> {
        let cached = self
            .cache
            .guild(guild_id)
            .and_then(|guild| guild.members.get(&user_id).cloned());
        if cached.is_some() {
            return Ok(cached);
        }

        match self.http.get_member(guild_id, user_id).await {
            Ok(member) => Ok(Some(member)),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DiscordGateway for SerenityGateway {
    async fn reply(
        &self,
        message: &IncomingMessage,
        reply: Reply,
    ) -> Result<SentMessage, GatewayError> {
        let channel_id = ChannelId::new(message.channel_id);
        let builder = match reply {
            Reply::Text(text) => CreateMessage::new().content(text),
            Reply::Embed(embed) => CreateMessage::new().embed(build_embed(embed)),
        }
        .reference_message(MessageReference::from((
            channel_id,
            MessageId::new(message.id),
        )));

        let sent = channel_id.send_message(&self.http, builder).await?;
        Ok(sent_message(&sent))
    }

    async fn send(&self, channel_id: u64, content: &str) -> Result<SentMessage, GatewayError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;
        Ok(sent_message(&sent))
    }

    async fn edit(&self, sent: &SentMessage, content: &str) -> Result<(), GatewayError> {
        ChannelId::new(sent.channel_id)
            .edit_message(
                &self.http,
                MessageId::new(sent.message_id),
                EditMessage::new().content(content),
            )
            .await?;
        Ok(())
    }

    async fn delete(&self, sent: &SentMessage) -> Result<(), GatewayError> {
        ChannelId::new(sent.channel_id)
            .delete_message(&self.http, MessageId::new(sent.message_id))
            .await?;
        Ok(())
    }

    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberInfo>, GatewayError> {
        let guild_id = GuildId::new(guild_id);
        let Some(member) = self.member(guild_id, UserId::new(user_id)).await? else {
            return Ok(None);
        };
        let (owner_id, roles) = self.guild_roles(guild_id).await?;

        Ok(Some(resolve_member(
            guild_id,
            owner_id,
            &roles,
            member.user.id,
            &member.roles,
            member.joined_at.map(|t| t.to_utc()),
        )))
    }

    fn current_user_id(&self) -> u64 {
        self.cache.current_user().id.get()
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;
        Ok(())
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError> {
        GuildId::new(guild_id)
            .ban_with_reason(&self.http, UserId::new(user_id), 0, reason)
            .await?;
        Ok(())
    }

    async fn set_voice_mute(
        &self,
        guild_id: u64,
        user_id: u64,
        muted: bool,
    ) -> Result<(), GatewayError> {
        GuildId::new(guild_id)
            .edit_member(&self.http, UserId::new(user_id), EditMember::new().mute(muted))
            .await?;
        Ok(())
    }

    async fn set_voice_deaf(
        &self,
        guild_id: u64,
        user_id: u64,
        deafened: bool,
    ) -> Result<(), GatewayError> {
        GuildId::new(guild_id)
            .edit_member(
                &self.http,
                UserId::new(user_id),
                EditMember::new().deafen(deafened),
            )
            .await?;
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, count: u64) -> Result<usize, GatewayError> {
        let channel_id = ChannelId::new(channel_id);
        let oldest_allowed = Utc::now() - Duration::days(BULK_DELETE_MAX_AGE_DAYS);
        let mut remaining = count;
        let mut before: Option<MessageId> = None;
        let mut deleted = 0;

        while remaining > 0 {
            let page = remaining.min(MAX_BULK_DELETE);
            let mut request = GetMessages::new().limit(page as u8);
            if let Some(before) = before {
                request = request.before(before);
            }

            let messages = channel_id.messages(&self.http, request).await?;
            let fetched = messages.len() as u64;
            before = messages.last().map(|m| m.id);

            let ids: Vec<MessageId> = messages
                .iter()
                .filter(|m| m.timestamp.to_utc() > oldest_allowed)
                .map(|m| m.id)
                .collect();

            match ids.len() {
                0 => {}
                1 => channel_id.delete_message(&self.http, ids[0]).await?,
                _ => channel_id.delete_messages(&self.http, &ids).await?,
            }
            deleted += ids.len();

            // A short page or an old message means there is nothing left to delete.
            if fetched < page || ids.len() as u64 != fetched {
                break;
            }
            remaining -= fetched;
        }

        Ok(deleted)
    }

    fn guild_overview(&self, guild_id: u64) -> Option<GuildOverview> {
        self.cache
            .guild(GuildId::new(guild_id))
            .map(|guild| overview_from_guild(&guild))
    }

    fn list_guilds(&self) -> Vec<GuildOverview> {
        self.cache
            .guilds()
            .into_iter()
            .filter_map(|id| self.cache.guild(id).map(|guild| overview_from_guild(&guild)))
            .collect()
    }

    fn cache_counts(&self) -> CacheCounts {
        CacheCounts {
            guilds: self.cache.guild_count(),
            users: self.cache.user_count(),
            channels: self.cache.guild_channel_count(),
        }
    }
}

/// Converts a Serenity message into the dispatcher's view of it.
pub fn incoming_message(message: &Message) -> IncomingMessage {
    IncomingMessage {
        id: message.id.get(),
        channel_id: message.channel_id.get(),
        guild_id: message.guild_id.map(|id| id.get()),
        author: chat_user(&message.author),
        content: message.content.clone(),
        mentions: message.mentions.iter().map(chat_user).collect(),
        created_at: message.timestamp.to_utc(),
    }
}

pub fn chat_user(user: &User) -> ChatUser {
    ChatUser {
        id: user.id.get(),
        name: user.name.clone(),
        tag: user.tag(),
        discriminator: user.discriminator.map(|d| d.get()),
        bot: user.bot,
        avatar_url: Some(user.face()),
        created_at: user.id.created_at().to_utc(),
    }
}

fn sent_message(message: &Message) -> SentMessage {
    SentMessage {
        channel_id: message.channel_id.get(),
        message_id: message.id.get(),
        created_at: message.timestamp.to_utc(),
    }
}

fn build_embed(embed: EmbedReply) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(embed.title);

    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }
    if let Some(colour) = embed.colour {
        builder = builder.color(colour);
    }
    if let Some(url) = embed.thumbnail {
        builder = builder.thumbnail(url);
    }
    if let Some(timestamp) = embed
        .timestamp
        .and_then(|t| Timestamp::from_unix_timestamp(t.timestamp()).ok())
    {
        builder = builder.timestamp(timestamp);
    }

    builder
}

/// Snapshot of a cached guild.
pub fn overview_from_guild(guild: &Guild) -> GuildOverview {
    GuildOverview {
        guild_id: guild.id.get(),
        name: guild.name.clone(),
        icon_url: guild.icon_url(),
        owner_id: guild.owner_id.get(),
        member_count: guild.member_count,
        channel_count: guild.channels.len(),
        role_count: guild.roles.len(),
        created_at: guild.id.created_at().to_utc(),
    }
}

/// Computes guild-level permissions and hierarchy of a member.
///
/// Permissions are the union of `@everyone` (whose role id equals the guild id) and
/// every assigned role. Channel overwrites are not considered. The owner holds all
/// permissions.
pub fn resolve_member(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    user_id: UserId,
    member_roles: &[RoleId],
    joined_at: Option<DateTime<Utc>>,
) -> MemberInfo {
    let everyone = roles
        .get(&RoleId::new(guild_id.get()))
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    let mut assigned: Vec<&Role> = member_roles
        .iter()
        .filter_map(|id| roles.get(id))
        .collect();
    assigned.sort_by(|a, b| b.position.cmp(&a.position));

    let is_owner = user_id == owner_id;
    let permissions = if is_owner {
        Permissions::all()
    } else {
        assigned
            .iter()
            .fold(everyone, |acc, role| acc | role.permissions)
    };

    MemberInfo {
        user_id: user_id.get(),
        guild_id: guild_id.get(),
        permissions,
        highest_role_position: assigned.first().map(|r| r.position as i16).unwrap_or(0),
        is_owner,
        joined_at,
        role_ids: assigned.iter().map(|r| r.id.get()).collect(),
        colour: assigned
            .iter()
            .find(|r| r.colour.0 != 0)
            .map(|r| r.colour.0),
    }
}
