//! In-memory gateway for tests.
//!
//! Records every side-effecting call so tests can assert on replies and mutations,
//! and serves members and guild overviews from maps configured up front.

use chrono::Utc;
use serenity::all::Permissions;
use serenity::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use crate::server::{
    bot::gateway::DiscordGateway,
    error::gateway::GatewayError,
    model::{
        member::{CacheCounts, GuildOverview, MemberInfo},
        message::{ChatUser, IncomingMessage, SentMessage},
        reply::Reply,
    },
};

/// User id of the fake bot account.
pub const BOT_ID: u64 = 999;

/// A side-effecting call made against the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Reply { channel_id: u64, reply: Reply },
    Send { channel_id: u64, content: String },
    Edit { message_id: u64, content: String },
    Delete { message_id: u64 },
    Kick { guild_id: u64, user_id: u64, reason: String },
    Ban { guild_id: u64, user_id: u64, reason: String },
    SetVoiceMute { guild_id: u64, user_id: u64, muted: bool },
    SetVoiceDeaf { guild_id: u64, user_id: u64, deafened: bool },
    BulkDelete { channel_id: u64, count: u64 },
}

/// Operation that can be configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeOp {
    Reply,
    Send,
    Delete,
    FetchMember,
    Kick,
    Ban,
    VoiceMute,
    VoiceDeaf,
    BulkDelete,
}

#[derive(Default)]
pub struct FakeGateway {
    members: HashMap<(u64, u64), MemberInfo>,
    guilds: Vec<GuildOverview>,
    counts: CacheCounts,
    failing: HashSet<FakeOp>,
    calls: Mutex<Vec<GatewayCall>>,
    next_message_id: AtomicU64,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicU64::new(1),
            ..Default::default()
        }
    }

    pub fn with_member(mut self, member: MemberInfo) -> Self {
        self.members
            .insert((member.guild_id, member.user_id), member);
        self
    }

    /// Adds the bot itself to a guild with the given hierarchy position.
    pub fn with_bot_in(self, guild_id: u64, position: i16, permissions: Permissions) -> Self {
        self.with_member(member_info(guild_id, BOT_ID, position, permissions))
    }

    pub fn with_guild(mut self, guild: GuildOverview) -> Self {
        self.guilds.push(guild);
        self
    }

    pub fn with_counts(mut self, counts: CacheCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn failing(mut self, op: FakeOp) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::Reply { reply, .. } => Some(reply),
                _ => None,
            })
            .collect()
    }

    /// Text of every plain-text reply, in order.
    pub fn reply_texts(&self) -> Vec<String> {
        self.replies()
            .into_iter()
            .filter_map(|reply| reply.as_text().map(str::to_string))
            .collect()
    }

    pub fn mute_calls(&self) -> Vec<(u64, u64, bool)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                GatewayCall::SetVoiceMute {
                    guild_id,
                    user_id,
                    muted,
                } => Some((guild_id, user_id, muted)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: FakeOp) -> Result<(), GatewayError> {
        if self.failing.contains(&op) {
            return Err(GatewayError::Rejected(format!("{:?} failed", op)));
        }
        Ok(())
    }

    fn sent(&self, channel_id: u64) -> SentMessage {
        SentMessage {
            channel_id,
            message_id: self.next_message_id.fetch_add(1, Ordering::SeqCst),
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl DiscordGateway for FakeGateway {
    async fn reply(
        &self,
        message: &IncomingMessage,
        reply: Reply,
    ) -> Result<SentMessage, GatewayError> {
        self.check(FakeOp::Reply)?;
        self.record(GatewayCall::Reply {
            channel_id: message.channel_id,
            reply,
        });
        Ok(self.sent(message.channel_id))
    }

    async fn send(&self, channel_id: u64, content: &str) -> Result<SentMessage, GatewayError> {
        self.check(FakeOp::Send)?;
        self.record(GatewayCall::Send {
            channel_id,
            content: content.to_string(),
        });
        Ok(self.sent(channel_id))
    }

    async fn edit(&self, sent: &SentMessage, content: &str) -> Result<(), GatewayError> {
        self.record(GatewayCall::Edit {
            message_id: sent.message_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete(&self, sent: &SentMessage) -> Result<(), GatewayError> {
        self.check(FakeOp::Delete)?;
        self.record(GatewayCall::Delete {
            message_id: sent.message_id,
        });
        Ok(())
    }

    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberInfo>, GatewayError> {
        self.check(FakeOp::FetchMember)?;
        Ok(self.members.get(&(guild_id, user_id)).cloned())
    }

    fn current_user_id(&self) -> u64 {
        BOT_ID
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError> {
        self.check(FakeOp::Kick)?;
        self.record(GatewayCall::Kick {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), GatewayError> {
        self.check(FakeOp::Ban)?;
        self.record(GatewayCall::Ban {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn set_voice_mute(
        &self,
        guild_id: u64,
        user_id: u64,
        muted: bool,
    ) -> Result<(), GatewayError> {
        self.check(FakeOp::VoiceMute)?;
        self.record(GatewayCall::SetVoiceMute {
            guild_id,
            user_id,
            muted,
        });
        Ok(())
    }

    async fn set_voice_deaf(
        &self,
        guild_id: u64,
        user_id: u64,
        deafened: bool,
    ) -> Result<(), GatewayError> {
        self.check(FakeOp::VoiceDeaf)?;
        self.record(GatewayCall::SetVoiceDeaf {
            guild_id,
            user_id,
            deafened,
        });
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: u64, count: u64) -> Result<usize, GatewayError> {
        self.check(FakeOp::BulkDelete)?;
        self.record(GatewayCall::BulkDelete { channel_id, count });
        Ok(count as usize)
    }

    fn guild_overview(&self, guild_id: u64) -> Option<GuildOverview> {
        self.guilds.iter().find(|g| g.guild_id == guild_id).cloned()
    }

    fn list_guilds(&self) -> Vec<GuildOverview> {
        self.guilds.clone()
    }

    fn cache_counts(&self) -> CacheCounts {
        self.counts
    }
}

pub fn member_info(guild_id: u64, user_id: u64, position: i16, permissions: Permissions) -> MemberInfo {
    MemberInfo {
        user_id,
        guild_id,
        permissions,
        highest_role_position: position,
        is_owner: false,
        joined_at: Some(Utc::now()),
        role_ids: vec![],
        colour: None,
    }
}

pub fn chat_user(id: u64, name: &str) -> ChatUser {
    ChatUser {
        id,
        name: name.to_string(),
        tag: name.to_string(),
        discriminator: None,
        bot: false,
        avatar_url: None,
        created_at: Utc::now(),
    }
}

/// Message sent in `guild_id` (or a DM for `None`) with the given text and mentions.
pub fn message_in(
    guild_id: Option<u64>,
    author: ChatUser,
    content: &str,
    mentions: Vec<ChatUser>,
) -> IncomingMessage {
    IncomingMessage {
        id: 5000,
        channel_id: 6000,
        guild_id,
        author,
        content: content.to_string(),
        mentions,
        created_at: Utc::now(),
    }
}

pub fn overview(guild_id: u64, name: &str) -> GuildOverview {
    GuildOverview {
        guild_id,
        name: name.to_string(),
        icon_url: None,
        owner_id: 1,
        member_count: 10,
        channel_count: 4,
        role_count: 3,
        created_at: Utc::now(),
    }
}
