//! Moderation commands.
//!
//! Every member-targeting command resolves the first mentioned user, checks that
//! they belong to the guild, applies the change through the gateway and only then
//! writes a moderation log entry. Gateway failures are answered with
//! "Failed to <verb> the user!" and never logged to the audit table.

use std::time::Duration;

use crate::server::{
    command::{CommandCategory, CommandContext, CommandDescriptor},
    error::command::CommandError,
    model::{
        member::MemberInfo,
        message::ChatUser,
        moderation::{CreateModerationLogParams, ModerationAction},
        permission::Permission,
    },
    scheduler::unmute::UnmutePolicy,
    service::moderation::ModerationService,
    util::parse::leading_int,
};

const DEFAULT_REASON: &str = "No reason provided";

/// Messages `clear` removes when no count is given.
const DEFAULT_CLEAR_COUNT: i64 = 10;
const MAX_CLEAR_COUNT: i64 = 100;

pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            name: "kick",
            description: "Kick a member from the server",
            category: CommandCategory::Moderation,
            usage: Some("kick @user [reason]"),
            aliases: &[],
            permissions: &[Permission::KickMembers],
            handler: |ctx| Box::pin(kick(ctx)),
        },
        CommandDescriptor {
            name: "ban",
            description: "Ban a member from the server",
            category: CommandCategory::Moderation,
            usage: Some("ban @user [reason]"),
            aliases: &[],
            permissions: &[Permission::BanMembers],
            handler: |ctx| Box::pin(ban(ctx)),
        },
        CommandDescriptor {
            name: "mute",
            description: "Mute a member in voice channels",
            category: CommandCategory::Moderation,
            usage: Some("mute @user [duration in minutes]"),
            aliases: &[],
            permissions: &[Permission::MuteMembers],
            handler: |ctx| Box::pin(mute(ctx)),
        },
        CommandDescriptor {
            name: "unmute",
            description: "Unmute a member in voice channels",
            category: CommandCategory::Moderation,
            usage: Some("unmute @user"),
            aliases: &[],
            permissions: &[Permission::MuteMembers],
            handler: |ctx| Box::pin(unmute(ctx)),
        },
        CommandDescriptor {
            name: "deafen",
            description: "Deafen a member in voice channels",
            category: CommandCategory::Moderation,
            usage: Some("deafen @user"),
            aliases: &[],
            permissions: &[Permission::DeafenMembers],
            handler: |ctx| Box::pin(deafen(ctx)),
        },
        CommandDescriptor {
            name: "undeafen",
            description: "Undeafen a member in voice channels",
            category: CommandCategory::Moderation,
            usage: Some("undeafen @user"),
            aliases: &[],
            permissions: &[Permission::DeafenMembers],
            handler: |ctx| Box::pin(undeafen(ctx)),
        },
        CommandDescriptor {
            name: "clear",
            description: "Clear messages from the channel",
            category: CommandCategory::Moderation,
            usage: Some("clear [amount]"),
            aliases: &["purge"],
            permissions: &[Permission::ManageMessages],
            handler: |ctx| Box::pin(clear(ctx)),
        },
    ]
}

async fn kick(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let action = ModerationAction::Kick;
    let Some(user) = mentioned_target(ctx, action).await? else {
        return Ok(());
    };
    let Some(member) = target_member(ctx, guild_id, user).await? else {
        return Ok(());
    };
    if !bot_can_act_on(ctx, guild_id, &member, Permission::KickMembers).await? {
        ctx.reply(format!("I cannot {} this user!", action)).await?;
        return Ok(());
    }

    let reason = reason_from_args(ctx);
    if let Err(e) = ctx.gateway.kick(guild_id, user.id, &reason).await {
        tracing::warn!("Failed to kick user {} in guild {}: {}", user.id, guild_id, e);
        ctx.reply(format!("Failed to {} the user!", action)).await?;
        return Ok(());
    }

    record_action(ctx, guild_id, user, action, Some(reason.clone()), None).await;
    ctx.reply(format!("✅ Kicked {} for: {}", user.tag, reason))
        .await?;
    Ok(())
}

/// Bans the mentioned user. Users who already left the guild can still be banned.
async fn ban(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let action = ModerationAction::Ban;
    let Some(user) = mentioned_target(ctx, action).await? else {
        return Ok(());
    };
    if let Some(member) = ctx.gateway.fetch_member(guild_id, user.id).await? {
        if !bot_can_act_on(ctx, guild_id, &member, Permission::BanMembers).await? {
            ctx.reply(format!("I cannot {} this user!", action)).await?;
            return Ok(());
        }
    }

    let reason = reason_from_args(ctx);
    if let Err(e) = ctx.gateway.ban(guild_id, user.id, &reason).await {
        tracing::warn!("Failed to ban user {} in guild {}: {}", user.id, guild_id, e);
        ctx.reply(format!("Failed to {} the user!", action)).await?;
        return Ok(());
    }

    record_action(ctx, guild_id, user, action, Some(reason.clone()), None).await;
    ctx.reply(format!("✅ Banned {} for: {}", user.tag, reason))
        .await?;
    Ok(())
}

/// Voice-mutes the mentioned member, optionally for a number of minutes.
///
/// A positive duration schedules an automatic unmute. Missing, non-numeric and
/// negative durations mute indefinitely.
async fn mute(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let action = ModerationAction::Mute;
    let Some(user) = mentioned_target(ctx, action).await? else {
        return Ok(());
    };
    if target_member(ctx, guild_id, user).await?.is_none() {
        return Ok(());
    }

    let minutes = ctx
        .arg(1)
        .and_then(leading_int)
        .filter(|m| *m > 0)
        .map(|m| m.min(i32::MAX as i64) as i32);

    if let Err(e) = ctx.gateway.set_voice_mute(guild_id, user.id, true).await {
        tracing::warn!("Failed to mute user {} in guild {}: {}", user.id, guild_id, e);
        ctx.reply(format!("Failed to {} the user!", action)).await?;
        return Ok(());
    }

    record_action(ctx, guild_id, user, action, None, minutes).await;

    let unmute = &ctx.services.unmute;
    if ctx.services.settings.unmute_policy == UnmutePolicy::CancelOnManual {
        unmute.cancel_for(guild_id, user.id).await;
    }
    if let Some(minutes) = minutes {
        unmute
            .schedule(guild_id, user.id, Duration::from_secs(minutes as u64 * 60))
            .await;
    }

    let confirmation = match minutes {
        Some(minutes) => format!("✅ Muted {} for {} minutes", user.tag, minutes),
        None => format!("✅ Muted {}", user.tag),
    };
    ctx.reply(confirmation).await?;
    Ok(())
}

async fn unmute(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    set_voice_state(ctx, ModerationAction::Unmute, VoiceFlag::Mute, false).await
}

async fn deafen(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    set_voice_state(ctx, ModerationAction::Deafen, VoiceFlag::Deaf, true).await
}

async fn undeafen(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    set_voice_state(ctx, ModerationAction::Undeafen, VoiceFlag::Deaf, false).await
}

#[derive(Debug, Clone, Copy)]
enum VoiceFlag {
    Mute,
    Deaf,
}

/// Shared body of unmute, deafen and undeafen.
async fn set_voice_state(
    ctx: &CommandContext<'_>,
    action: ModerationAction,
    flag: VoiceFlag,
    value: bool,
) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let Some(user) = mentioned_target(ctx, action).await? else {
        return Ok(());
    };
    if target_member(ctx, guild_id, user).await?.is_none() {
        return Ok(());
    }

    let result = match flag {
        VoiceFlag::Mute => ctx.gateway.set_voice_mute(guild_id, user.id, value).await,
        VoiceFlag::Deaf => ctx.gateway.set_voice_deaf(guild_id, user.id, value).await,
    };
    if let Err(e) = result {
        tracing::warn!(
            "Failed to {} user {} in guild {}: {}",
            action,
            user.id,
            guild_id,
            e
        );
        ctx.reply(format!("Failed to {} the user!", action)).await?;
        return Ok(());
    }

    if action == ModerationAction::Unmute
        && ctx.services.settings.unmute_policy == UnmutePolicy::CancelOnManual
    {
        let cancelled = ctx.services.unmute.cancel_for(guild_id, user.id).await;
        if cancelled > 0 {
            tracing::debug!(
                "Cancelled {} pending unmute(s) for user {} in guild {}",
                cancelled,
                user.id,
                guild_id
            );
        }
    }

    record_action(ctx, guild_id, user, action, None, None).await;
    ctx.reply(format!("✅ {} {}", capitalized(action.past_tense()), user.tag))
        .await?;
    Ok(())
}

/// Bulk-deletes recent messages including the command itself.
///
/// The confirmation removes itself after the configured delay.
async fn clear(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    if ctx.message.guild_id.is_none() {
        return Ok(());
    }

    let count = ctx
        .arg(0)
        .and_then(leading_int)
        .unwrap_or(DEFAULT_CLEAR_COUNT);
    if !(1..=MAX_CLEAR_COUNT).contains(&count) {
        ctx.reply("Please provide a number between 1 and 100!").await?;
        return Ok(());
    }

    let channel_id = ctx.message.channel_id;
    let deleted = match ctx.gateway.bulk_delete(channel_id, count as u64 + 1).await {
        Ok(deleted) => deleted,
        Err(e) => {
            tracing::warn!("Failed to clear messages in channel {}: {}", channel_id, e);
            ctx.reply("Failed to delete messages!").await?;
            return Ok(());
        }
    };

    let confirmation = ctx
        .gateway
        .send(
            channel_id,
            &format!("✅ Deleted {} messages!", deleted.saturating_sub(1)),
        )
        .await?;

    let gateway = ctx.gateway.clone();
    let delay = ctx.services.settings.clear_confirmation;
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(e) = gateway.delete(&confirmation).await {
            tracing::debug!("Failed to delete clear confirmation: {}", e);
        }
    });

    Ok(())
}

/// The first mentioned user, replying with a prompt when nobody was mentioned.
async fn mentioned_target<'a>(
    ctx: &CommandContext<'a>,
    action: ModerationAction,
) -> Result<Option<&'a ChatUser>, CommandError> {
    match ctx.message.first_mention() {
        Some(user) => Ok(Some(user)),
        None => {
            ctx.reply(format!("Please mention a user to {}!", action))
                .await?;
            Ok(None)
        }
    }
}

/// Resolves the target's membership, replying when they are not in the guild.
async fn target_member(
    ctx: &CommandContext<'_>,
    guild_id: u64,
    user: &ChatUser,
) -> Result<Option<MemberInfo>, CommandError> {
    let member = ctx.gateway.fetch_member(guild_id, user.id).await?;
    if member.is_none() {
        ctx.reply("User not found in this server!").await?;
    }
    Ok(member)
}

/// Whether the bot's own role and permissions allow acting on `target`.
async fn bot_can_act_on(
    ctx: &CommandContext<'_>,
    guild_id: u64,
    target: &MemberInfo,
    permission: Permission,
) -> Result<bool, CommandError> {
    let bot_id = ctx.gateway.current_user_id();
    let Some(bot) = ctx.gateway.fetch_member(guild_id, bot_id).await? else {
        tracing::warn!("Bot is not a resolvable member of guild {}", guild_id);
        return Ok(false);
    };

    Ok(target.manageable_by(&bot, permission))
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn reason_from_args(ctx: &CommandContext<'_>) -> String {
    let reason = ctx.args.iter().skip(1).cloned().collect::<Vec<_>>().join(" ");
    if reason.is_empty() {
        DEFAULT_REASON.to_string()
    } else {
        reason
    }
}

/// Writes the audit entry for a mutation that already succeeded.
///
/// A failed write is logged; the action itself has happened and is still confirmed.
async fn record_action(
    ctx: &CommandContext<'_>,
    guild_id: u64,
    target: &ChatUser,
    action: ModerationAction,
    reason: Option<String>,
    duration: Option<i32>,
) {
    let params = CreateModerationLogParams {
        guild_id,
        moderator_id: ctx.message.author.id,
        target_id: target.id,
        action,
        reason,
        duration,
    };

    if let Err(e) = ModerationService::new(ctx.db()).record(params).await {
        tracing::error!(
            "Failed to write {} log for user {} in guild {}: {}",
            action,
            target.id,
            guild_id,
            e
        );
    }
}
