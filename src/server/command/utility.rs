//! Utility commands: member lookup, prefix configuration and bot diagnostics.

use chrono::Utc;

use crate::server::{
    command::{CommandCategory, CommandContext, CommandDescriptor},
    error::{command::CommandError, AppError},
    model::{
        permission::Permission,
        reply::{EmbedReply, EMBED_COLOUR},
        stats::format_uptime,
    },
    service::{guild::GuildService, stats::StatsService},
};

pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            name: "userinfo",
            description: "Shows information about a user",
            category: CommandCategory::Utility,
            usage: Some("userinfo [@user]"),
            aliases: &["whois"],
            permissions: &[],
            handler: |ctx| Box::pin(userinfo(ctx)),
        },
        CommandDescriptor {
            name: "prefix",
            description: "Change the bot prefix for this server",
            category: CommandCategory::Utility,
            usage: Some("prefix [new prefix]"),
            aliases: &[],
            permissions: &[Permission::ManageGuild],
            handler: |ctx| Box::pin(prefix(ctx)),
        },
        CommandDescriptor {
            name: "debug",
            description: "Shows debug information about the bot",
            category: CommandCategory::Utility,
            usage: Some("debug"),
            aliases: &[],
            permissions: &[Permission::Administrator],
            handler: |ctx| Box::pin(debug(ctx)),
        },
        CommandDescriptor {
            name: "stats",
            description: "Shows bot statistics",
            category: CommandCategory::Utility,
            usage: Some("stats"),
            aliases: &[],
            permissions: &[],
            handler: |ctx| Box::pin(stats(ctx)),
        },
    ]
}

/// Profile of the mentioned user, or of the author when nobody is mentioned.
async fn userinfo(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let user = ctx
        .message
        .first_mention()
        .unwrap_or(&ctx.message.author);

    let Some(member) = ctx.gateway.fetch_member(guild_id, user.id).await? else {
        ctx.reply("User not found in this server!").await?;
        return Ok(());
    };

    let discriminator = user
        .discriminator
        .map(|d| format!("{:04}", d))
        .unwrap_or_else(|| "0".to_string());
    let joined = member
        .joined_at
        .map(|t| format!("<t:{}:F>", t.timestamp()))
        .unwrap_or_else(|| "Unknown".to_string());
    let roles = if member.role_ids.is_empty() {
        "None".to_string()
    } else {
        member
            .role_ids
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let embed = EmbedReply::new(format!("User Info: {}", user.tag))
        .thumbnail(user.avatar_url.clone())
        .field("User ID", user.id.to_string(), true)
        .field("Username", user.name.clone(), true)
        .field("Discriminator", discriminator, true)
        .field(
            "Account Created",
            format!("<t:{}:F>", user.created_at.timestamp()),
            true,
        )
        .field("Joined Server", joined, true)
        .field("Roles", roles, false)
        .colour(member.colour.unwrap_or(EMBED_COLOUR));

    ctx.reply(embed).await?;
    Ok(())
}

/// Shows the guild's prefix, or sets it when an argument is given.
async fn prefix(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        return Ok(());
    };
    let service = GuildService::new(ctx.db());

    let Some(requested) = ctx.arg(0) else {
        let current = service.effective_prefix(Some(guild_id)).await?;
        ctx.reply(format!("Current prefix: `{}`", current)).await?;
        return Ok(());
    };

    let name = ctx
        .gateway
        .guild_overview(guild_id)
        .map(|g| g.name)
        .unwrap_or_else(|| guild_id.to_string());

    match service.set_prefix(guild_id, name, requested).await {
        Ok(record) => {
            ctx.reply(format!("✅ Prefix changed to: `{}`", record.prefix))
                .await?;
        }
        Err(AppError::BadRequest(message)) => {
            ctx.reply(message).await?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

async fn debug(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let status = &ctx.services.status;
    let counts = ctx.gateway.cache_counts();
    let ping = match status.latency().await {
        Some(latency) => format!("{}ms", latency.as_millis()),
        None => "N/A".to_string(),
    };

    let embed = EmbedReply::new("🔧 Debug Information")
        .field("Bot Version", env!("CARGO_PKG_VERSION"), true)
        .field("Uptime", format_uptime(status.uptime().as_secs()), true)
        .field("Commands", ctx.services.registry.len().to_string(), true)
        .field("Guilds", counts.guilds.to_string(), true)
        .field("Users", counts.users.to_string(), true)
        .field("Channels", counts.channels.to_string(), true)
        .field("Ping", ping, true)
        .colour(EMBED_COLOUR)
        .timestamp(Utc::now());

    ctx.reply(embed).await?;
    Ok(())
}

async fn stats(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let live = StatsService::new(ctx.db())
        .live(ctx.gateway.as_ref(), ctx.services.status.uptime())
        .await?;

    let embed = EmbedReply::new("📊 Bot Statistics")
        .field("Servers", live.guild_count.to_string(), true)
        .field("Users", live.user_count.to_string(), true)
        .field("Commands Used", live.commands_used.to_string(), true)
        .field("Uptime", format_uptime(live.uptime_secs), true)
        .colour(EMBED_COLOUR)
        .timestamp(Utc::now());

    ctx.reply(embed).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::gateway::fake::{chat_user, member_info, message_in, overview, FakeGateway},
        command::testing::Harness,
        data::GuildRepository,
        model::{member::CacheCounts, reply::Reply},
    };
    use serenity::all::Permissions;
    use test_utils::factory::create_usage;

    const GUILD: u64 = 100;
    const AUTHOR: u64 = 1;

    fn handler(name: &str) -> crate::server::command::CommandHandler {
        commands()
            .into_iter()
            .find(|d| d.name == name)
            .unwrap()
            .handler
    }

    fn single_embed(harness: &Harness) -> EmbedReply {
        match harness.gateway.replies().as_slice() {
            [Reply::Embed(embed)] => embed.clone(),
            other => panic!("expected one embed reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn userinfo_describes_mentioned_member() {
        let mut target = member_info(GUILD, 2, 3, Permissions::empty());
        target.role_ids = vec![300, 301];
        target.colour = Some(0xff0000);
        let harness = Harness::new(FakeGateway::new().with_member(target)).await;
        let message = message_in(
            Some(GUILD),
            chat_user(AUTHOR, "author"),
            "!userinfo <@2>",
            vec![chat_user(2, "target")],
        );

        harness.run(handler("userinfo"), &message).await.unwrap();

        let embed = single_embed(&harness);
        assert_eq!(embed.title, "User Info: target");
        assert_eq!(embed.field_value("User ID"), Some("2"));
        assert_eq!(embed.field_value("Discriminator"), Some("0"));
        assert_eq!(embed.field_value("Roles"), Some("<@&300> <@&301>"));
        assert_eq!(embed.colour, Some(0xff0000));
    }

    #[tokio::test]
    async fn userinfo_defaults_to_author() {
        let harness = Harness::new(
            FakeGateway::new().with_member(member_info(GUILD, AUTHOR, 0, Permissions::empty())),
        )
        .await;
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!userinfo", vec![]);

        harness.run(handler("userinfo"), &message).await.unwrap();

        let embed = single_embed(&harness);
        assert_eq!(embed.title, "User Info: author");
        assert_eq!(embed.field_value("Roles"), Some("None"));
        assert_eq!(embed.colour, Some(EMBED_COLOUR));
    }

    #[tokio::test]
    async fn userinfo_reports_non_members() {
        let harness = Harness::new(FakeGateway::new()).await;
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!userinfo", vec![]);

        harness.run(handler("userinfo"), &message).await.unwrap();

        assert_eq!(
            harness.gateway.reply_texts(),
            vec!["User not found in this server!"]
        );
    }

    #[tokio::test]
    async fn prefix_shows_default_without_record() {
        let harness = Harness::new(FakeGateway::new()).await;
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!prefix", vec![]);

        harness.run(handler("prefix"), &message).await.unwrap();

        assert_eq!(harness.gateway.reply_texts(), vec!["Current prefix: `!`"]);
    }

    #[tokio::test]
    async fn prefix_creates_record_and_updates() {
        let harness =
            Harness::new(FakeGateway::new().with_guild(overview(GUILD, "Test Guild"))).await;
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!prefix ?", vec![]);

        harness.run(handler("prefix"), &message).await.unwrap();

        assert_eq!(
            harness.gateway.reply_texts(),
            vec!["✅ Prefix changed to: `?`"]
        );
        let record = GuildRepository::new(harness.db())
            .find_by_guild_id(GUILD)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.prefix, "?");
        assert_eq!(record.name, "Test Guild");
    }

    #[tokio::test]
    async fn prefix_rejects_long_values() {
        let harness = Harness::new(FakeGateway::new()).await;
        let message = message_in(
            Some(GUILD),
            chat_user(AUTHOR, "author"),
            "!prefix toolong",
            vec![],
        );

        harness.run(handler("prefix"), &message).await.unwrap();

        assert_eq!(
            harness.gateway.reply_texts(),
            vec!["Prefix cannot be longer than 5 characters!"]
        );
        assert!(GuildRepository::new(harness.db())
            .find_by_guild_id(GUILD)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn stats_counts_recorded_usage() {
        let harness = Harness::new(FakeGateway::new().with_counts(CacheCounts {
            guilds: 4,
            users: 250,
            channels: 30,
        }))
        .await;
        create_usage(harness.db(), "ping").await.unwrap();
        create_usage(harness.db(), "help").await.unwrap();
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!stats", vec![]);

        harness.run(handler("stats"), &message).await.unwrap();

        let embed = single_embed(&harness);
        assert_eq!(embed.title, "📊 Bot Statistics");
        assert_eq!(embed.field_value("Servers"), Some("4"));
        assert_eq!(embed.field_value("Users"), Some("250"));
        assert_eq!(embed.field_value("Commands Used"), Some("2"));
        assert!(embed.timestamp.is_some());
    }

    #[tokio::test]
    async fn debug_reports_cache_and_unknown_latency() {
        let harness = Harness::new(FakeGateway::new().with_counts(CacheCounts {
            guilds: 1,
            users: 2,
            channels: 3,
        }))
        .await;
        let message = message_in(Some(GUILD), chat_user(AUTHOR, "author"), "!debug", vec![]);

        harness.run(handler("debug"), &message).await.unwrap();

        let embed = single_embed(&harness);
        assert_eq!(embed.title, "🔧 Debug Information");
        assert_eq!(embed.field_value("Bot Version"), Some(env!("CARGO_PKG_VERSION")));
        assert_eq!(embed.field_value("Channels"), Some("3"));
        assert_eq!(embed.field_value("Ping"), Some("N/A"));
    }
}
