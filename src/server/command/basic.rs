//! Basic commands available to everyone.

use crate::server::{
    command::{CommandCategory, CommandContext, CommandDescriptor},
    error::{command::CommandError, gateway::GatewayError},
    model::reply::{EmbedReply, EMBED_COLOUR},
};

pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            name: "help",
            description: "Shows all available commands",
            category: CommandCategory::Basic,
            usage: Some("help [command]"),
            aliases: &["commands"],
            permissions: &[],
            handler: |ctx| Box::pin(help(ctx)),
        },
        CommandDescriptor {
            name: "ping",
            description: "Shows bot latency",
            category: CommandCategory::Basic,
            usage: Some("ping"),
            aliases: &[],
            permissions: &[],
            handler: |ctx| Box::pin(ping(ctx)),
        },
        CommandDescriptor {
            name: "invite",
            description: "Get the bot invite link",
            category: CommandCategory::Basic,
            usage: Some("invite"),
            aliases: &[],
            permissions: &[],
            handler: |ctx| Box::pin(invite(ctx)),
        },
        CommandDescriptor {
            name: "serverinfo",
            description: "Shows information about the server",
            category: CommandCategory::Basic,
            usage: Some("serverinfo"),
            aliases: &["guildinfo"],
            permissions: &[],
            handler: |ctx| Box::pin(serverinfo(ctx)),
        },
    ]
}

/// Lists every command by category, or details one command.
async fn help(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let registry = &ctx.services.registry;

    if let Some(name) = ctx.arg(0) {
        let Some(command) = registry.lookup(&name.to_lowercase()) else {
            ctx.reply("Command not found!").await?;
            return Ok(());
        };

        let mut embed = EmbedReply::new(format!("Help: {}", command.name))
            .description(command.description)
            .field("Usage", command.usage_with_prefix(ctx.prefix), true)
            .field("Category", command.category.as_str(), true)
            .colour(EMBED_COLOUR);
        if !command.aliases.is_empty() {
            embed = embed.field("Aliases", command.aliases.join(", "), true);
        }
        ctx.reply(embed).await?;
        return Ok(());
    }

    let mut embed = EmbedReply::new("Bot Commands")
        .description("Here are all available commands:")
        .colour(EMBED_COLOUR);
    for category in CommandCategory::ORDER {
        let lines: Vec<String> = registry
            .by_category(category)
            .map(|c| format!("`{}{}` - {}", ctx.prefix, c.name, c.description))
            .collect();
        let value = if lines.is_empty() {
            "None".to_string()
        } else {
            lines.join("\n")
        };
        embed = embed.field(category.heading(), value, false);
    }

    ctx.reply(embed).await?;
    Ok(())
}

/// Round-trip latency between the command and the bot's reply.
async fn ping(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let sent = ctx.reply("Pinging...").await?;
    let latency = (sent.created_at - ctx.message.created_at).num_milliseconds();

    ctx.gateway
        .edit(&sent, &format!("🏓 Pong! Latency: {}ms", latency))
        .await?;
    Ok(())
}

async fn invite(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let url = format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot",
        ctx.gateway.current_user_id(),
        ctx.services.settings.invite_permissions
    );

    let embed = EmbedReply::new("Invite me to your server!")
        .description("Click the link below to add me to your Discord server:")
        .field("Invite Link", format!("[Click here to invite]({})", url), false)
        .colour(EMBED_COLOUR);

    ctx.reply(embed).await?;
    Ok(())
}

async fn serverinfo(ctx: &CommandContext<'_>) -> Result<(), CommandError> {
    let Some(guild_id) = ctx.message.guild_id else {
        ctx.reply("This command can only be used in a server!").await?;
        return Ok(());
    };
    let guild = ctx
        .gateway
        .guild_overview(guild_id)
        .ok_or(GatewayError::GuildUnavailable(guild_id))?;

    let embed = EmbedReply::new(format!("Server Info: {}", guild.name))
        .thumbnail(guild.icon_url)
        .field("Server ID", guild.guild_id.to_string(), true)
        .field("Owner", format!("<@{}>", guild.owner_id), true)
        .field("Members", guild.member_count.to_string(), true)
        .field("Channels", guild.channel_count.to_string(), true)
        .field("Roles", guild.role_count.to_string(), true)
        .field("Created", format!("<t:{}:F>", guild.created_at.timestamp()), true)
        .colour(EMBED_COLOUR);

    ctx.reply(embed).await?;
    Ok(())
}
