use std::sync::Arc;

use crate::server::{
    bot::gateway::DiscordGateway,
    command::{
        BotServices, CommandContext, CommandDescriptor, GENERIC_ERROR_REPLY,
        PERMISSION_DENIED_REPLY,
    },
    error::command::CommandError,
    model::{message::IncomingMessage, usage::RecordUsageParams},
    service::{guild::GuildService, usage::UsageService},
};

/// Why a message did not reach a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    BotAuthor,
    /// The guild's prefix could not be read from the store.
    PrefixUnavailable,
    NoPrefix,
    EmptyCommand,
    UnknownCommand,
}

/// Result of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Ignored(IgnoreReason),
    /// The member lacked a required permission; no usage was recorded.
    Denied { command: &'static str },
    Executed { command: &'static str },
    /// Usage recording, the handler, or its timeout failed; the generic reply was sent.
    Failed { command: &'static str },
}

/// Splits command text into a lower-cased name and positional arguments.
///
/// Returns `None` when the text does not start with `prefix` or holds no command name.
pub fn parse_command(content: &str, prefix: &str) -> Option<(String, Vec<String>)> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((name, args))
}

/// Routes inbound chat messages to command handlers.
#[derive(Clone)]
pub struct Dispatcher {
    services: Arc<BotServices>,
}

impl Dispatcher {
    pub fn new(services: Arc<BotServices>) -> Self {
        Self { services }
    }

    /// Handles one inbound message end to end.
    ///
    /// Never fails: every fault is logged and, past the permission gate, answered
    /// with the generic error reply.
    pub async fn handle(
        &self,
        gateway: Arc<dyn DiscordGateway>,
        message: &IncomingMessage,
    ) -> DispatchOutcome {
        if message.author.bot {
            return DispatchOutcome::Ignored(IgnoreReason::BotAuthor);
        }

        let prefix = match GuildService::new(&self.services.db)
            .effective_prefix(message.guild_id)
            .await
        {
            Ok(prefix) => prefix,
            Err(e) => {
                tracing::error!(
                    "Failed to resolve prefix for guild {:?}: {}",
                    message.guild_id,
                    e
                );
                return DispatchOutcome::Ignored(IgnoreReason::PrefixUnavailable);
            }
        };

        if !message.content.starts_with(prefix.as_str()) {
            return DispatchOutcome::Ignored(IgnoreReason::NoPrefix);
        }
        let Some((name, args)) = parse_command(&message.content, &prefix) else {
            return DispatchOutcome::Ignored(IgnoreReason::EmptyCommand);
        };
        let Some(descriptor) = self.services.registry.lookup(&name) else {
            tracing::debug!("Ignoring unknown command '{}'", name);
            return DispatchOutcome::Ignored(IgnoreReason::UnknownCommand);
        };

        if !self.permitted(gateway.as_ref(), descriptor, message).await {
            if let Err(e) = gateway.reply(message, PERMISSION_DENIED_REPLY.into()).await {
                tracing::warn!("Failed to send permission denial: {}", e);
            }
            return DispatchOutcome::Denied {
                command: descriptor.name,
            };
        }

        let usage = UsageService::new(&self.services.db)
            .record(RecordUsageParams {
                guild_id: message.guild_id,
                user_id: message.author.id,
                command: descriptor.name.to_string(),
            })
            .await;
        if let Err(e) = usage {
            tracing::error!("Failed to record usage of '{}': {}", descriptor.name, e);
            self.reply_generic_error(gateway.as_ref(), message).await;
            return DispatchOutcome::Failed {
                command: descriptor.name,
            };
        }

        let ctx = CommandContext {
            message,
            args: &args,
            prefix: &prefix,
            gateway: gateway.clone(),
            services: &self.services,
        };

        match self.run(descriptor, &ctx).await {
            Ok(()) => {
                tracing::debug!(
                    "Executed '{}' for user {} in guild {:?}",
                    descriptor.name,
                    message.author.id,
                    message.guild_id
                );
                DispatchOutcome::Executed {
                    command: descriptor.name,
                }
            }
            Err(e) => {
                tracing::error!("Error executing command '{}': {}", descriptor.name, e);
                self.reply_generic_error(gateway.as_ref(), message).await;
                DispatchOutcome::Failed {
                    command: descriptor.name,
                }
            }
        }
    }

    /// Whether the author may run `descriptor`.
    ///
    /// Outside a guild, and for commands without requirements, everyone may. A member
    /// that cannot be resolved is denied.
    async fn permitted(
        &self,
        gateway: &dyn DiscordGateway,
        descriptor: &CommandDescriptor,
        message: &IncomingMessage,
    ) -> bool {
        if descriptor.permissions.is_empty() {
            return true;
        }
        let Some(guild_id) = message.guild_id else {
            return true;
        };

        match gateway.fetch_member(guild_id, message.author.id).await {
            Ok(Some(member)) => member.has_all(descriptor.permissions),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve member {} in guild {}: {}",
                    message.author.id,
                    guild_id,
                    e
                );
                false
            }
        }
    }

    async fn run(
        &self,
        descriptor: &CommandDescriptor,
        ctx: &CommandContext<'_>,
    ) -> Result<(), CommandError> {
        let invocation = (descriptor.handler)(ctx);

        match self.services.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, invocation)
                .await
                .unwrap_or(Err(CommandError::TimedOut(limit))),
            None => invocation.await,
        }
    }

    async fn reply_generic_error(&self, gateway: &dyn DiscordGateway, message: &IncomingMessage) {
        if let Err(e) = gateway.reply(message, GENERIC_ERROR_REPLY.into()).await {
            tracing::warn!("Failed to send error reply: {}", e);
        }
    }
}
