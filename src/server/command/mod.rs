//! Chat command subsystem.
//!
//! Commands are described by immutable [`CommandDescriptor`]s grouped into the basic,
//! moderation and utility categories. The [`registry::CommandRegistry`] merges the
//! groups at startup and the [`dispatcher::Dispatcher`] turns an inbound message into
//! at most one handler invocation:
//!
//! 1. resolve the guild's prefix and tokenize the text
//! 2. look up the command by exact, lower-cased name
//! 3. check the invoking member's permissions
//! 4. record a usage entry
//! 5. run the handler under the configured timeout

pub mod basic;
pub mod dispatcher;
pub mod moderation;
pub mod registry;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

use sea_orm::DatabaseConnection;
use std::{fmt, future::Future, pin::Pin, sync::Arc, time::Duration};

use crate::server::{
    bot::{gateway::DiscordGateway, status::BotStatus},
    command::registry::CommandRegistry,
    error::command::CommandError,
    model::{
        message::{IncomingMessage, SentMessage},
        permission::Permission,
        reply::Reply,
    },
    scheduler::unmute::{UnmutePolicy, UnmuteScheduler},
};

/// Reply sent when a handler fails or times out.
pub const GENERIC_ERROR_REPLY: &str = "There was an error executing that command!";

/// Reply sent when the invoking member lacks a required permission.
pub const PERMISSION_DENIED_REPLY: &str = "You don't have permission to use this command!";

pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>>;

/// Command entry point. Receives the call context, which carries the message and arguments.
pub type CommandHandler = for<'a> fn(&'a CommandContext<'a>) -> HandlerFuture<'a>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Basic,
    Moderation,
    Utility,
}

impl CommandCategory {
    /// Display order of categories in listings.
    pub const ORDER: [CommandCategory; 3] = [Self::Basic, Self::Moderation, Self::Utility];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Moderation => "moderation",
            Self::Utility => "utility",
        }
    }

    /// Heading used by the `help` listing.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Basic => "📋 Basic Commands",
            Self::Moderation => "🔨 Moderation Commands",
            Self::Utility => "🛠️ Utility Commands",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable metadata and entry point of one chat command.
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    /// Usage hint without the prefix, e.g. `kick @user [reason]`.
    pub usage: Option<&'static str>,
    /// Declared alternative names. Shown in listings, not used for lookup.
    pub aliases: &'static [&'static str],
    /// Every permission the invoking member must hold inside a guild.
    pub permissions: &'static [Permission],
    pub handler: CommandHandler,
}

impl CommandDescriptor {
    /// Usage line with the active prefix applied.
    pub fn usage_with_prefix(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.usage.unwrap_or(self.name))
    }

    pub fn into_dto(&self) -> crate::model::command::CommandDto {
        crate::model::command::CommandDto {
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            usage: self.usage.map(str::to_string),
            aliases: self.aliases.iter().map(|a| a.to_string()).collect(),
            permissions: self.permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("permissions", &self.permissions)
            .finish_non_exhaustive()
    }
}

/// Runtime settings that shape command behaviour.
#[derive(Debug, Clone)]
pub struct CommandSettings {
    /// Upper bound on a single handler run; `None` disables the bound.
    pub timeout: Option<Duration>,
    pub unmute_policy: UnmutePolicy,
    /// How long the `clear` confirmation stays before deleting itself.
    pub clear_confirmation: Duration,
    /// Permissions integer embedded in the `invite` link.
    pub invite_permissions: u64,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            unmute_policy: UnmutePolicy::FireRegardless,
            clear_confirmation: Duration::from_secs(3),
            invite_permissions: 8,
        }
    }
}

/// Long-lived collaborators shared by every command invocation.
pub struct BotServices {
    pub db: DatabaseConnection,
    pub registry: Arc<CommandRegistry>,
    pub unmute: UnmuteScheduler,
    pub status: BotStatus,
    pub settings: CommandSettings,
}

/// Everything a handler needs for one invocation.
pub struct CommandContext<'a> {
    pub message: &'a IncomingMessage,
    /// Whitespace-separated tokens after the command name.
    pub args: &'a [String],
    /// Prefix the message was invoked with.
    pub prefix: &'a str,
    pub gateway: Arc<dyn DiscordGateway>,
    pub services: &'a BotServices,
}

impl<'a> CommandContext<'a> {
    /// Replies to the invoking message.
    pub async fn reply(&self, reply: impl Into<Reply>) -> Result<SentMessage, CommandError> {
        Ok(self.gateway.reply(self.message, reply.into()).await?)
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.services.db
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
