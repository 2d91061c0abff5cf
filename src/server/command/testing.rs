//! Shared harness for command and dispatcher tests.

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{
    bot::{gateway::fake::FakeGateway, status::BotStatus},
    command::{
        registry::CommandRegistry, BotServices, CommandContext, CommandHandler, CommandSettings,
    },
    error::command::CommandError,
    model::{guild::DEFAULT_PREFIX, message::IncomingMessage},
    scheduler::unmute::UnmuteScheduler,
};

pub(crate) struct Harness {
    _test: TestContext,
    pub services: Arc<BotServices>,
    pub gateway: Arc<FakeGateway>,
}

impl Harness {
    pub async fn new(gateway: FakeGateway) -> Self {
        Self::with_settings(gateway, CommandSettings::default()).await
    }

    pub async fn with_settings(gateway: FakeGateway, settings: CommandSettings) -> Self {
        let test = TestBuilder::new()
            .with_dispatch_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let services = Arc::new(BotServices {
            db,
            registry: Arc::new(CommandRegistry::standard()),
            unmute: UnmuteScheduler::new(),
            status: BotStatus::new(),
            settings,
        });

        Self {
            _test: test,
            services,
            gateway: Arc::new(gateway),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.services.db
    }

    /// Invokes a handler directly, taking arguments from the message text after the
    /// command name.
    pub async fn run(
        &self,
        handler: CommandHandler,
        message: &IncomingMessage,
    ) -> Result<(), CommandError> {
        let args: Vec<String> = message
            .content
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect();
        let ctx = CommandContext {
            message,
            args: &args,
            prefix: DEFAULT_PREFIX,
            gateway: self.gateway.clone(),
            services: &self.services,
        };
        handler(&ctx).await
    }
}
