use std::collections::HashMap;

use crate::server::command::{basic, moderation, utility, CommandCategory, CommandDescriptor};

/// Name-indexed table of every chat command.
///
/// Built once at startup and shared read-only afterwards.
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Merges descriptor groups in order.
    ///
    /// When a name repeats, the later descriptor replaces the earlier one but keeps
    /// the earlier registration position.
    pub fn from_groups(groups: impl IntoIterator<Item = Vec<CommandDescriptor>>) -> Self {
        let mut commands: Vec<CommandDescriptor> = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();

        for descriptor in groups.into_iter().flatten() {
            match index.get(descriptor.name) {
                Some(&position) => commands[position] = descriptor,
                None => {
                    index.insert(descriptor.name, commands.len());
                    commands.push(descriptor);
                }
            }
        }

        Self { commands, index }
    }

    /// Registry with the basic, moderation and utility groups, in that order.
    pub fn standard() -> Self {
        Self::from_groups([
            basic::commands(),
            moderation::commands(),
            utility::commands(),
        ])
    }

    /// Finds a command by exact name. Aliases are not consulted.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    /// Every command grouped by category (basic, moderation, utility), then by
    /// registration order.
    pub fn list(&self) -> Vec<&CommandDescriptor> {
        CommandCategory::ORDER
            .iter()
            .flat_map(|category| self.by_category(*category))
            .collect()
    }

    pub fn by_category(&self, category: CommandCategory) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands
            .iter()
            .filter(move |descriptor| descriptor.category == category)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::command::{CommandContext, HandlerFuture};
    use crate::server::model::permission::Permission;

    fn noop<'a>(_ctx: &'a CommandContext<'a>) -> HandlerFuture<'a> {
        Box::pin(async { Ok(()) })
    }

    fn descriptor(
        name: &'static str,
        description: &'static str,
        category: CommandCategory,
    ) -> CommandDescriptor {
        CommandDescriptor {
            name,
            description,
            category,
            usage: None,
            aliases: &[],
            permissions: &[],
            handler: noop,
        }
    }

    #[test]
    fn standard_registry_contains_every_command() {
        let registry = CommandRegistry::standard();
        let names: Vec<&str> = registry.list().iter().map(|d| d.name).collect();

        assert_eq!(
            names,
            vec![
                "help", "ping", "invite", "serverinfo", "kick", "ban", "mute", "unmute",
                "deafen", "undeafen", "clear", "userinfo", "prefix", "debug", "stats",
            ]
        );
    }

    #[test]
    fn moderation_commands_require_permissions() {
        let registry = CommandRegistry::standard();
        let expected = [
            ("kick", Permission::KickMembers),
            ("ban", Permission::BanMembers),
            ("mute", Permission::MuteMembers),
            ("unmute", Permission::MuteMembers),
            ("deafen", Permission::DeafenMembers),
            ("undeafen", Permission::DeafenMembers),
            ("clear", Permission::ManageMessages),
            ("prefix", Permission::ManageGuild),
            ("debug", Permission::Administrator),
        ];

        for (name, permission) in expected {
            let descriptor = registry.lookup(name).unwrap();
            assert_eq!(descriptor.permissions, &[permission], "{}", name);
        }
        assert!(registry.lookup("ping").unwrap().permissions.is_empty());
    }

    #[test]
    fn later_group_wins_and_keeps_position() {
        let registry = CommandRegistry::from_groups([
            vec![
                descriptor("alpha", "first", CommandCategory::Basic),
                descriptor("beta", "first", CommandCategory::Basic),
            ],
            vec![descriptor("alpha", "second", CommandCategory::Basic)],
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("alpha").unwrap().description, "second");
        let names: Vec<&str> = registry.list().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn lists_by_category_order_not_registration_order() {
        let registry = CommandRegistry::from_groups([vec![
            descriptor("tool", "", CommandCategory::Utility),
            descriptor("hammer", "", CommandCategory::Moderation),
            descriptor("hello", "", CommandCategory::Basic),
        ]]);

        let names: Vec<&str> = registry.list().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["hello", "hammer", "tool"]);
    }

    #[test]
    fn lookup_is_exact() {
        let registry = CommandRegistry::standard();

        assert!(registry.lookup("help").is_some());
        assert!(registry.lookup("HELP").is_none());
        assert!(registry.lookup("hel").is_none());
    }
}
