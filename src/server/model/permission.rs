use serenity::all::Permissions;
use std::fmt;

/// Closed set of Discord permissions a command can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    KickMembers,
    BanMembers,
    MuteMembers,
    DeafenMembers,
    ManageMessages,
    ManageGuild,
    Administrator,
}

impl Permission {
    /// Serenity permission bits for this token.
    pub fn bits(&self) -> Permissions {
        match self {
            Self::KickMembers => Permissions::KICK_MEMBERS,
            Self::BanMembers => Permissions::BAN_MEMBERS,
            Self::MuteMembers => Permissions::MUTE_MEMBERS,
            Self::DeafenMembers => Permissions::DEAFEN_MEMBERS,
            Self::ManageMessages => Permissions::MANAGE_MESSAGES,
            Self::ManageGuild => Permissions::MANAGE_GUILD,
            Self::Administrator => Permissions::ADMINISTRATOR,
        }
    }

    /// Discord's constant name, as shown in the command catalog.
    pub fn name(&self) -> &'static str {
        match self {
            Self::KickMembers => "KICK_MEMBERS",
            Self::BanMembers => "BAN_MEMBERS",
            Self::MuteMembers => "MUTE_MEMBERS",
            Self::DeafenMembers => "DEAFEN_MEMBERS",
            Self::ManageMessages => "MANAGE_MESSAGES",
            Self::ManageGuild => "MANAGE_GUILD",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `granted` satisfies `required`. Administrator implies every permission.
pub fn grants(granted: Permissions, required: Permission) -> bool {
    granted.contains(Permissions::ADMINISTRATOR) || granted.contains(required.bits())
}
