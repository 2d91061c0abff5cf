use chrono::{DateTime, Utc};
use serenity::all::Permissions;

use crate::server::model::permission::{grants, Permission};

/// Resolved guild membership of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub user_id: u64,
    pub guild_id: u64,
    /// Guild-level permissions from `@everyone` plus every assigned role.
    pub permissions: Permissions,
    /// Position of the member's highest role, 0 when only `@everyone` applies.
    pub highest_role_position: i16,
    pub is_owner: bool,
    pub joined_at: Option<DateTime<Utc>>,
    /// Ids of assigned roles, highest first.
    pub role_ids: Vec<u64>,
    /// Colour of the highest coloured role.
    pub colour: Option<u32>,
}

impl MemberInfo {
    /// Whether the member holds `permission`; owners hold everything.
    pub fn has(&self, permission: Permission) -> bool {
        self.is_owner || grants(self.permissions, permission)
    }

    pub fn has_all(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.has(*p))
    }

    /// Whether `actor` may apply a `permission`-gated action to this member.
    ///
    /// The owner can never be targeted; otherwise the actor must hold the permission
    /// and either own the guild or sit strictly above this member's highest role.
    pub fn manageable_by(&self, actor: &MemberInfo, permission: Permission) -> bool {
        if self.is_owner || !actor.has(permission) {
            return false;
        }
        actor.is_owner || actor.highest_role_position > self.highest_role_position
    }
}

/// Live snapshot of a guild from the cache, as shown by `serverinfo` and the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildOverview {
    pub guild_id: u64,
    pub name: String,
    pub icon_url: Option<String>,
    pub owner_id: u64,
    pub member_count: u64,
    pub channel_count: usize,
    pub role_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Sizes of the gateway cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCounts {
    pub guilds: usize,
    pub users: usize,
    pub channels: usize,
}
