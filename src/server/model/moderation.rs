use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::moderation::ModerationLogDto;

/// Moderation action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    Kick,
    Ban,
    Mute,
    Unmute,
    Deafen,
    Undeafen,
}

impl ModerationAction {
    /// Stored and serialized name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Deafen => "deafen",
            Self::Undeafen => "undeafen",
        }
    }

    /// Past tense used in confirmation replies ("was kicked").
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Kick => "kicked",
            Self::Ban => "banned",
            Self::Mute => "muted",
            Self::Unmute => "unmuted",
            Self::Deafen => "deafened",
            Self::Undeafen => "undeafened",
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kick" => Ok(Self::Kick),
            "ban" => Ok(Self::Ban),
            "mute" => Ok(Self::Mute),
            "unmute" => Ok(Self::Unmute),
            "deafen" => Ok(Self::Deafen),
            "undeafen" => Ok(Self::Undeafen),
            other => Err(format!("Unknown moderation action '{}'", other)),
        }
    }
}

/// Audit record of a moderation action that succeeded against Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationLog {
    pub log_id: String,
    pub guild_id: u64,
    pub moderator_id: u64,
    pub target_id: u64,
    pub action: ModerationAction,
    pub reason: Option<String>,
    /// Mute duration in minutes.
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl ModerationLog {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ModerationLog)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - An id failed to parse as u64 or the action is unknown
    pub fn from_entity(entity: entity::moderation_log::Model) -> Result<Self, DbErr> {
        let parse_id = |field: &str, value: &str| {
            value
                .parse::<u64>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
        };

        Ok(Self {
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            moderator_id: parse_id("moderator_id", &entity.moderator_id)?,
            target_id: parse_id("target_id", &entity.target_id)?,
            action: entity.action.parse().map_err(DbErr::Custom)?,
            log_id: entity.log_id,
            reason: entity.reason,
            duration: entity.duration,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ModerationLogDto {
        ModerationLogDto {
            id: self.log_id,
            guild_id: self.guild_id.to_string(),
            moderator_id: self.moderator_id.to_string(),
            target_id: self.target_id.to_string(),
            action: self.action.to_string(),
            reason: self.reason,
            duration: self.duration,
            created_at: self.created_at,
        }
    }
}

/// Parameters for writing a moderation log entry.
#[derive(Debug, Clone)]
pub struct CreateModerationLogParams {
    pub guild_id: u64,
    pub moderator_id: u64,
    pub target_id: u64,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub duration: Option<i32>,
}
