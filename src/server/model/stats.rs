use chrono::{DateTime, Utc};

use crate::model::bot::StatsSnapshotDto;

/// Periodic snapshot of bot-wide counters.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub server_count: i64,
    pub user_count: i64,
    pub uptime_secs: i64,
    pub commands_executed: i64,
    pub recorded_at: DateTime<Utc>,
}

impl StatsSnapshot {
    pub fn from_entity(entity: entity::bot_stats::Model) -> Self {
        Self {
            server_count: entity.server_count,
            user_count: entity.user_count,
            uptime_secs: entity.uptime_secs,
            commands_executed: entity.commands_executed,
            recorded_at: entity.recorded_at,
        }
    }

    pub fn into_dto(self) -> StatsSnapshotDto {
        StatsSnapshotDto {
            server_count: self.server_count,
            user_count: self.user_count,
            uptime_secs: self.uptime_secs,
            commands_executed: self.commands_executed,
            recorded_at: self.recorded_at,
        }
    }
}

/// Counters computed on demand from the cache and the usage store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveStats {
    pub guild_count: usize,
    pub user_count: usize,
    pub commands_used: u64,
    pub uptime_secs: u64,
}

/// Formats a duration in seconds as `"1d 2h 3m 4s"`, omitting leading zero units.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_uptime_units() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(61), "1m 1s");
        assert_eq!(format_uptime(3_600), "1h 0m 0s");
        assert_eq!(format_uptime(93_784), "1d 2h 3m 4s");
    }
}
