//! Background jobs.
//!
//! - [`unmute`] - one-shot auto-unmute tasks created by the `mute` command
//! - [`bot_stats`] - periodic bot statistics snapshots driven by a cron schedule

pub mod bot_stats;
pub mod unmute;
