//! Data transfer objects served by the dashboard API.
//!
//! Snowflake ids are serialized as strings since they exceed the integer precision
//! of JavaScript clients.

pub mod api;
pub mod bot;
pub mod command;
pub mod guild;
pub mod moderation;
pub mod usage;
