//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. The chat-facing types (`message`,
//! `member`, `reply`, `permission`) describe what the gateway collaborator exchanges
//! with command handlers, independent of Serenity's model structs.

pub mod guild;
pub mod member;
pub mod message;
pub mod moderation;
pub mod permission;
pub mod reply;
pub mod stats;
pub mod usage;
