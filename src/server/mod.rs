//! Bot runtime and dashboard backend.
//!
//! The crate runs two front ends over one set of services: the Discord gateway
//! (chat commands and guild lifecycle events) and an Axum HTTP API for the
//! dashboard. Both share the SeaORM connection and the bot status handle.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity client, event handlers and the `DiscordGateway` seam
//! - **Command** (`command/`) - Command registry, dispatcher and the command handlers
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic shared by commands and controllers
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Scheduler** (`scheduler/`) - Timed auto-unmutes and periodic stats snapshots
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared HTTP handler state
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Message Flow
//!
//! 1. **Bot** receives a message event and converts it to an `IncomingMessage`
//! 2. **Dispatcher** resolves the prefix, parses and looks up the command
//! 3. **Dispatcher** checks the invoker's permissions and records usage
//! 4. **Command** handler calls services and the gateway, then replies

pub mod bot;
pub mod command;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
