//! Service layer for business logic and orchestration.
//!
//! Services sit between the callers (command handlers, bot event handlers and the
//! HTTP controllers) and the repository layer. They apply business rules such as
//! prefix validation and the default prefix fallback, combine repository reads with
//! live gateway data, and convert repository errors into `AppError`.

pub mod guild;
pub mod moderation;
pub mod stats;
pub mod usage;
