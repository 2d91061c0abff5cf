//! HTTP handlers of the dashboard API.
//!
//! Every handler returns the `{ success, data, message }` envelope from
//! `model::api`; failures are rendered by `AppError`'s `IntoResponse` impl.

pub mod command;
pub mod guild;
pub mod moderation;
pub mod param;
pub mod stats;
pub mod status;
pub mod usage;

#[cfg(test)]
mod test;
