mod guild;
mod moderation;
mod stats;
mod usage;
