//! Serenity `Role` fixtures.

use serenity::all::{Permissions, Role};

/// Creates a Serenity Role with the given position and permission bits.
///
/// The role is not hoisted, managed or mentionable and has no colour.
///
/// # Arguments
/// - `role_id` - Discord role ID; use the guild id for the `@everyone` role
/// - `name` - Role name
/// - `position` - Position in the hierarchy (higher outranks lower)
/// - `permissions` - Permission bits granted by the role
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, position: i16, permissions: Permissions) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": position,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
