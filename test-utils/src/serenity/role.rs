//! Test factory for creating Serenity Role objects.

use serenity::all::{Permissions, Role};

/// Creates a test Serenity Role with zero permissions.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
/// - `color` - Role color as a 32-bit integer (RGB)
/// - `position` - Role position in the hierarchy (higher = more important)
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str, color: u32, position: i16) -> Role {
    create_test_role_with_permissions(role_id, name, color, position, Permissions::empty())
}

/// Creates a test Serenity Role carrying the administrator permission.
pub fn create_test_admin_role(role_id: u64, name: &str, position: i16) -> Role {
    create_test_role_with_permissions(role_id, name, 0, position, Permissions::ADMINISTRATOR)
}

/// Creates a test Serenity Role with an explicit permission set.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role_with_permissions(
    role_id: u64,
    name: &str,
    color: u32,
    position: i16,
    permissions: Permissions,
) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": color,
        "colors": {
            "primary_color": color,
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
