//! Test factory for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User on the pomelo username system (discriminator 0).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Unique username
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": false,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
