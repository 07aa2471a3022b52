//! Client helpers for the user directory endpoint.

use crate::{
    app_lib::{AppConfig, AppError, api::get_json},
    features::users::types::User,
};
use std::sync::Arc;

/// Fetches the full user collection from the configured endpoint.
pub async fn list_users(config: &AppConfig) -> Result<Arc<Vec<User>>, AppError> {
    let users: Vec<User> = get_json(&config.api_base_url, &config.users_url).await?;
    tracing::info!(count = users.len(), "user list loaded");
    Ok(Arc::new(users))
}
