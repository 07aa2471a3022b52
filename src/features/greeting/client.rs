use crate::{
    app_lib::{AppConfig, AppError, api::get_json},
    features::greeting::types::Greeting,
};

/// Fetches the greeting from the configured API route.
pub async fn fetch_greeting(config: &AppConfig) -> Result<Greeting, AppError> {
    get_json(&config.api_base_url, &config.greeting_path).await
}
