//! Greeting fetched from the local API. Unlike the user list it has no
//! loading or error state of its own: failures are folded into the text.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod types;

use crate::app_lib::AppError;
pub use types::Greeting;

/// Text shown in the heading once the greeting request settles.
pub fn greeting_text(result: Result<Greeting, AppError>) -> String {
    match result {
        Ok(greeting) => greeting.message,
        Err(err) => {
            tracing::warn!(error = %err, "greeting request failed");
            format!("Error: {}", err.summary())
        }
    }
}
