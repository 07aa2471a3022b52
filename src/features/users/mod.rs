//! User directory feature: record types, the search filter, and the render
//! model the directory page draws from.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod filter;
pub mod types;
pub mod view_model;

pub use filter::{filter_users, filtered_memo};
pub use types::{SearchField, User};
pub use view_model::{DirectoryOptions, DirectoryView, UserCard};
