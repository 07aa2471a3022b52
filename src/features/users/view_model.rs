//! Render model for the directory page. Views only translate these values into
//! markup, so every state the page can show is decided here.

use super::types::{SearchField, User};
use crate::app_lib::FetchState;
use std::sync::Arc;

/// Page title used until (or unless) a greeting replaces it.
pub const DEFAULT_TITLE: &str = "Users (JSONPlaceholder)";
/// Hint shown under list fetch errors.
pub const ERROR_HINT: &str = "(network, CORS, or a temporary outage)";

/// Knobs that distinguish the directory variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryOptions {
    pub include_greeting: bool,
    pub filter_fields: &'static [SearchField],
    /// Only the greeting variant locks the search box while the list loads.
    pub disable_query_while_loading: bool,
    pub title: &'static str,
}

impl DirectoryOptions {
    pub const BASIC: Self = Self {
        include_greeting: false,
        filter_fields: &[SearchField::Name, SearchField::Email, SearchField::Phone],
        disable_query_while_loading: false,
        title: DEFAULT_TITLE,
    };

    pub const WITH_GREETING: Self = Self {
        include_greeting: true,
        filter_fields: &[
            SearchField::Name,
            SearchField::Username,
            SearchField::Email,
            SearchField::Phone,
        ],
        disable_query_while_loading: true,
        title: DEFAULT_TITLE,
    };

    pub fn placeholder(&self) -> String {
        let labels: Vec<&str> = self.filter_fields.iter().map(|field| field.label()).collect();
        format!("Search by {}", labels.join(" / "))
    }

    pub fn query_disabled(&self, state: &FetchState<Arc<Vec<User>>>) -> bool {
        self.disable_query_while_loading && state.is_pending()
    }

    pub fn heading(&self, greeting: Option<&str>) -> String {
        greeting.unwrap_or(self.title).to_string()
    }
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self::BASIC
    }
}

/// One list entry, with absent pieces already dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserCard {
    pub id: u64,
    pub name: String,
    pub handle: Option<String>,
    pub email: String,
    pub details: Option<String>,
}

impl From<&User> for UserCard {
    fn from(user: &User) -> Self {
        let handle = match user.username().trim() {
            "" => None,
            username => Some(format!("@{username}")),
        };
        let parts: Vec<&str> = [user.city(), user.company_name()]
            .into_iter()
            .flatten()
            .collect();
        let details = if parts.is_empty() {
            None
        } else {
            Some(parts.join(" / "))
        };

        Self {
            id: user.id,
            name: user.name().to_string(),
            handle,
            email: user.email().to_string(),
            details,
        }
    }
}

/// What the page body shows, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryView {
    Loading,
    Failed {
        message: String,
        hint: &'static str,
    },
    Listing { status: String, cards: Vec<UserCard> },
}

impl DirectoryView {
    pub fn derive(state: &FetchState<Arc<Vec<User>>>, filtered: &[User]) -> Self {
        match state {
            FetchState::Pending => DirectoryView::Loading,
            FetchState::Failed(message) => DirectoryView::Failed {
                message: error_text(message),
                hint: ERROR_HINT,
            },
            FetchState::Succeeded(users) => DirectoryView::Listing {
                status: status_line(filtered.len(), users.len()),
                cards: filtered.iter().map(UserCard::from).collect(),
            },
        }
    }
}

pub fn status_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} / {total}")
}

pub fn error_text(message: &str) -> String {
    format!("Error: {message}")
}
