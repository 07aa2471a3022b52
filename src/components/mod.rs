//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;
mod user_card;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, SearchInput, Spinner};
pub(crate) use user_card::UserCardItem;
