//! Case-insensitive substring search over the fetched user list. The result is
//! a pure function of the list, the query, and the searched fields; views read
//! it through [`filtered_memo`] so it only reruns when one of those changes.

use super::types::{SearchField, User};
use crate::app_lib::FetchState;
use leptos::prelude::*;
use std::sync::Arc;

/// Returns the users matching `query` in source order.
///
/// A blank query hands back the same shared list without copying it.
pub fn filter_users(
    users: &Arc<Vec<User>>,
    query: &str,
    fields: &[SearchField],
) -> Arc<Vec<User>> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return Arc::clone(users);
    }

    let matches = users
        .iter()
        .filter(|user| matches_query(user, &needle, fields))
        .cloned()
        .collect();
    Arc::new(matches)
}

/// Filtered list for the current owner, recomputed only when the fetched list
/// or the query changes. Empty until the list has loaded.
pub fn filtered_memo(
    users: RwSignal<FetchState<Arc<Vec<User>>>>,
    query: RwSignal<String>,
    fields: &'static [SearchField],
) -> Memo<Arc<Vec<User>>> {
    filtered_memo_with(users, query, move |list, query| {
        filter_users(list, query, fields)
    })
}

pub fn filtered_memo_with<F>(
    users: RwSignal<FetchState<Arc<Vec<User>>>>,
    query: RwSignal<String>,
    filter: F,
) -> Memo<Arc<Vec<User>>>
where
    F: Fn(&Arc<Vec<User>>, &str) -> Arc<Vec<User>> + Send + Sync + 'static,
{
    // Identity, not contents: a blank query hands back the same Arc.
    Memo::new_with_compare(
        move |_| {
            users.with(|state| match state {
                FetchState::Succeeded(list) => query.with(|query| filter(list, query.as_str())),
                _ => Arc::new(Vec::new()),
            })
        },
        |previous, next| match (previous, next) {
            (Some(previous), Some(next)) => !Arc::ptr_eq(previous, next),
            _ => true,
        },
    )
}

/// Trimmed, lower-cased form of the raw input.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether any searched field contains an already-normalized `needle`.
pub fn matches_query(user: &User, needle: &str, fields: &[SearchField]) -> bool {
    fields
        .iter()
        .any(|field| user.field(*field).to_lowercase().contains(needle))
}
