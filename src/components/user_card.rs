//! Single directory entry. Absent pieces are already dropped by the card model,
//! so nothing here renders a placeholder.

use crate::features::users::UserCard;
use leptos::prelude::*;

#[component]
pub fn UserCardItem(card: UserCard) -> impl IntoView {
    let UserCard {
        name,
        handle,
        email,
        details,
        ..
    } = card;

    view! {
        <li class="p-3 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
            <div class="font-semibold text-gray-900 dark:text-white">
                {name}
                {handle.map(|handle| view! {
                    " "
                    <span class="font-normal text-gray-500 dark:text-gray-400">{handle}</span>
                })}
            </div>
            <div class="text-sm text-gray-700 dark:text-gray-200">{email}</div>
            {details.map(|details| view! {
                <div class="text-xs text-gray-500 dark:text-gray-400">{details}</div>
            })}
        </li>
    }
}
