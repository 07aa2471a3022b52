//! Directory route: fetches the user list on mount, filters it by the search
//! query, and renders whichever state the fetch is in. The greeting variant
//! also fetches a heading from the local API.

use crate::{
    app_lib::{AppConfig, FetchState, RequestGuard, run_guarded},
    components::{Alert, AlertKind, AppShell, SearchInput, Spinner, UserCardItem},
    features::{
        greeting::{self, greeting_text},
        users::{DirectoryOptions, DirectoryView, User, client, filtered_memo},
    },
};
use leptos::{prelude::*, task::spawn_local};
use std::sync::Arc;

/// Directory searching name, email and phone.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    view! { <Directory options=DirectoryOptions::BASIC /> }
}

/// Directory with the greeting heading and the wider field set.
#[component]
pub fn GreetingDirectoryPage() -> impl IntoView {
    view! { <Directory options=DirectoryOptions::WITH_GREETING /> }
}

#[component]
fn Directory(options: DirectoryOptions) -> impl IntoView {
    let config = AppConfig::load();
    let users = RwSignal::new(FetchState::<Arc<Vec<User>>>::Pending);
    let query = RwSignal::new(String::new());
    let greeting = RwSignal::new(None::<String>);

    let guard = RequestGuard::new();
    guard.invalidate_on_cleanup();

    let ticket = guard.begin();
    let list_config = config.clone();
    spawn_local(async move {
        run_guarded("users", ticket, client::list_users(&list_config), move |state| {
            users.set(state)
        })
        .await;
    });

    if options.include_greeting {
        spawn_local(async move {
            let text = greeting_text(greeting::client::fetch_greeting(&config).await);
            // No guard here; a disposed signal just rejects the write.
            let _ = greeting.try_set(Some(text));
        });
    }

    let filtered = filtered_memo(users, query, options.filter_fields);
    let body = Memo::new(move |_| {
        users.with(|state| filtered.with(|list| DirectoryView::derive(state, list)))
    });
    let query_disabled = Signal::derive(move || users.with(|state| options.query_disabled(state)));

    view! {
        <AppShell>
            <div class="space-y-4">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    {move || greeting.with(|text| options.heading(text.as_deref()))}
                </h1>

                <SearchInput query=query placeholder=options.placeholder() disabled=query_disabled />

                {move || match body.get() {
                    DirectoryView::Loading => view! { <Spinner label="Loading..." /> }.into_any(),
                    DirectoryView::Failed { message, hint } => {
                        view! { <Alert kind=AlertKind::Error message=message detail=hint /> }
                            .into_any()
                    }
                    DirectoryView::Listing { status, cards } => {
                        view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">{status}</p>
                            <ul class="grid gap-3">
                                <For
                                    each=move || cards.clone()
                                    key=|card| card.id
                                    children=|card| view! { <UserCardItem card=card /> }
                                />
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
