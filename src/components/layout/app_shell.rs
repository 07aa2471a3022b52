//! Shared layout wrapper with navigation and content container.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const LINKS: &[(&str, &str)] = &[("/", "Directory"), ("/hello", "Greeting"), ("/health", "Health")];

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <nav class="max-w-screen-xl flex items-center gap-6 mx-auto p-4">
                    <span class="font-semibold whitespace-nowrap dark:text-white">"userdir"</span>
                    {LINKS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <A
                                    href=href
                                    {..}
                                    class="text-sm text-gray-600 hover:text-blue-700 dark:text-gray-300"
                                    class:font-semibold=move || pathname.get() == href
                                >
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="flex-1 w-full max-w-screen-xl mx-auto p-6">{children()}</main>
        </div>
    }
}
