//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let _ = history.back();
        }
    };

    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-6xl font-black text-gray-300 dark:text-gray-700 select-none">"404"</h1>
                <p class="text-gray-500 dark:text-gray-400">"Page not found"</p>
                <div class="flex items-center gap-4">
                    <A
                        href="/"
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Go Home"
                    </A>
                    <button
                        on:click=go_back
                        class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
